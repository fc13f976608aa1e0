//! Car and factory validation tests

use car_sim::simulation::{
    BuildCar, Car, CarFactory, Engine, Gearbox, HealthReport, Part, Tire, DEFAULT_PART_HEALTH,
    TIRE_COUNT,
};

fn drive_to_string(car: &mut Car) -> String {
    let mut out = Vec::new();
    car.drive(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).unwrap()
}

fn report_to_string(car: &Car) -> String {
    let mut out = Vec::new();
    car.report(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_factory_builds_default_car() {
    let car = CarFactory::create_car();
    assert_eq!(car.engine().health(), DEFAULT_PART_HEALTH);
    assert_eq!(car.gearbox().health(), DEFAULT_PART_HEALTH);
    assert_eq!(car.tires().len(), TIRE_COUNT);
    assert!(car.tires().iter().all(|t| t.health() == DEFAULT_PART_HEALTH));
    assert!(car.is_drivable());
}

#[test]
fn test_factory_is_deterministic() {
    assert_eq!(CarFactory::create_car(), CarFactory.build_car());
}

#[test]
fn test_drive_order_and_header() {
    let mut car = CarFactory::create_car();
    assert_eq!(
        drive_to_string(&mut car),
        "\n--- driving ---\nEngine running\ngear changed\n"
    );
    assert_eq!(
        car.health_snapshot(),
        HealthReport {
            engine: 5,
            gearbox: 7,
            tires: [8, 8, 8, 8],
        }
    );
}

#[test]
fn test_drive_continues_past_broken_parts() {
    let mut car = Car::new(
        Engine::with_health(0),
        Gearbox::new(),
        [Tire::new(), Tire::with_health(0), Tire::new(), Tire::new()],
    );
    assert!(!car.is_drivable());

    assert_eq!(
        drive_to_string(&mut car),
        "\n--- driving ---\nEngine dead. Car cannot move.\ngear changed\nTire blown. No grip.\n"
    );
    assert_eq!(car.health_snapshot().tires, [8, 0, 8, 8]);
}

#[test]
fn test_drive_prints_header_when_everything_is_broken() {
    let mut car = Car::new(
        Engine::with_health(0),
        Gearbox::with_health(0),
        [
            Tire::with_health(0),
            Tire::with_health(0),
            Tire::with_health(0),
            Tire::with_health(0),
        ],
    );
    let before = car.clone();

    assert_eq!(
        drive_to_string(&mut car),
        "\n--- driving ---\n\
         Engine dead. Car cannot move.\n\
         Gearbox failed. stoped.\n\
         Tire blown. No grip.\n\
         Tire blown. No grip.\n\
         Tire blown. No grip.\n\
         Tire blown. No grip.\n"
    );
    assert_eq!(car, before);
}

#[test]
fn test_report_format() {
    let car = Car::new(
        Engine::with_health(3),
        Gearbox::new(),
        [
            Tire::with_health(1),
            Tire::with_health(2),
            Tire::with_health(3),
            Tire::with_health(4),
        ],
    );
    assert_eq!(
        report_to_string(&car),
        "\n--- Car Health Report ---\n\
         Engine: 3\n\
         Gearbox: 10\n\
         tire 1: 1\n\
         tire 2: 2\n\
         tire 3: 3\n\
         tire 4: 4\n"
    );
}

#[test]
fn test_report_is_pure() {
    let mut car = CarFactory::create_car();
    drive_to_string(&mut car);
    let snapshot = car.health_snapshot();

    let first = report_to_string(&car);
    let second = report_to_string(&car);
    assert_eq!(first, second);
    assert_eq!(car.health_snapshot(), snapshot);
}

#[test]
fn test_tire_order_is_stable() {
    let mut car = Car::new(
        Engine::new(),
        Gearbox::new(),
        [
            Tire::with_health(10),
            Tire::with_health(9),
            Tire::with_health(8),
            Tire::with_health(7),
        ],
    );
    for _ in 0..3 {
        drive_to_string(&mut car);
    }
    assert_eq!(car.health_snapshot().tires, [4, 3, 2, 1]);
}

#[test]
fn test_wear_is_exact_per_cycle() {
    let mut car = CarFactory::create_car();
    let wears = [
        car.engine().wear(),
        car.gearbox().wear(),
        car.tires()[0].wear(),
    ];

    for _ in 0..8 {
        let before = car.health_snapshot();
        drive_to_string(&mut car);
        let after = car.health_snapshot();

        let pairs = [
            (before.engine, after.engine, wears[0]),
            (before.gearbox, after.gearbox, wears[1]),
        ]
        .into_iter()
        .chain(
            before
                .tires
                .iter()
                .zip(after.tires.iter())
                .map(|(b, a)| (*b, *a, wears[2])),
        );

        for (before, after, wear) in pairs {
            if before == 0 {
                assert_eq!(after, 0, "broken parts must not change");
            } else {
                assert_eq!(after, before.saturating_sub(wear));
            }
        }
    }
}
