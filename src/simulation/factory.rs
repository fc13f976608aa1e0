//! Construction of fully wired cars

use super::car::Car;
use super::part::{Engine, Gearbox, Tire};

/// Anything that can build a car for a [`Simulation`](super::Simulation)
pub trait BuildCar {
    fn build_car(&self) -> Car;
}

/// Builds cars whose parts all start at the default health
#[derive(Debug, Clone, Copy, Default)]
pub struct CarFactory;

impl CarFactory {
    pub fn create_car() -> Car {
        Car::new(
            Engine::new(),
            Gearbox::new(),
            [Tire::new(), Tire::new(), Tire::new(), Tire::new()],
        )
    }
}

impl BuildCar for CarFactory {
    fn build_car(&self) -> Car {
        Self::create_car()
    }
}
