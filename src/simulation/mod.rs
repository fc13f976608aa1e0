//! Car wear simulation
//!
//! Parts wear down as the car drives. Output is written to any
//! `std::io::Write` sink so the simulation can be checked without a console.

mod car;
mod driver;
mod factory;
mod part;

pub use car::{Car, HealthReport, TIRE_COUNT};
pub use driver::{Simulation, DEFAULT_CYCLES};
pub use factory::{BuildCar, CarFactory};
pub use part::{
    Condition, Engine, Gearbox, Part, Tire, DEFAULT_PART_HEALTH, ENGINE_WEAR, GEARBOX_WEAR,
    TIRE_WEAR,
};
