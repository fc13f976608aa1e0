//! Drives a car for a fixed number of cycles

use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use super::car::Car;
use super::factory::BuildCar;

/// Cycles run by the binary when none are requested
pub const DEFAULT_CYCLES: u32 = 4;

/// The simulation driver, exclusive owner of its car
#[derive(Debug, Clone)]
pub struct Simulation {
    car: Car,
    cycles_run: u32,
}

impl Simulation {
    pub fn new(car: Car) -> Self {
        Self { car, cycles_run: 0 }
    }

    /// Create a simulation around a car built by `factory`
    pub fn from_factory<F: BuildCar>(factory: &F) -> Self {
        Self::new(factory.build_car())
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    /// Total drive cycles completed over the simulation's lifetime
    pub fn cycles_run(&self) -> u32 {
        self.cycles_run
    }

    /// Drive the car `cycles` times, then write a single health report
    pub fn run<W: Write>(&mut self, cycles: u32, out: &mut W) -> Result<()> {
        info!("Starting simulation: {} cycles", cycles);

        for cycle in 1..=cycles {
            let was_drivable = self.car.is_drivable();
            self.car
                .drive(out)
                .with_context(|| format!("Failed to write output for cycle {}", cycle))?;
            self.cycles_run += 1;

            if was_drivable && !self.car.is_drivable() {
                info!("Car stopped being drivable during cycle {}", cycle);
            }
        }

        self.car
            .report(out)
            .context("Failed to write health report")?;
        out.flush().context("Failed to flush output")?;

        info!(
            "Simulation complete after {} cycles: {:?}",
            self.cycles_run,
            self.car.health_snapshot()
        );
        Ok(())
    }
}
