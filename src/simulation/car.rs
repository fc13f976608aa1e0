//! The car: sole owner of one engine, one gearbox and four tires

use log::debug;
use std::fmt;
use std::io::{self, Write};

use super::part::{Engine, Gearbox, Part, Tire};

/// Number of tires on every car
pub const TIRE_COUNT: usize = 4;

/// Health of every part of a car at one moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub engine: u32,
    pub gearbox: u32,
    pub tires: [u32; TIRE_COUNT],
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine: {}", self.engine)?;
        writeln!(f, "Gearbox: {}", self.gearbox)?;
        for (i, health) in self.tires.iter().enumerate() {
            writeln!(f, "tire {}: {}", i + 1, health)?;
        }
        Ok(())
    }
}

/// A car in the simulation
///
/// Parts are owned by value and are only reachable mutably through
/// [`Car::drive`]. Tire order never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    engine: Engine,
    gearbox: Gearbox,
    tires: [Tire; TIRE_COUNT],
}

impl Car {
    pub fn new(engine: Engine, gearbox: Gearbox, tires: [Tire; TIRE_COUNT]) -> Self {
        Self {
            engine,
            gearbox,
            tires,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn gearbox(&self) -> &Gearbox {
        &self.gearbox
    }

    pub fn tires(&self) -> &[Tire; TIRE_COUNT] {
        &self.tires
    }

    /// True while neither the engine nor the gearbox is broken
    pub fn is_drivable(&self) -> bool {
        !self.engine.is_broken() && !self.gearbox.is_broken()
    }

    /// Run one cycle: engine, gearbox, then each tire in order.
    /// A broken part never stops the remaining parts from operating.
    pub fn drive(&mut self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- driving ---")?;

        self.engine.operate(out)?;
        self.gearbox.operate(out)?;
        for tire in self.tires.iter_mut() {
            tire.operate(out)?;
        }

        debug!("Cycle done: {:?}", self.health_snapshot());
        Ok(())
    }

    pub fn health_snapshot(&self) -> HealthReport {
        HealthReport {
            engine: self.engine.health(),
            gearbox: self.gearbox.health(),
            tires: [
                self.tires[0].health(),
                self.tires[1].health(),
                self.tires[2].health(),
                self.tires[3].health(),
            ],
        }
    }

    /// Write the current health of every part. Does not touch any state.
    pub fn report(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Car Health Report ---")?;
        write!(out, "{}", self.health_snapshot())
    }
}
