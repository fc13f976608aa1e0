//! Consumable car parts
//!
//! Every part carries a [`Condition`] and shares the same operate discipline:
//! a broken part only reports its failure, a working part reports its status
//! and then wears itself down by a fixed amount.

use log::{debug, warn};
use std::io::{self, Write};

/// Health every part starts with when built by the factory
pub const DEFAULT_PART_HEALTH: u32 = 10;

/// Health lost by the engine on each operation
pub const ENGINE_WEAR: u32 = 5;
/// Health lost by the gearbox on each operation
pub const GEARBOX_WEAR: u32 = 3;
/// Health lost by a tire on each operation
pub const TIRE_WEAR: u32 = 2;

/// Current and initial health of a part
///
/// Health only ever goes down, and never below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    health: u32,
    initial: u32,
}

impl Condition {
    pub fn new(initial: u32) -> Self {
        Self {
            health: initial,
            initial,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn initial_health(&self) -> u32 {
        self.initial
    }

    /// A part is broken once its health has reached zero
    pub fn is_broken(&self) -> bool {
        self.health == 0
    }

    /// Subtract `amount` from health, clamping at zero
    pub fn damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new(DEFAULT_PART_HEALTH)
    }
}

/// A consumable component of a car
///
/// Implementors only supply their identity, wear rate and messages; health
/// bookkeeping and the broken check live in the provided methods.
pub trait Part {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Health lost per successful operation
    fn wear(&self) -> u32;

    /// Line printed when the part operates normally, if any
    fn running_message(&self) -> Option<&'static str>;

    /// Line printed when the part is asked to operate while broken
    fn broken_message(&self) -> &'static str;

    fn condition(&self) -> &Condition;

    fn condition_mut(&mut self) -> &mut Condition;

    fn health(&self) -> u32 {
        self.condition().health()
    }

    fn is_broken(&self) -> bool {
        self.condition().is_broken()
    }

    fn damage(&mut self, amount: u32) {
        let was_broken = self.is_broken();
        self.condition_mut().damage(amount);
        if !was_broken && self.is_broken() {
            warn!("{} broke down", self.name());
        }
    }

    /// Run the part for one cycle, writing its status line to `out`
    fn operate(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if self.is_broken() {
            writeln!(out, "{}", self.broken_message())?;
            return Ok(());
        }

        if let Some(message) = self.running_message() {
            writeln!(out, "{}", message)?;
        }

        let wear = self.wear();
        self.damage(wear);
        debug!(
            "{} wore down by {} (health now {})",
            self.name(),
            wear,
            self.health()
        );
        Ok(())
    }
}

/// The engine: wears fastest and announces every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    condition: Condition,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_health(DEFAULT_PART_HEALTH)
    }

    pub fn with_health(health: u32) -> Self {
        Self {
            condition: Condition::new(health),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Part for Engine {
    fn name(&self) -> &'static str {
        "Engine"
    }

    fn wear(&self) -> u32 {
        ENGINE_WEAR
    }

    fn running_message(&self) -> Option<&'static str> {
        Some("Engine running")
    }

    fn broken_message(&self) -> &'static str {
        "Engine dead. Car cannot move."
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn condition_mut(&mut self) -> &mut Condition {
        &mut self.condition
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gearbox {
    condition: Condition,
}

impl Gearbox {
    pub fn new() -> Self {
        Self::with_health(DEFAULT_PART_HEALTH)
    }

    pub fn with_health(health: u32) -> Self {
        Self {
            condition: Condition::new(health),
        }
    }
}

impl Default for Gearbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Part for Gearbox {
    fn name(&self) -> &'static str {
        "Gearbox"
    }

    fn wear(&self) -> u32 {
        GEARBOX_WEAR
    }

    fn running_message(&self) -> Option<&'static str> {
        Some("gear changed")
    }

    fn broken_message(&self) -> &'static str {
        "Gearbox failed. stoped."
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn condition_mut(&mut self) -> &mut Condition {
        &mut self.condition
    }
}

/// A tire. Stays silent while it still has grip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tire {
    condition: Condition,
}

impl Tire {
    pub fn new() -> Self {
        Self::with_health(DEFAULT_PART_HEALTH)
    }

    pub fn with_health(health: u32) -> Self {
        Self {
            condition: Condition::new(health),
        }
    }
}

impl Default for Tire {
    fn default() -> Self {
        Self::new()
    }
}

impl Part for Tire {
    fn name(&self) -> &'static str {
        "Tire"
    }

    fn wear(&self) -> u32 {
        TIRE_WEAR
    }

    // Keeps per-cycle output compact
    fn running_message(&self) -> Option<&'static str> {
        None
    }

    fn broken_message(&self) -> &'static str {
        "Tire blown. No grip."
    }

    fn condition(&self) -> &Condition {
        &self.condition
    }

    fn condition_mut(&mut self) -> &mut Condition {
        &mut self.condition
    }
}
