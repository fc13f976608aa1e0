//! Car Part Simulation Library
//!
//! A small deterministic simulation of a car wearing out its parts, usable
//! as a library or from the `car_sim` binary.

pub mod simulation;
