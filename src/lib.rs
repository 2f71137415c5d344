//! Traffic Flow Simulation Library
//!
//! A menu-driven toy that prints synthetic traffic numbers derived from
//! random draws and closed-form formulas.

pub mod keys;
pub mod menu;
pub mod simulation;
