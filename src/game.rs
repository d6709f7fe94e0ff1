//! Game Logic
//!
//! State machine, scoring rules and per-board profiles for the two game
//! modes. Implements the functional core of the controller; hardware is
//! reached only through the traits in [`ports`].

pub mod dice;
pub mod engine;
pub mod event;
pub mod ports;
pub mod profile;
pub mod scoring;
pub mod session;
