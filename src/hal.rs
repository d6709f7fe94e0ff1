//! Hardware Abstraction Layer
//!
//! Embassy-backed implementations of the engine's ports: blocking pacing,
//! the uptime clock and the host serial port.

pub mod serial;
pub mod timer;
