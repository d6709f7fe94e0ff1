//! Sensor Drivers
//!
//! Ultrasonic ranging and IR proximity drivers built on `embedded-hal`
//! traits so the same code runs against real pins and host fakes.

pub mod echo;
pub mod proximity;
pub mod ranging;
