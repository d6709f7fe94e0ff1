//! Ranging Game Firmware Library
//!
//! This library provides the core of a microcontroller-resident game
//! controller. An ultrasonic rangefinder and an IR proximity sensor drive
//! two game modes ("distance match" and "dodge obstacle"); every state
//! transition is reported to a host as line-delimited JSON over serial.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │      Control Loop  │  Round Engine  │  Host Protocol         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      SENSOR LAYER                            │
//! │   Echo Capture  │  Ultrasonic Trigger  │  IR Proximity       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │        GPIO  │  EXTI  │  Buffered UART  │  Time driver       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │   embassy-rs (interrupt executor for echo edges)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Ports, not pins**: the engine sees sensors and time through traits
//! - **Profiles, not forks**: board differences are data, not code paths
//! - **No unsafe in application code**: interrupt plumbing lives in `main`
//! - **Functional core, imperative shell**: game rules run on the host too
//! - **Blocking is explicit**: every wait is a visible `Pacer` call

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

#[macro_use]
mod fmt;

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Embassy-backed pacing, clock and serial port.
#[cfg(feature = "embedded")]
pub mod hal;

/// Sensor Drivers
///
/// Echo capture, ultrasonic trigger and IR proximity input.
pub mod sensor;

/// Game Logic
///
/// Round engine, scoring, sessions and hardware profiles.
pub mod game;

/// Communication Protocols
///
/// Host command decoding and JSON status reports.
pub mod protocol;

/// Control Loop
///
/// Polls the host and drives the round engine.
pub mod controller;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::controller::Controller;
    pub use crate::game::dice::XorShift32;
    pub use crate::game::engine::RoundEngine;
    pub use crate::game::profile::ACTIVE_PROFILE;
    pub use crate::hal::serial::{host_serial_config, HostSerial};
    pub use crate::hal::timer::{uptime_seed, BlockingPacer};
    pub use crate::protocol::link::HostLink;
    pub use crate::sensor::echo::{watch_echo, EchoCapture};
    pub use crate::sensor::proximity::ProximitySensor;
    pub use crate::sensor::ranging::DistanceSensor;

    // Embassy
    pub use embassy_time::{Delay, Duration, Instant};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
