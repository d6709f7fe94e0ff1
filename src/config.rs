//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the game controller.
//! Pin mappings, serial parameters, loop timing and game limits are
//! centralized here. Per-board behaviour lives in [`crate::game::profile`].

/// Host serial link baud rate
pub const SERIAL_BAUD: u32 = 9_600;

/// Inbound command buffer size in bytes
pub const COMMAND_BUFFER_SIZE: usize = 20;

/// Outbound report buffer size in bytes
pub const REPORT_BUFFER_SIZE: usize = 160;

/// UART transmit ring size in bytes
pub const UART_TX_RING_SIZE: usize = 256;

/// UART receive ring size in bytes
pub const UART_RX_RING_SIZE: usize = 64;

/// Main loop idle interval between ticks
pub const TICK_INTERVAL_MS: u32 = 10;

/// Idle interval while the game is over
pub const GAME_OVER_IDLE_MS: u32 = 1_000;

/// Lives at the start of a session
pub const STARTING_LIVES: u8 = 3;

/// Smallest distance-match target in centimetres
pub const THRESHOLD_MIN_CM: u8 = 10;

/// Largest distance-match target in centimetres
pub const THRESHOLD_MAX_CM: u8 = 50;

/// Readings beyond this distance never score
pub const MAX_SCORING_DISTANCE_CM: f32 = 50.0;

/// Points for a perfect distance match
pub const MAX_ROUND_POINTS: u32 = 100;

/// Points lost per centimetre of error
pub const POINTS_PER_CM_ERROR: u32 = 2;

/// Ultrasonic trigger pulse width in microseconds
pub const TRIGGER_PULSE_US: u32 = 10;

/// Pin assignments for GPIO
pub mod pins {
    //! Arduino-header pin assignments on the Nucleo-64 board

    /// Ultrasonic trigger output (Arduino D7)
    pub const TRIGGER: &str = "PA8";

    /// Ultrasonic echo input, EXTI line 10 (Arduino D6)
    pub const ECHO: &str = "PB10";

    /// IR proximity input (Arduino A0)
    pub const PROXIMITY: &str = "PA0";

    /// Host link TX (ST-LINK virtual COM port)
    pub const HOST_TX: &str = "PA2";

    /// Host link RX (ST-LINK virtual COM port)
    pub const HOST_RX: &str = "PA3";
}
