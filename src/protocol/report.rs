//! JSON status report formatter
//!
//! Each event becomes one compact JSON object terminated by `\n`, with
//! `status` as the discriminator. Optional fields are only written when
//! the event carries them.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::REPORT_BUFFER_SIZE;
use crate::game::event::GameEvent;
use crate::types::GameMode;

/// Report formatter with a fixed-capacity line buffer
pub struct Report {
    buffer: String<REPORT_BUFFER_SIZE>,
}

impl Report {
    /// Create a new report formatter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Format one event as a JSON line
    ///
    /// # Errors
    ///
    /// Returns `fmt::Error` if the line does not fit the buffer.
    pub fn format(&mut self, event: &GameEvent) -> Result<&str, fmt::Error> {
        self.buffer.clear();
        write!(self.buffer, "{{\"status\":\"{}\"", event.status())?;

        match *event {
            GameEvent::NewDistanceRound {
                threshold,
                score,
                lives,
            } => {
                write!(
                    self.buffer,
                    ",\"game_mode\":\"{}\",\"score\":{score},\"lives\":{lives},\"threshold_distance\":{}",
                    GameMode::DistanceMatch.wire_name(),
                    threshold.as_cm()
                )?;
            }
            GameEvent::NewDodgeRound {
                score,
                lives,
                sensor_active,
            }
            | GameEvent::RedLight {
                score,
                lives,
                sensor_active,
            }
            | GameEvent::Hit {
                score,
                lives,
                sensor_active,
            } => {
                write!(self.buffer, ",\"score\":{score},\"lives\":{lives}")?;
                if let Some(active) = sensor_active {
                    write!(self.buffer, ",\"sensor_active\":{}", u8::from(active))?;
                }
            }
            GameEvent::Measuring {
                distance_cm,
                score,
                lives,
            } => {
                write!(
                    self.buffer,
                    ",\"distance\":{distance_cm},\"score\":{score},\"lives\":{lives}"
                )?;
            }
            GameEvent::TooClose {
                threshold,
                distance_cm,
                score,
                lives,
            } => {
                write!(
                    self.buffer,
                    ",\"lives\":{lives},\"threshold_distance\":{},\"distance\":{distance_cm},\"score\":{score}",
                    threshold.as_cm()
                )?;
            }
            GameEvent::Success {
                round_points,
                threshold,
                distance_cm,
                score,
                lives,
            } => {
                write!(
                    self.buffer,
                    ",\"round_points\":{round_points},\"threshold_distance\":{},\"distance\":{distance_cm},\"score\":{score}",
                    threshold.as_cm()
                )?;
                if let Some(lives) = lives {
                    write!(self.buffer, ",\"lives\":{lives}")?;
                }
            }
            GameEvent::GameOver { score, lives } => {
                write!(self.buffer, ",\"score\":{score},\"lives\":{lives}")?;
            }
        }

        self.buffer.push_str("}\n").map_err(|()| fmt::Error)?;
        Ok(self.buffer.as_str())
    }

    /// Last formatted line
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Last formatted line as bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
