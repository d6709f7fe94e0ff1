//! Shared types used across the game firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{THRESHOLD_MAX_CM, THRESHOLD_MIN_CM};

/// Active game mode, selected by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameMode {
    /// No game selected
    #[default]
    None,
    /// Match a randomly chosen target distance
    DistanceMatch,
    /// Red light / green light with the proximity sensor
    DodgeObstacle,
}

impl GameMode {
    /// Name used in host reports
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::None => "NO_GAME",
            Self::DistanceMatch => "DISTANCE_MATCH",
            Self::DodgeObstacle => "DODGE_OBSTACLE",
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GameMode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.wire_name());
    }
}

/// Electrical level that means "triggered" for a digital sensor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Pin high means triggered
    #[default]
    ActiveHigh,
    /// Pin low means triggered (pull-down wiring)
    ActiveLow,
}

impl Polarity {
    /// Translate a raw pin level into a triggered flag
    #[must_use]
    pub const fn is_active(self, level_high: bool) -> bool {
        match self {
            Self::ActiveHigh => level_high,
            Self::ActiveLow => !level_high,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Polarity {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ActiveHigh => defmt::write!(f, "active-high"),
            Self::ActiveLow => defmt::write!(f, "active-low"),
        }
    }
}

/// One ultrasonic distance reading in centimetres
///
/// Produced once per trigger cycle by the echo capture and consumed once
/// by the round logic.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct DistanceSample(f32);

impl DistanceSample {
    /// Speed of sound in cm/us
    pub const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

    /// Build a sample from a distance in centimetres
    #[must_use]
    pub const fn from_cm(cm: f32) -> Self {
        Self(cm)
    }

    /// Build a sample from a round-trip echo duration
    #[must_use]
    pub fn from_echo_us(elapsed_us: u32) -> Self {
        Self(elapsed_us as f32 * Self::SPEED_OF_SOUND_CM_PER_US / 2.0)
    }

    /// Distance in centimetres
    #[must_use]
    pub const fn as_cm(self) -> f32 {
        self.0
    }

    /// Distance truncated to whole centimetres
    #[must_use]
    pub fn whole_cm(self) -> i32 {
        self.0 as i32
    }

    /// Raw bits for atomic storage
    #[must_use]
    pub fn to_bits(self) -> u32 {
        self.0.to_bits()
    }

    /// Rebuild from raw bits
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self(f32::from_bits(bits))
    }
}

impl fmt::Debug for DistanceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DistanceSample({} cm)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DistanceSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} cm", self.0);
    }
}

/// Target distance for a distance-match round, always within 10..=50 cm
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Create a threshold, returns None if outside the playable range
    #[must_use]
    pub const fn from_cm(cm: u8) -> Option<Self> {
        if cm >= THRESHOLD_MIN_CM && cm <= THRESHOLD_MAX_CM {
            Some(Self(cm))
        } else {
            None
        }
    }

    /// Number of distinct thresholds
    #[must_use]
    pub const fn span() -> u32 {
        (THRESHOLD_MAX_CM - THRESHOLD_MIN_CM) as u32 + 1
    }

    /// Map an index in `0..span()` onto the range, clamping out-of-range indices
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        let offset = index.min(Self::span() - 1) as u8;
        Self(THRESHOLD_MIN_CM + offset)
    }

    /// Threshold in centimetres
    #[must_use]
    pub const fn as_cm(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Threshold {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} cm", self.0);
    }
}
