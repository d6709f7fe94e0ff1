//! Hardware profiles
//!
//! The two deployed board revisions run the same game with different
//! wiring and pacing. Everything that differs between them is collected
//! here instead of in separate code paths.

use crate::types::Polarity;

/// How a red light window is held
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedLightHold {
    /// Single blocking pause
    Fixed {
        /// Window length in milliseconds
        hold_ms: u32,
    },
    /// Repeatedly report the sensor state for the window
    Polling {
        /// Interval between reports in milliseconds
        period_ms: u32,
        /// Number of reports
        polls: u16,
    },
}

impl RedLightHold {
    /// Total window length in milliseconds
    #[must_use]
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::Fixed { hold_ms } => hold_ms,
            Self::Polling { period_ms, polls } => period_ms * polls as u32,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RedLightHold {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Fixed { hold_ms } => defmt::write!(f, "Fixed({}ms)", hold_ms),
            Self::Polling { period_ms, polls } => {
                defmt::write!(f, "Polling({}x{}ms)", polls, period_ms);
            }
        }
    }
}

/// Per-board game parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HardwareProfile {
    /// Short name for logs
    pub name: &'static str,
    /// Active level of the IR proximity input
    pub proximity_polarity: Polarity,
    /// Red light chance per dodge tick, numerator
    pub red_light_numerator: u32,
    /// Red light chance per dodge tick, denominator
    pub red_light_denominator: u32,
    /// Red light window behaviour
    pub red_light_hold: RedLightHold,
    /// Pause before checking for movement during a red light
    pub freeze_settle_ms: u32,
    /// Pause after a red light hit
    pub hit_penalty_ms: u32,
    /// Pause after announcing a distance-match round
    pub round_intro_ms: u32,
    /// Wait for the echo after each trigger
    pub measure_settle_ms: u32,
    /// Pause before reporting a too-close reading
    pub miss_pause_ms: u32,
    /// Pause after a distance-match round resolves
    pub cooldown_ms: u32,
    /// `DM`/`DO` reset score and lives
    pub reset_on_mode_select: bool,
    /// Reports carry the optional `sensor_active`/`lives` fields
    pub extended_reports: bool,
}

impl HardwareProfile {
    /// Red light chance per tick in percent
    #[must_use]
    pub fn red_light_percent(&self) -> f32 {
        if self.red_light_denominator == 0 {
            0.0
        } else {
            self.red_light_numerator as f32 * 100.0 / self.red_light_denominator as f32
        }
    }
}

impl Default for HardwareProfile {
    fn default() -> Self {
        ACTIVE_PROFILE
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for HardwareProfile {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Profile({=str}, {}, {}/{}, {})",
            self.name,
            self.proximity_polarity,
            self.red_light_numerator,
            self.red_light_denominator,
            self.red_light_hold
        );
    }
}

/// First board revision: active-high IR, 10% red light, fixed hold
pub const REV_A: HardwareProfile = HardwareProfile {
    name: "rev-a",
    proximity_polarity: Polarity::ActiveHigh,
    red_light_numerator: 1,
    red_light_denominator: 10,
    red_light_hold: RedLightHold::Fixed { hold_ms: 2_000 },
    freeze_settle_ms: 1_000,
    hit_penalty_ms: 0,
    round_intro_ms: 2_000,
    measure_settle_ms: 100,
    miss_pause_ms: 500,
    cooldown_ms: 3_000,
    reset_on_mode_select: false,
    extended_reports: false,
};

/// Second board revision: active-low IR on a pull-down, 2.5% red light,
/// polling hold and a long hit penalty
pub const REV_B: HardwareProfile = HardwareProfile {
    name: "rev-b",
    proximity_polarity: Polarity::ActiveLow,
    red_light_numerator: 1,
    red_light_denominator: 40,
    red_light_hold: RedLightHold::Polling {
        period_ms: 100,
        polls: 20,
    },
    freeze_settle_ms: 0,
    hit_penalty_ms: 3_000,
    round_intro_ms: 2_000,
    measure_settle_ms: 100,
    miss_pause_ms: 500,
    cooldown_ms: 3_000,
    reset_on_mode_select: true,
    extended_reports: true,
};

/// Profile selected at build time
#[cfg(not(feature = "rev-b"))]
pub const ACTIVE_PROFILE: HardwareProfile = REV_A;

/// Profile selected at build time
#[cfg(feature = "rev-b")]
pub const ACTIVE_PROFILE: HardwareProfile = REV_B;
