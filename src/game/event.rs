//! State-transition events reported to the host

use crate::types::Threshold;

/// One reportable state transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Distance-match round announced
    NewDistanceRound {
        /// Target distance
        threshold: Threshold,
        /// Session score
        score: u32,
        /// Session lives
        lives: u8,
    },
    /// Dodge round announced
    NewDodgeRound {
        /// Session score
        score: u32,
        /// Session lives
        lives: u8,
        /// Proximity level at round start (extended reports only)
        sensor_active: Option<bool>,
    },
    /// Live distance reading while sampling
    Measuring {
        /// Truncated distance in cm
        distance_cm: i32,
        /// Session score
        score: u32,
        /// Session lives
        lives: u8,
    },
    /// Reading closer than the target, life lost (`ERROR` on the wire)
    TooClose {
        /// Target distance
        threshold: Threshold,
        /// Truncated distance in cm
        distance_cm: i32,
        /// Session score
        score: u32,
        /// Lives after the loss
        lives: u8,
    },
    /// Reading at or beyond the target
    Success {
        /// Points awarded this round
        round_points: u32,
        /// Target distance
        threshold: Threshold,
        /// Truncated distance in cm
        distance_cm: i32,
        /// Score after the award
        score: u32,
        /// Session lives (extended reports only)
        lives: Option<u8>,
    },
    /// Red light window started or polled
    RedLight {
        /// Session score
        score: u32,
        /// Session lives
        lives: u8,
        /// Current proximity level (extended reports only)
        sensor_active: Option<bool>,
    },
    /// Movement caught during a red light, life lost
    Hit {
        /// Session score
        score: u32,
        /// Lives after the loss
        lives: u8,
        /// Proximity level that caused the hit (extended reports only)
        sensor_active: Option<bool>,
    },
    /// Lives exhausted
    GameOver {
        /// Final score
        score: u32,
        /// Final lives
        lives: u8,
    },
}

impl GameEvent {
    /// Wire discriminator for the `status` field
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::NewDistanceRound { .. } | Self::NewDodgeRound { .. } => "NEW_ROUND",
            Self::Measuring { .. } => "MEASURING",
            Self::TooClose { .. } => "ERROR",
            Self::Success { .. } => "SUCCESS",
            Self::RedLight { .. } => "RED_LIGHT",
            Self::Hit { .. } => "HIT",
            Self::GameOver { .. } => "GAME_OVER",
        }
    }

    /// Lives carried by the event, if any
    #[must_use]
    pub const fn lives(&self) -> Option<u8> {
        match *self {
            Self::NewDistanceRound { lives, .. }
            | Self::NewDodgeRound { lives, .. }
            | Self::Measuring { lives, .. }
            | Self::TooClose { lives, .. }
            | Self::RedLight { lives, .. }
            | Self::Hit { lives, .. }
            | Self::GameOver { lives, .. } => Some(lives),
            Self::Success { lives, .. } => lives,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GameEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::NewDistanceRound { threshold, .. } => {
                defmt::write!(f, "NewRound(target={})", threshold);
            }
            Self::TooClose { distance_cm, .. } => defmt::write!(f, "TooClose({}cm)", distance_cm),
            Self::Success { round_points, .. } => defmt::write!(f, "Success(+{})", round_points),
            Self::GameOver { score, .. } => defmt::write!(f, "GameOver({})", score),
            other => defmt::write!(f, "{=str}", other.status()),
        }
    }
}
