//! Session and round state
//!
//! `Session` lives for the whole game and is only reset by the host.
//! `RoundState` is rebuilt every time a round starts.

use crate::config::STARTING_LIVES;
use crate::types::Threshold;

/// Score and lives for the current game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    score: u32,
    lives: u8,
    game_over: bool,
}

impl Session {
    /// Fresh session: no score, full lives
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            game_over: false,
        }
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Remaining lives
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Check if the game has ended
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Check if no lives remain
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.lives == 0
    }

    /// Add points (ignored once the game is over)
    pub fn add_points(&mut self, points: u32) {
        if !self.game_over {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Lose one life (ignored once the game is over), returns lives left
    pub fn lose_life(&mut self) -> u8 {
        if !self.game_over {
            self.lives = self.lives.saturating_sub(1);
        }
        self.lives
    }

    /// Mark the game as over
    pub fn end(&mut self) {
        self.game_over = true;
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Session {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Session(score={}, lives={}, over={})",
            self.score,
            self.lives,
            self.game_over
        );
    }
}

/// Per-round data
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundState {
    /// Target distance, distance-match rounds only
    pub threshold: Option<Threshold>,
    /// Host asked for live distance sampling
    pub measuring: bool,
    /// Red light window in progress, dodge rounds only
    pub red_light_active: bool,
    /// Proximity level captured at round start, dodge rounds only
    pub baseline_triggered: bool,
}

impl RoundState {
    /// New distance-match round, sampling off
    #[must_use]
    pub const fn distance(threshold: Threshold) -> Self {
        Self {
            threshold: Some(threshold),
            measuring: false,
            red_light_active: false,
            baseline_triggered: false,
        }
    }

    /// New dodge round, green light
    #[must_use]
    pub const fn dodge(baseline_triggered: bool) -> Self {
        Self {
            threshold: None,
            measuring: false,
            red_light_active: false,
            baseline_triggered,
        }
    }
}

/// Engine lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No mode selected
    #[default]
    Idle,
    /// Mode selected, round not started yet
    AwaitingRound,
    /// Round running
    RoundInProgress,
    /// Round outcome applied, next round starts on the following tick
    RoundResolved,
    /// Lives exhausted, waiting for RESTART
    GameOver,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Phase {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "Idle"),
            Self::AwaitingRound => defmt::write!(f, "AwaitingRound"),
            Self::RoundInProgress => defmt::write!(f, "RoundInProgress"),
            Self::RoundResolved => defmt::write!(f, "RoundResolved"),
            Self::GameOver => defmt::write!(f, "GameOver"),
        }
    }
}
