//! Round Engine
//!
//! Owns the session, the current mode and the round in progress, and
//! advances them one tick at a time from sensor snapshots.
//!
//! ```text
//!   Idle ──DM/DO──▶ AwaitingRound ──tick──▶ RoundInProgress ◀─┐
//!                                                │             │
//!                                          round resolves     tick
//!                                         ┌──────┴──────┐      │
//!                                    lives == 0     lives > 0  │
//!                                         ▼             ▼      │
//!                   RESTART ◀──────── GameOver    RoundResolved┘
//! ```
//!
//! A resolved round keeps its state (threshold, red light) until the next
//! tick sets up the following round.
//!
//! Pauses inside a tick are blocking: while the engine waits, nothing
//! else in the control loop runs, host commands included.

use crate::game::event::GameEvent;
use crate::game::ports::{Dice, EventSink, Pacer, PresenceSensor, Rangefinder};
use crate::game::profile::{HardwareProfile, RedLightHold};
use crate::game::scoring::{self, Verdict};
use crate::game::session::{Phase, RoundState, Session};
use crate::protocol::command::Command;
use crate::types::{GameMode, Threshold};

/// Game state machine
pub struct RoundEngine<R, X, T, D> {
    profile: HardwareProfile,
    mode: GameMode,
    phase: Phase,
    session: Session,
    round: RoundState,
    rangefinder: R,
    proximity: X,
    pacer: T,
    dice: D,
}

impl<R, X, T, D> RoundEngine<R, X, T, D>
where
    R: Rangefinder,
    X: PresenceSensor,
    T: Pacer,
    D: Dice,
{
    /// Create an idle engine with a fresh session
    pub fn new(profile: HardwareProfile, rangefinder: R, proximity: X, pacer: T, dice: D) -> Self {
        Self {
            profile,
            mode: GameMode::None,
            phase: Phase::Idle,
            session: Session::new(),
            round: RoundState::default(),
            rangefinder,
            proximity,
            pacer,
            dice,
        }
    }

    /// Get the active profile
    #[must_use]
    pub const fn profile(&self) -> &HardwareProfile {
        &self.profile
    }

    /// Get the selected mode
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get the lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Get the current round
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Check if the game has ended
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Block the control loop
    pub fn rest(&mut self, ms: u32) {
        self.pacer.pause_ms(ms);
    }

    /// Apply one host command
    ///
    /// While the game is over only `RESTART` has any effect.
    pub fn apply_command<S: EventSink>(&mut self, command: Command, sink: &mut S) {
        if self.session.is_game_over() && command != Command::Restart {
            debug!("engine: {} ignored, game over", command);
            return;
        }

        debug!("engine: command {}", command);
        match command {
            Command::SelectDistanceMatch => self.select_mode(GameMode::DistanceMatch),
            Command::SelectDodgeObstacle => self.select_mode(GameMode::DodgeObstacle),
            Command::Start => self.round.measuring = true,
            Command::Stop => self.round.measuring = false,
            Command::Restart => self.restart(sink),
        }
    }

    fn select_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        if self.profile.reset_on_mode_select {
            self.session.reset();
        }
        self.round = RoundState::default();
        self.phase = Phase::AwaitingRound;
        info!("engine: mode {}", mode);
    }

    /// Fresh session followed by exactly one new round
    pub fn restart<S: EventSink>(&mut self, sink: &mut S) {
        self.session.reset();
        info!("engine: restart");
        self.start_new_round(sink);
    }

    /// Set up and announce a new round for the current mode
    pub fn start_new_round<S: EventSink>(&mut self, sink: &mut S) {
        match self.mode {
            GameMode::DistanceMatch => {
                let threshold = Threshold::from_index(self.dice.roll(Threshold::span()));
                self.rangefinder.discard();
                // Sampling stays off until the host sends START
                self.round = RoundState::distance(threshold);
                self.phase = Phase::RoundInProgress;
                sink.emit(&GameEvent::NewDistanceRound {
                    threshold,
                    score: self.session.score(),
                    lives: self.session.lives(),
                });
                self.pacer.pause_ms(self.profile.round_intro_ms);
            }
            GameMode::DodgeObstacle => {
                let baseline = self.proximity.is_triggered();
                self.round = RoundState::dodge(baseline);
                self.phase = Phase::RoundInProgress;
                sink.emit(&GameEvent::NewDodgeRound {
                    score: self.session.score(),
                    lives: self.session.lives(),
                    sensor_active: self.extended(baseline),
                });
            }
            GameMode::None => {
                self.round = RoundState::default();
                self.phase = Phase::Idle;
            }
        }
    }

    /// Run one tick of game logic for the current mode
    pub fn tick<S: EventSink>(&mut self, sink: &mut S) {
        match self.phase {
            Phase::Idle | Phase::GameOver => {}
            Phase::AwaitingRound | Phase::RoundResolved => self.start_new_round(sink),
            Phase::RoundInProgress => match self.mode {
                GameMode::DistanceMatch => self.tick_distance(sink),
                GameMode::DodgeObstacle => self.tick_dodge(sink),
                GameMode::None => {}
            },
        }
    }

    fn tick_distance<S: EventSink>(&mut self, sink: &mut S) {
        if self.round.measuring {
            self.rangefinder.trigger();
            self.pacer.pause_ms(self.profile.measure_settle_ms);
            if let Some(sample) = self.rangefinder.latest() {
                sink.emit(&GameEvent::Measuring {
                    distance_cm: sample.whole_cm(),
                    score: self.session.score(),
                    lives: self.session.lives(),
                });
            }
            return;
        }

        let Some(threshold) = self.round.threshold else {
            return;
        };
        let Some(sample) = self.rangefinder.take() else {
            return;
        };

        match scoring::judge(threshold, sample) {
            Verdict::TooClose => {
                self.session.lose_life();
                self.pacer.pause_ms(self.profile.miss_pause_ms);
                sink.emit(&GameEvent::TooClose {
                    threshold,
                    distance_cm: sample.whole_cm(),
                    score: self.session.score(),
                    lives: self.session.lives(),
                });
            }
            Verdict::Scored(round_points) => {
                self.session.add_points(round_points);
                sink.emit(&GameEvent::Success {
                    round_points,
                    threshold,
                    distance_cm: sample.whole_cm(),
                    score: self.session.score(),
                    lives: self.extended(self.session.lives()),
                });
            }
        }

        self.pacer.pause_ms(self.profile.cooldown_ms);
        self.resolve_round(sink);
    }

    fn tick_dodge<S: EventSink>(&mut self, sink: &mut S) {
        if self.dice.chance(
            self.profile.red_light_numerator,
            self.profile.red_light_denominator,
        ) {
            self.red_light(sink);
        }

        if self.round.red_light_active {
            self.pacer.pause_ms(self.profile.freeze_settle_ms);
            if self.proximity.is_triggered() {
                self.session.lose_life();
                sink.emit(&GameEvent::Hit {
                    score: self.session.score(),
                    lives: self.session.lives(),
                    sensor_active: self.extended(true),
                });
                self.pacer.pause_ms(self.profile.hit_penalty_ms);
            }
        } else if self.proximity.is_triggered() {
            // Safe move on green
            self.session.add_points(1);
        }

        self.resolve_round(sink);
    }

    fn red_light<S: EventSink>(&mut self, sink: &mut S) {
        self.round.red_light_active = true;
        debug!("engine: red light {}", self.profile.red_light_hold);

        match self.profile.red_light_hold {
            RedLightHold::Fixed { hold_ms } => {
                let sensor_active = self.sensor_report();
                sink.emit(&GameEvent::RedLight {
                    score: self.session.score(),
                    lives: self.session.lives(),
                    sensor_active,
                });
                self.pacer.pause_ms(hold_ms);
            }
            RedLightHold::Polling { period_ms, polls } => {
                for _ in 0..polls.max(1) {
                    let sensor_active = self.sensor_report();
                    sink.emit(&GameEvent::RedLight {
                        score: self.session.score(),
                        lives: self.session.lives(),
                        sensor_active,
                    });
                    self.pacer.pause_ms(period_ms);
                }
            }
        }
    }

    /// End the game on the last life, otherwise wait for the next tick
    fn resolve_round<S: EventSink>(&mut self, sink: &mut S) {
        if self.session.is_exhausted() {
            self.session.end();
            self.phase = Phase::GameOver;
            info!("engine: game over, score {}", self.session.score());
            sink.emit(&GameEvent::GameOver {
                score: self.session.score(),
                lives: self.session.lives(),
            });
        } else {
            self.phase = Phase::RoundResolved;
        }
    }

    /// Proximity level for reports, read only when reports carry it
    fn sensor_report(&mut self) -> Option<bool> {
        if self.profile.extended_reports {
            Some(self.proximity.is_triggered())
        } else {
            None
        }
    }

    fn extended<V: Copy>(&self, value: V) -> Option<V> {
        if self.profile.extended_reports {
            Some(value)
        } else {
            None
        }
    }
}
