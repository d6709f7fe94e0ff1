//! Control loop
//!
//! One cooperative loop ties the host link to the round engine:
//!
//! 1. poll at most one host command (non-blocking)
//! 2. if the game is over, idle and start again
//! 3. otherwise run one tick of game logic
//! 4. idle for the tick interval

use embedded_io::{Read, ReadReady, Write};

use crate::config::{GAME_OVER_IDLE_MS, TICK_INTERVAL_MS};
use crate::game::engine::RoundEngine;
use crate::game::ports::{Dice, Pacer, PresenceSensor, Rangefinder};
use crate::protocol::link::HostLink;

/// What a loop iteration did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Game logic ran
    Played,
    /// Game over, logic skipped
    Halted,
}

/// Main loop state
pub struct Controller<S, R, X, T, D> {
    link: HostLink<S>,
    engine: RoundEngine<R, X, T, D>,
    iterations: u32,
}

impl<S, R, X, T, D> Controller<S, R, X, T, D>
where
    S: Read + ReadReady + Write,
    R: Rangefinder,
    X: PresenceSensor,
    T: Pacer,
    D: Dice,
{
    /// Create a controller from a host link and an engine
    pub fn new(link: HostLink<S>, engine: RoundEngine<R, X, T, D>) -> Self {
        Self {
            link,
            engine,
            iterations: 0,
        }
    }

    /// Get the engine
    pub const fn engine(&self) -> &RoundEngine<R, X, T, D> {
        &self.engine
    }

    /// Get the host link
    pub const fn link(&self) -> &HostLink<S> {
        &self.link
    }

    /// Mutable access to the host link
    pub fn link_mut(&mut self) -> &mut HostLink<S> {
        &mut self.link
    }

    /// Number of completed loop iterations
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Announce the opening round (no-op until a mode is selected)
    pub fn boot(&mut self) {
        info!("controller: boot, profile {}", self.engine.profile().name);
        self.engine.start_new_round(&mut self.link);
    }

    /// Run one loop iteration
    pub fn run_once(&mut self) -> Step {
        self.iterations = self.iterations.wrapping_add(1);

        if let Some(command) = self.link.poll_command() {
            self.engine.apply_command(command, &mut self.link);
        }

        if self.engine.is_game_over() {
            self.engine.rest(GAME_OVER_IDLE_MS);
            return Step::Halted;
        }

        self.engine.tick(&mut self.link);
        self.engine.rest(TICK_INTERVAL_MS);
        Step::Played
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        self.boot();
        loop {
            self.run_once();
        }
    }
}
