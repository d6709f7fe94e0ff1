//! Capability traits the round engine runs against
//!
//! Each port is infallible by contract: adapters log and absorb hardware
//! faults so the state machine only ever sees game-level outcomes.

use crate::game::event::GameEvent;
use crate::types::DistanceSample;

/// Ultrasonic ranging capability
pub trait Rangefinder {
    /// Drop any pending sample and start a new measurement
    fn trigger(&mut self);

    /// Pending sample, left in place
    fn latest(&self) -> Option<DistanceSample>;

    /// Pending sample, consumed
    fn take(&mut self) -> Option<DistanceSample>;

    /// Drop any pending sample
    fn discard(&mut self) {
        let _ = self.take();
    }
}

/// Binary presence detection capability
pub trait PresenceSensor {
    /// Check if an object is currently detected
    fn is_triggered(&mut self) -> bool;
}

/// Blocking wait capability
///
/// Pauses stall the whole control loop, command processing included.
pub trait Pacer {
    /// Block for the given number of milliseconds
    fn pause_ms(&mut self, ms: u32);
}

/// Random source for round setup and red-light rolls
pub trait Dice {
    /// Uniform value in `0..bound` (0 when `bound` is 0)
    fn roll(&mut self, bound: u32) -> u32;

    /// True with probability `numerator / denominator`
    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        denominator > 0 && self.roll(denominator) < numerator
    }
}

/// Destination for state-transition reports
pub trait EventSink {
    /// Deliver one event; delivery is fire-and-forget
    fn emit(&mut self, event: &GameEvent);
}
