//! Timer Abstractions
//!
//! Blocking waits and the microsecond uptime clock used for echo timing
//! and seeding.

use embassy_time::{block_for, Duration, Instant};

use crate::game::ports::Pacer;

/// Busy-waiting pacer on the embassy time driver
///
/// Blocks the calling context. Tasks on higher-priority executors (the
/// echo watcher) keep running.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockingPacer;

impl Pacer for BlockingPacer {
    fn pause_ms(&mut self, ms: u32) {
        if ms > 0 {
            block_for(Duration::from_millis(u64::from(ms)));
        }
    }
}

/// Uptime in microseconds, wrapping every ~71 minutes
#[must_use]
pub fn uptime_us() -> u32 {
    Instant::now().as_micros() as u32
}

/// Seed for the round dice
#[must_use]
pub fn uptime_seed() -> u32 {
    let ticks = Instant::now().as_ticks();
    (ticks as u32) ^ ((ticks >> 32) as u32) ^ 0x9E37_79B9
}
