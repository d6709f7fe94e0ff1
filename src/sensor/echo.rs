//! Echo Pulse Capture
//!
//! Single-producer/single-consumer handoff between the echo edge handler
//! and the round logic. The edge handler is the only writer; the main loop
//! is the only reader.
//!
//! ```text
//!  echo pin ──rise──▶ on_rise(t0)     (stamp start)
//!           ──fall──▶ on_fall(t1)     (distance = (t1-t0) × 0.0343 / 2,
//!                                      publish bits [Release])
//!  main loop ───────▶ peek()/take()   (load / swap-out bits [Acquire])
//! ```
//!
//! The published sample is a single word, so a reader either gets a whole
//! publication or nothing, and `take` hands each publication out once.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::types::DistanceSample;

/// Bit pattern marking "no sample"; a NaN no echo width can produce
const EMPTY: u32 = u32::MAX;

/// Lock-free echo timing state shared with the edge handler
pub struct EchoCapture {
    /// Timestamp of the last rising edge in microseconds
    rise_us: AtomicU32,
    /// A rising edge has been seen and its falling edge is pending
    in_flight: AtomicBool,
    /// Published distance as `f32` bits, `EMPTY` when consumed
    sample_bits: AtomicU32,
}

impl EchoCapture {
    /// Create an idle capture with no pending sample
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rise_us: AtomicU32::new(0),
            in_flight: AtomicBool::new(false),
            sample_bits: AtomicU32::new(EMPTY),
        }
    }

    /// Rising edge: start timing
    pub fn on_rise(&self, now_us: u32) {
        self.rise_us.store(now_us, Ordering::Relaxed);
        self.in_flight.store(true, Ordering::Release);
    }

    /// Falling edge: stop timing and publish the sample
    ///
    /// A fall with no preceding rise is ignored. An unconsumed sample is
    /// replaced. Returns the published sample for logging.
    pub fn on_fall(&self, now_us: u32) -> Option<DistanceSample> {
        if !self.in_flight.swap(false, Ordering::Acquire) {
            return None;
        }

        let elapsed = now_us.wrapping_sub(self.rise_us.load(Ordering::Relaxed));
        let sample = DistanceSample::from_echo_us(elapsed);
        self.sample_bits.store(sample.to_bits(), Ordering::Release);
        Some(sample)
    }

    /// Drop any pending sample before a new trigger
    pub fn arm(&self) {
        self.sample_bits.store(EMPTY, Ordering::Release);
    }

    /// Check if a sample is pending
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.sample_bits.load(Ordering::Acquire) != EMPTY
    }

    /// Read the pending sample without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<DistanceSample> {
        decode(self.sample_bits.load(Ordering::Acquire))
    }

    /// Consume the pending sample
    ///
    /// Returns each published sample at most once.
    pub fn take(&self) -> Option<DistanceSample> {
        decode(self.sample_bits.swap(EMPTY, Ordering::AcqRel))
    }
}

fn decode(bits: u32) -> Option<DistanceSample> {
    (bits != EMPTY).then(|| DistanceSample::from_bits(bits))
}

impl Default for EchoCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive an [`EchoCapture`] from an edge-waiting echo input
///
/// Intended to run on an interrupt-priority executor so it preempts the
/// blocking main loop the way an edge ISR would.
#[cfg(feature = "embedded")]
pub async fn watch_echo<P>(echo: &mut P, capture: &EchoCapture) -> !
where
    P: embedded_hal_async::digital::Wait,
{
    use crate::hal::timer::uptime_us;

    loop {
        if echo.wait_for_rising_edge().await.is_err() {
            warn!("echo: rising edge wait failed");
            continue;
        }
        capture.on_rise(uptime_us());

        if echo.wait_for_falling_edge().await.is_err() {
            warn!("echo: falling edge wait failed");
            continue;
        }
        if let Some(sample) = capture.on_fall(uptime_us()) {
            trace!("echo: {}", sample);
        }
    }
}
