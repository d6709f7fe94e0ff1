//! Seeded pseudo-random source
//!
//! Xorshift32: small, fast and good enough for picking targets and
//! rolling red lights. Seeded from the uptime counter at boot.

use crate::game::ports::Dice;

/// Xorshift32 generator
#[derive(Clone, Copy, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Fallback seed, xorshift gets stuck at zero
    const DEFAULT_SEED: u32 = 0x2545_F491;

    /// Create a generator from a seed
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::DEFAULT_SEED } else { seed },
        }
    }

    /// Next raw value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Dice for XorShift32 {
    fn roll(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.next_u32() % bound
        }
    }
}
