//! Distance-match scoring rules

use crate::config::{MAX_ROUND_POINTS, MAX_SCORING_DISTANCE_CM, POINTS_PER_CM_ERROR};
use crate::types::{DistanceSample, Threshold};

/// Outcome of a resolved distance-match round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Reading closer than the target: costs a life
    TooClose,
    /// Reading at or beyond the target: awards points (possibly zero)
    Scored(u32),
}

/// Judge a reading against the round's target
///
/// The comparison uses the raw reading; points use the truncated one.
#[must_use]
pub fn judge(threshold: Threshold, sample: DistanceSample) -> Verdict {
    if sample.as_cm() < f32::from(threshold.as_cm()) {
        Verdict::TooClose
    } else {
        Verdict::Scored(round_points(threshold, sample))
    }
}

/// Points for a reading: 100 minus 2 per centimetre of error, floored at
/// zero; out-of-range readings never score
#[must_use]
pub fn round_points(threshold: Threshold, sample: DistanceSample) -> u32 {
    // NaN falls through to zero as well
    if !(sample.as_cm() <= MAX_SCORING_DISTANCE_CM) {
        return 0;
    }

    let error = (i32::from(threshold.as_cm()) - sample.whole_cm()).unsigned_abs();
    MAX_ROUND_POINTS.saturating_sub(error.saturating_mul(POINTS_PER_CM_ERROR))
}
