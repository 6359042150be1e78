//! Time calculation utilities shared by counter and scroll animations
//!
//! Every function takes the current instant explicitly so callers (and tests)
//! decide what "now" is.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) between `start` and `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Current time; instants before `start` count as zero elapsed
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` is complete at `now`
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
