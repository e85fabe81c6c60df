//! Level transition timeline.
//!
//! A [`LevelAnimation`] is the transient run object for one transition
//! between displayed levels: `{from, to, start, duration}`. It is sampled
//! purely from absolute elapsed time, so irregular frame pacing (dropped or
//! doubled frames) cannot change the trajectory - two samples at the same
//! timestamp return the same value.
//!
//! # Interpolation Curve
//!
//! The curve is a decelerating ease-out:
//!
//! ```text
//! eased = 1 - (1 - t)^2        t in [0, 1]
//! ```
//!
//! Fast start, slow settle; strictly monotonic toward the target with no
//! overshoot, and exactly 1.0 at `t == 1`.
//!
//! # Duration Policy
//!
//! `duration_ms = max(200, trunc(|to - from| * 8))` - larger jumps animate
//! longer, while small jumps still get a visible 200 ms minimum.

use std::time::{Duration, Instant};

use crate::config::{ANIM_MIN_DURATION, ANIM_MS_PER_UNIT};

/// A single in-flight transition between two displayed levels.
///
/// Exists only while the transition is running; the controller discards it
/// once `elapsed >= duration` and replaces it wholesale on retarget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl LevelAnimation {
    /// Start a run from `from` toward `to` at `start`.
    pub fn new(from: f32, to: f32, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration_for(from, to),
        }
    }

    /// The value this run settles on.
    pub const fn target(&self) -> f32 {
        self.to
    }

    /// Whether the run has reached its duration at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Displayed level at `now`.
    ///
    /// Clamped to the run's endpoints: timestamps before `start` return
    /// `from`, timestamps at or past the duration return exactly `to`.
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.to - self.from).mul_add(ease_out(t), self.from)
    }
}

/// Animation duration for a jump between two levels.
///
/// The per-unit product is truncated to whole milliseconds before the
/// minimum is applied.
pub fn duration_for(from: f32, to: f32) -> Duration {
    let ms = ((to - from).abs() * ANIM_MS_PER_UNIT) as u64;
    Duration::from_millis(ms).max(ANIM_MIN_DURATION)
}

/// Decelerating ease-out: fast start, slow settle.
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    inv.mul_add(-inv, 1.0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Duration Policy Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_duration_small_jump_hits_minimum() {
        // Delta 9 gives 72 ms, below the 200 ms floor
        assert_eq!(duration_for(85.0, 76.0), Duration::from_millis(200));
    }

    #[test]
    fn test_duration_full_swing() {
        // Delta 100 gives 800 ms
        assert_eq!(duration_for(0.0, 100.0), Duration::from_millis(800));
    }

    #[test]
    fn test_duration_symmetric_in_direction() {
        assert_eq!(duration_for(20.0, 80.0), duration_for(80.0, 20.0));
    }

    #[test]
    fn test_duration_truncates_before_floor() {
        // 30.4 * 8 = 243.2 ms, truncated to 243
        assert_eq!(duration_for(0.0, 30.4), Duration::from_millis(243));
    }

    #[test]
    fn test_duration_exactly_at_floor_boundary() {
        // Delta 25 gives exactly 200 ms
        assert_eq!(duration_for(0.0, 25.0), Duration::from_millis(200));
    }

    // -------------------------------------------------------------------------
    // Curve Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0, "Curve must start at 0");
        assert_eq!(ease_out(1.0), 1.0, "Curve must end exactly at 1");
    }

    #[test]
    fn test_ease_out_monotonic_no_overshoot() {
        let mut prev = 0.0f32;
        for step in 1..=100 {
            let eased = ease_out(step as f32 / 100.0);
            assert!(eased >= prev, "Curve must be monotonic (step {step})");
            assert!(eased <= 1.0, "Curve must never overshoot (step {step})");
            prev = eased;
        }
    }

    #[test]
    fn test_ease_out_decelerates() {
        // The first half covers more ground than the second half
        let first_half = ease_out(0.5) - ease_out(0.0);
        let second_half = ease_out(1.0) - ease_out(0.5);
        assert!(first_half > second_half, "Ease-out should be front-loaded");
    }

    // -------------------------------------------------------------------------
    // Sampling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sample_at_start_returns_from() {
        let start = Instant::now();
        let run = LevelAnimation::new(85.0, 100.0, start);
        assert_eq!(run.sample(start), 85.0);
    }

    #[test]
    fn test_sample_before_start_returns_from() {
        // A frame timestamped before the run began must not extrapolate
        let start = Instant::now() + Duration::from_secs(1);
        let run = LevelAnimation::new(40.0, 60.0, start);
        assert_eq!(run.sample(Instant::now()), 40.0);
    }

    #[test]
    fn test_sample_at_duration_returns_target_exactly() {
        let start = Instant::now();
        let run = LevelAnimation::new(0.0, 100.0, start);
        assert_eq!(run.sample(start + Duration::from_millis(800)), 100.0);
        assert!(run.is_finished(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_sample_past_duration_stays_at_target() {
        let start = Instant::now();
        let run = LevelAnimation::new(0.0, 100.0, start);
        assert_eq!(run.sample(start + Duration::from_secs(10)), 100.0);
    }

    #[test]
    fn test_sample_monotonic_rising() {
        let start = Instant::now();
        let run = LevelAnimation::new(10.0, 90.0, start);
        let mut prev = 10.0f32;
        for ms in (0..=640).step_by(20) {
            let value = run.sample(start + Duration::from_millis(ms));
            assert!(value >= prev, "Displayed value must not move backwards ({ms} ms)");
            assert!(value <= 90.0, "Displayed value must not overshoot ({ms} ms)");
            prev = value;
        }
        assert_eq!(prev, 90.0, "Run must land exactly on the target");
    }

    #[test]
    fn test_sample_monotonic_falling() {
        let start = Instant::now();
        let run = LevelAnimation::new(90.0, 10.0, start);
        let mut prev = 90.0f32;
        for ms in (0..=640).step_by(20) {
            let value = run.sample(start + Duration::from_millis(ms));
            assert!(value <= prev, "Falling run must not move backwards ({ms} ms)");
            assert!(value >= 10.0, "Falling run must not undershoot ({ms} ms)");
            prev = value;
        }
        assert_eq!(prev, 10.0, "Run must land exactly on the target");
    }

    #[test]
    fn test_sample_idempotent_at_same_timestamp() {
        let start = Instant::now();
        let run = LevelAnimation::new(0.0, 50.0, start);
        let at = start + Duration::from_millis(123);
        assert_eq!(run.sample(at), run.sample(at));
    }
}
