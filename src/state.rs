//! Battery level state and transition ownership.
//!
//! [`LevelController`] owns the two level values the rest of the widget
//! reads:
//!
//! - the authoritative **battery level** (`u8`, always 0-100), updated the
//!   moment a level request is accepted, and
//! - the **displayed level** (`f32`), which trails the authoritative value
//!   while a transition is animating and equals it at rest.
//!
//! The controller also owns the single active [`LevelAnimation`] slot. A
//! retarget while a run is in flight swaps the slot synchronously: the old
//! run is discarded without completing, and the new run starts from the
//! displayed value at that instant, so the value on screen never jumps.
//!
//! All mutation happens on the render thread; `tick` is called once per
//! frame by the host and computes progress from absolute elapsed time, so
//! skipped frames are safe.

use std::time::Instant;

use crate::animations::LevelAnimation;
use crate::config::{LEVEL_MAX, LEVEL_MIN};

/// Owns the authoritative battery level, the displayed level, and the
/// active transition.
#[derive(Debug)]
pub struct LevelController {
    /// Authoritative level, 0-100. Reflects the latest accepted request
    /// even while the displayed value is still catching up.
    level: u8,

    /// Level currently shown on screen. Written once per tick.
    displayed: f32,

    /// Active transition, if one is in flight.
    animation: Option<LevelAnimation>,
}

impl LevelController {
    /// Create a controller at rest on `initial_level` (clamped to 0-100).
    pub fn new(initial_level: i32) -> Self {
        let level = clamp_level(initial_level);
        Self {
            level,
            displayed: f32::from(level),
            animation: None,
        }
    }

    /// Authoritative level (0-100), not the mid-animation display value.
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// The currently displayed, possibly mid-animation value.
    pub const fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Whether a transition is in flight.
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Request a level change. Animates smoothly toward the clamped target.
    ///
    /// Out-of-range requests are clamped silently. A request equal to the
    /// current level is a no-op: the in-flight run (if any) keeps going and
    /// nothing is restarted.
    pub fn set_level(&mut self, requested: i32) {
        self.set_level_at(requested, Instant::now());
    }

    /// [`set_level`](Self::set_level) with an explicit run start time.
    pub(crate) fn set_level_at(&mut self, requested: i32, now: Instant) {
        let target = clamp_level(requested);
        if target == self.level {
            return;
        }

        // Retarget from the value on screen right now, not from the old
        // committed level: the displayed value stays continuous across the
        // swap. The superseded run is dropped without completing.
        self.animation = Some(LevelAnimation::new(self.displayed, f32::from(target), now));
        self.level = target;
    }

    /// Advance the active transition and return the updated displayed level.
    ///
    /// With no run active this returns the stationary level. Once the run's
    /// duration has elapsed the displayed value snaps exactly onto the
    /// target and the run is discarded.
    pub fn tick(&mut self, now: Instant) -> f32 {
        if let Some(run) = self.animation {
            if run.is_finished(now) {
                self.displayed = run.target();
                self.animation = None;
            } else {
                self.displayed = run.sample(now);
            }
        }
        self.displayed
    }
}

fn clamp_level(requested: i32) -> u8 {
    requested.clamp(LEVEL_MIN, LEVEL_MAX) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
