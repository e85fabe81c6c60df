//! Gauge geometry, threshold, and timing constants.
//!
//! Layout values are fixed pixel quantities; everything derived from them
//! (screen size, entry strip placement) is computed at compile time as
//! `const` so the render loop never repeats the arithmetic.

use std::time::Duration;

// =============================================================================
// Intrinsic Size
// =============================================================================

/// Preferred gauge width in pixels when the host imposes no constraint.
pub const INTRINSIC_WIDTH: u32 = 50;

/// Preferred gauge height in pixels (aspect ratio ~1:1.9).
pub const INTRINSIC_HEIGHT: u32 = 95;

// =============================================================================
// Body and Fill Geometry
// =============================================================================

/// Corner radius of the battery body rectangle.
pub const CORNER_RADIUS: u32 = 24;

/// Corner radius of the inner fill rectangle (smaller than the body's).
pub const FILL_CORNER_RADIUS: u32 = 16;

/// Inset between the body edge and the fill rectangle, applied on all sides.
pub const PADDING: u32 = 8;

// =============================================================================
// Label Placement
// =============================================================================

/// Vertical position of the label's top edge as a fraction of gauge height.
pub const LABEL_TOP_FACTOR: f32 = 0.22;

/// Target label glyph height as a fraction of gauge width.
pub const TEXT_SIZE_FACTOR: f32 = 0.28;

// =============================================================================
// Level Domain
// =============================================================================

/// Lowest accepted battery level.
pub const LEVEL_MIN: i32 = 0;

/// Highest accepted battery level.
pub const LEVEL_MAX: i32 = 100;

/// Battery level used when construction options don't name one.
pub const DEFAULT_LEVEL: i32 = 85;

/// Displayed levels at or below this render with the low-battery fill color.
pub const LOW_LEVEL_THRESHOLD: f32 = 20.0;

// =============================================================================
// Animation Timing
// =============================================================================

/// Milliseconds of animation per unit of level change. A 0 to 100 jump
/// animates for 800 ms.
pub const ANIM_MS_PER_UNIT: f32 = 8.0;

/// Floor on the animation duration so small jumps remain visible.
pub const ANIM_MIN_DURATION: Duration = Duration::from_millis(200);

// =============================================================================
// Simulator Layout and Timing
// =============================================================================

/// Height of the numeric entry strip below the gauge.
pub const ENTRY_HEIGHT: u32 = 25;

/// Simulator display width (the gauge at its intrinsic width).
pub const SCREEN_WIDTH: u32 = INTRINSIC_WIDTH;

/// Simulator display height: gauge region plus the entry strip.
pub const SCREEN_HEIGHT: u32 = INTRINSIC_HEIGHT + ENTRY_HEIGHT;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
