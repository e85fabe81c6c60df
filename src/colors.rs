//! Color constants for the battery gauge.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Custom colors below are 24-bit sRGB values quantized to this format
//! (red/blue channels `>> 3`, green channel `>> 2`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Simulator backdrop and entry strip background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Label ink while it sits on the empty body.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Default Gauge Palette
// =============================================================================

/// Default battery body color, dark gray. Quantized from #333333.
pub const BODY_GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Default fill color above the low-battery threshold. Quantized from #4ADE80.
pub const FILL_GREEN: Rgb565 = Rgb565::new(9, 55, 16);

/// Default fill color at or below the low-battery threshold. Quantized from #EF4444.
pub const LOW_RED: Rgb565 = Rgb565::new(29, 17, 8);

/// Near-black label ink once the fill has risen behind the label.
/// Quantized from #111827.
pub const INK_DARK: Rgb565 = Rgb565::new(2, 6, 4);
