//! Pre-computed text styles and the width-proportional label font ladder.
//!
//! `TextStyle` and `MonoTextStyle` values are `const` so they live in the
//! binary's read-only data section and need no per-frame construction.
//!
//! # Font Ladder
//!
//! Monospaced bitmap fonts come in discrete sizes, so the label cannot scale
//! freely with gauge width. Instead a ladder of `ProFont` sizes is searched
//! for the largest font whose glyph height does not exceed the target
//! `width * TEXT_SIZE_FACTOR`. Selection reads `character_size` from the
//! font itself rather than hardcoding glyph metrics.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{
    PROFONT_7_POINT, PROFONT_9_POINT, PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::colors::WHITE;
use crate::config::TEXT_SIZE_FACTOR;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Horizontally centered text anchored at its top edge. Used for the
/// percentage label, whose vertical position is specified as a top offset.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned text anchored at its top edge. Used for the simulator's
/// entry readout strip.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for the simulator's entry readout.
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

// =============================================================================
// Label Font Ladder
// =============================================================================

/// Candidate label fonts, ordered smallest to largest glyph height.
const FONT_LADDER: [&MonoFont; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

/// Pick the label font for a gauge of the given width.
///
/// Returns the largest ladder font whose glyph height fits within
/// `width * TEXT_SIZE_FACTOR`. Falls back to the smallest font when the
/// gauge is too narrow for any of them.
pub fn font_for_width(width: u32) -> &'static MonoFont<'static> {
    let target = (width as f32 * TEXT_SIZE_FACTOR) as u32;
    let mut best = FONT_LADDER[0];
    for font in FONT_LADDER {
        if font.character_size.height <= target {
            best = font;
        }
    }
    best
}

// =============================================================================
// Unit Tests
// =============================================================================
