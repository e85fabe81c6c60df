//! Gauge geometry, color policy, and the composed battery widget.
//!
//! The drawing side of the widget is a pure function: given a bounding box,
//! the displayed level, and a [`ColorPolicy`], [`GaugeFrame::compute`]
//! produces the draw instructions for one frame (body, fill, label). Nothing
//! here mutates state; the level lives in
//! [`LevelController`](crate::state::LevelController).
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┐ ◄ body: full bounds, corner radius 24
//! │     76%      │ ◄ label: centered, top edge at height * 0.22
//! │ ┌──────────┐ │
//! │ │   fill   │ │ ◄ fill: inset by 8 px, corner radius 16,
//! │ │          │ │        height proportional to the displayed level,
//! │ └──────────┘ │        anchored to the bottom edge
//! └──────────────┘
//! ```
//!
//! The fill color compares the *displayed* (animating) value against the
//! low-battery threshold, so the color can flip mid-animation. The label
//! re-inks itself as the fill rises past it: dark ink on top of the fill,
//! light ink on the empty body.
//!
//! [`BatteryGauge`] is the composition root that hosts plug into their
//! render loop: a [`LevelController`] plus a [`ColorPolicy`] behind the
//! public setter surface.

use core::fmt::Write;
use std::time::Instant;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BODY_GRAY, FILL_GREEN, INK_DARK, LOW_RED, WHITE},
    config::{
        CORNER_RADIUS, DEFAULT_LEVEL, FILL_CORNER_RADIUS, INTRINSIC_HEIGHT, INTRINSIC_WIDTH, LABEL_TOP_FACTOR,
        LOW_LEVEL_THRESHOLD, PADDING,
    },
    state::LevelController,
    styles::{CENTERED_TOP, font_for_width},
};

// =============================================================================
// Color Policy
// =============================================================================

/// Body, normal-fill, and low-fill colors for the gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPolicy {
    /// Battery body (background) color.
    pub body: Rgb565,
    /// Fill color above the low-battery threshold.
    pub normal: Rgb565,
    /// Fill color at or below the low-battery threshold.
    pub low: Rgb565,
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self {
            body: BODY_GRAY,
            normal: FILL_GREEN,
            low: LOW_RED,
        }
    }
}

// =============================================================================
// Construction Options
// =============================================================================

/// Construction options for [`BatteryGauge`].
///
/// `..Default::default()` fills in any option the host doesn't set.
#[derive(Clone, Copy, Debug)]
pub struct GaugeConfig {
    /// Starting battery level, clamped to 0-100.
    pub initial_level: i32,
    /// Battery body color.
    pub background_color: Rgb565,
    /// Fill color above the low-battery threshold.
    pub fill_color: Rgb565,
    /// Fill color at or below the low-battery threshold.
    pub low_color: Rgb565,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            initial_level: DEFAULT_LEVEL,
            background_color: BODY_GRAY,
            fill_color: FILL_GREEN,
            low_color: LOW_RED,
        }
    }
}

// =============================================================================
// Size Negotiation
// =============================================================================

/// Host-imposed size constraint for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    /// No constraint; the widget may use its preferred extent.
    Unspecified,
    /// The widget may be at most this large.
    AtMost(u32),
    /// The host imposes this exact extent.
    Exactly(u32),
}

/// Resolve one axis of the widget's size against a host constraint.
pub fn resolve_extent(preferred: u32, spec: MeasureSpec) -> u32 {
    match spec {
        MeasureSpec::Unspecified => preferred,
        MeasureSpec::AtMost(max) => preferred.min(max),
        MeasureSpec::Exactly(extent) => extent,
    }
}

/// Concrete widget size for the given constraints, preferring the intrinsic
/// 50 x 95.
pub fn measure(width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
    Size::new(
        resolve_extent(INTRINSIC_WIDTH, width_spec),
        resolve_extent(INTRINSIC_HEIGHT, height_spec),
    )
}

// =============================================================================
// Frame Geometry and Colors (pure functions)
// =============================================================================

/// Fill rectangle for a displayed level, relative to a `width` x `height` box.
///
/// The fill is inset by [`PADDING`] on every side, its height proportional
/// to the level and anchored to the bottom edge. Heights round to the
/// nearest pixel. `displayed` is defensively clamped; boxes too small to
/// hold the inset collapse to an empty rectangle instead of underflowing.
pub fn fill_geometry(width: u32, height: u32, displayed: f32) -> Rectangle {
    if width <= 2 * PADDING || height <= 2 * PADDING {
        return Rectangle::zero();
    }

    let level = displayed.clamp(0.0, 100.0);
    let max_fill = height - 2 * PADDING;
    let fill_height = (max_fill as f32 * level / 100.0).round() as u32;
    let fill_top = height - PADDING - fill_height;

    Rectangle::new(
        Point::new(PADDING as i32, fill_top as i32),
        Size::new(width - 2 * PADDING, fill_height),
    )
}

/// Fill color for a displayed level: the low color at or below the
/// threshold, the normal color above it.
pub fn fill_color(displayed: f32, policy: &ColorPolicy) -> Rgb565 {
    if displayed <= LOW_LEVEL_THRESHOLD {
        policy.low
    } else {
        policy.normal
    }
}

/// Label ink for the current frame: dark once the fill's top edge has risen
/// above the label baseline, light while the label sits on the empty body.
pub fn label_color(fill_top_y: i32, baseline_y: i32) -> Rgb565 {
    if fill_top_y < baseline_y { INK_DARK } else { WHITE }
}

/// Percentage label, rounded (not truncated) to the nearest whole percent.
pub fn format_label(displayed: f32) -> String<8> {
    let mut label: String<8> = String::new();
    let _ = write!(label, "{}%", displayed.round() as i32);
    label
}

/// Rounded rectangle with the corner radius confined to the rectangle's
/// extents, so degenerate sizes stay renderable.
fn rounded(rect: Rectangle, radius: u32) -> RoundedRectangle {
    let confined = radius.min(rect.size.width / 2).min(rect.size.height / 2);
    RoundedRectangle::with_equal_corners(rect, Size::new(confined, confined))
}

// =============================================================================
// Gauge Frame
// =============================================================================

/// Draw instructions for one frame of the gauge.
///
/// Purely derived from (bounds, displayed level, colors); recomputed each
/// draw and never stored.
#[derive(Debug)]
pub struct GaugeFrame {
    /// Battery body covering the full bounds.
    pub body: RoundedRectangle,
    /// Body fill color.
    pub body_color: Rgb565,
    /// Proportional fill, bottom-anchored inside the body.
    pub fill: RoundedRectangle,
    /// Fill color after threshold selection.
    pub fill_color: Rgb565,
    /// Percentage text.
    pub label: String<8>,
    /// Label anchor (centered, top baseline).
    pub label_origin: Point,
    /// Label ink after the fill-contrast decision.
    pub label_color: Rgb565,
    /// Label font from the width-proportional ladder.
    pub font: &'static MonoFont<'static>,
}

impl GaugeFrame {
    /// Compute the frame for `displayed` inside `bounds`.
    pub fn compute(bounds: Rectangle, displayed: f32, policy: &ColorPolicy) -> Self {
        let width = bounds.size.width;
        let height = bounds.size.height;
        let level = displayed.clamp(0.0, 100.0);

        let body = rounded(bounds, CORNER_RADIUS);

        let fill_rel = fill_geometry(width, height, level);
        let fill_abs = Rectangle::new(bounds.top_left + fill_rel.top_left, fill_rel.size);
        let fill = rounded(fill_abs, FILL_CORNER_RADIUS);

        let font = font_for_width(width);
        let label_top = bounds.top_left.y + (height as f32 * LABEL_TOP_FACTOR) as i32;
        let label_origin = Point::new(bounds.top_left.x + width as i32 / 2, label_top);

        // An empty fill has no top edge to rise past the label
        let baseline_y = label_top + font.baseline as i32;
        let fill_top_y = if fill_rel.size.height == 0 { i32::MAX } else { fill_abs.top_left.y };

        Self {
            body,
            body_color: policy.body,
            fill,
            fill_color: fill_color(level, policy),
            label: format_label(level),
            label_origin,
            label_color: label_color(fill_top_y, baseline_y),
            font,
        }
    }
}

/// Paint one frame: body, fill, centered percentage label.
pub fn draw_gauge_frame<D>(display: &mut D, frame: &GaugeFrame)
where
    D: DrawTarget<Color = Rgb565>,
{
    frame
        .body
        .into_styled(PrimitiveStyle::with_fill(frame.body_color))
        .draw(display)
        .ok();

    frame
        .fill
        .into_styled(PrimitiveStyle::with_fill(frame.fill_color))
        .draw(display)
        .ok();

    let label_style = MonoTextStyle::new(frame.font, frame.label_color);
    Text::with_text_style(&frame.label, frame.label_origin, label_style, CENTERED_TOP)
        .draw(display)
        .ok();
}

// =============================================================================
// Battery Gauge Widget
// =============================================================================

/// The composed battery widget: a level controller plus a color policy.
///
/// Hosts call [`set_level`](Self::set_level) whenever the level changes and
/// [`draw`](Self::draw) once per frame; everything else is derived.
#[derive(Debug)]
pub struct BatteryGauge {
    controller: LevelController,
    colors: ColorPolicy,
}

impl BatteryGauge {
    /// Build a gauge from construction options.
    pub fn new(config: GaugeConfig) -> Self {
        Self {
            controller: LevelController::new(config.initial_level),
            colors: ColorPolicy {
                body: config.background_color,
                normal: config.fill_color,
                low: config.low_color,
            },
        }
    }

    /// Set the battery level (0-100, clamped). Animates smoothly.
    pub fn set_level(&mut self, level: i32) {
        self.controller.set_level(level);
    }

    /// Current battery level (0-100).
    pub const fn level(&self) -> u8 {
        self.controller.level()
    }

    /// Level currently shown on screen, possibly mid-animation.
    pub const fn displayed(&self) -> f32 {
        self.controller.displayed()
    }

    /// Whether a level transition is in flight.
    pub const fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Set the fill color used above the low-battery threshold.
    pub fn set_fill_color(&mut self, color: Rgb565) {
        self.colors.normal = color;
    }

    /// Set the background/body color of the battery.
    pub fn set_background_color(&mut self, color: Rgb565) {
        self.colors.body = color;
    }

    /// Set the fill color used when the battery is low (<=20%).
    pub fn set_low_battery_color(&mut self, color: Rgb565) {
        self.colors.low = color;
    }

    /// Current color policy.
    pub const fn colors(&self) -> &ColorPolicy {
        &self.colors
    }

    /// Advance the animation to `now` and return the displayed level.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.controller.tick(now)
    }

    /// Draw instructions for the current displayed level inside `bounds`.
    pub fn frame(&self, bounds: Rectangle) -> GaugeFrame {
        GaugeFrame::compute(bounds, self.controller.displayed(), &self.colors)
    }

    /// Advance the animation and paint the current frame.
    pub fn draw<D>(&mut self, display: &mut D, bounds: Rectangle, now: Instant)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.tick(now);
        let frame = self.frame(bounds);
        draw_gauge_frame(display, &frame);
    }

    /// Size negotiation against host constraints; see [`measure`].
    pub fn measure(width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        measure(width_spec, height_spec)
    }
}

impl Default for BatteryGauge {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
