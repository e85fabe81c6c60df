// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32/u32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in layout calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Animated vertical battery gauge widget for RGB565 displays.
//!
//! The widget renders a rounded battery body, a bottom-anchored proportional
//! fill, and a percentage label, and animates smoothly between level values
//! with a decelerating ease-out. It is split into a small state machine and
//! a pure renderer:
//!
//! - [`state::LevelController`] owns the authoritative level (0-100) and the
//!   displayed (possibly mid-animation) value, and drives the transition
//!   timeline from absolute elapsed time.
//! - [`gauge::GaugeFrame`] turns (bounds, displayed level, colors) into the
//!   draw instructions for one frame; [`gauge::BatteryGauge`] composes the
//!   two behind the public widget surface.
//!
//! # Modules
//!
//! - [`animations`]: the transition run object and its ease-out curve
//! - [`state`]: level ownership, clamping, retargeting
//! - [`gauge`]: geometry, color policy, measurement, the widget facade
//! - [`colors`]: RGB565 palette constants
//! - [`config`]: geometry, threshold, and timing constants
//! - [`styles`]: const text styles and the label font ladder
//!
//! # Data Flow
//!
//! ```text
//! host ──set_level──► LevelController ──tick──► displayed level
//!                                                    │
//!                     GaugeFrame::compute ◄──────────┘
//!                           │
//!                           ▼
//!                  body + fill + label ──draw──► DrawTarget<Rgb565>
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use battery_gauge::{BatteryGauge, GaugeConfig};
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::Rectangle;
//! use embedded_graphics_simulator::SimulatorDisplay;
//!
//! let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(50, 95));
//! let mut gauge = BatteryGauge::new(GaugeConfig::default());
//!
//! gauge.set_level(42);
//! // Once per frame:
//! gauge.draw(
//!     &mut display,
//!     Rectangle::new(Point::zero(), Size::new(50, 95)),
//!     Instant::now(),
//! );
//! ```

pub mod animations;
pub mod colors;
pub mod config;
pub mod gauge;
pub mod state;
pub mod styles;

// Re-export commonly used items
pub use animations::LevelAnimation;
pub use gauge::{
    BatteryGauge, ColorPolicy, GaugeConfig, GaugeFrame, MeasureSpec, draw_gauge_frame, fill_color, fill_geometry,
    format_label, label_color, measure, resolve_extent,
};
pub use state::LevelController;
