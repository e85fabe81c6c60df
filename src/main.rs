// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

//! Battery gauge simulator for desktop.
//!
//! Hosts the [`BatteryGauge`] widget in an SDL window: the gauge occupies
//! its measured intrinsic region at the top, and a readout strip below it
//! echoes the pending numeric entry. The loop ticks the widget once per
//! frame at ~50 FPS.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `0`-`9` | Append a digit to the entry; the parsed value is applied immediately |
//! | `Backspace` | Delete the last digit and re-apply the remaining entry |
//! | `C` | Clear the entry without changing the level |
//! | `Up` / `Down` | Nudge the level by ±1 |
//! | `PageUp` / `PageDown` | Nudge the level by ±10 |
//!
//! Key repeat is ignored to prevent spam when holding keys. Digit entry
//! mirrors a live text field: every change is parsed and applied at once,
//! so typing `7`, `6` passes through level 7 on the way to 76.

use std::thread;
use std::time::Instant;

use battery_gauge::colors::BLACK;
use battery_gauge::config::{ENTRY_HEIGHT, FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use battery_gauge::styles::{LEFT_TOP, READOUT_STYLE_WHITE};
use battery_gauge::{BatteryGauge, GaugeConfig, MeasureSpec};
use core::fmt::Write;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

/// Maximum digits in the level entry ("100" is the widest valid value).
type Entry = String<3>;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(4).build();
    let mut window = Window::new("Battery Gauge", &output_settings);

    // The gauge takes its intrinsic size within the region above the entry strip
    let gauge_size = BatteryGauge::measure(
        MeasureSpec::AtMost(SCREEN_WIDTH),
        MeasureSpec::AtMost(SCREEN_HEIGHT - ENTRY_HEIGHT),
    );
    let gauge_bounds = Rectangle::new(Point::zero(), gauge_size);

    let mut gauge = BatteryGauge::new(GaugeConfig::default());
    // The hosting screen pushes the gauge to full on startup
    gauge.set_level(100);

    let mut entry = Entry::new();

    display.clear(BLACK).ok();
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent spam when holding keys
                    if repeat {
                        continue;
                    }
                    handle_key(keycode, &mut gauge, &mut entry);
                }
                _ => {}
            }
        }

        // The body repaints the whole gauge region every frame, so no clear
        // is needed there; the entry strip clears itself
        gauge.draw(&mut display, gauge_bounds, Instant::now());
        draw_entry_strip(&mut display, &entry);

        window.update(&display);

        // Sleep to maintain the target frame rate
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Route one key press to the gauge or the numeric entry.
fn handle_key(keycode: Keycode, gauge: &mut BatteryGauge, entry: &mut Entry) {
    match keycode {
        Keycode::Up => gauge.set_level(i32::from(gauge.level()) + 1),
        Keycode::Down => gauge.set_level(i32::from(gauge.level()) - 1),
        Keycode::PageUp => gauge.set_level(i32::from(gauge.level()) + 10),
        Keycode::PageDown => gauge.set_level(i32::from(gauge.level()) - 10),
        Keycode::Backspace => {
            entry.pop();
            apply_entry(entry, gauge);
        }
        Keycode::C => entry.clear(),
        other => {
            if let Some(digit) = digit_for(other)
                && entry.push(digit).is_ok()
            {
                apply_entry(entry, gauge);
            }
        }
    }
}

/// Digit character for a number-row key, if it is one.
fn digit_for(keycode: Keycode) -> Option<char> {
    match keycode {
        Keycode::Num0 => Some('0'),
        Keycode::Num1 => Some('1'),
        Keycode::Num2 => Some('2'),
        Keycode::Num3 => Some('3'),
        Keycode::Num4 => Some('4'),
        Keycode::Num5 => Some('5'),
        Keycode::Num6 => Some('6'),
        Keycode::Num7 => Some('7'),
        Keycode::Num8 => Some('8'),
        Keycode::Num9 => Some('9'),
        _ => None,
    }
}

/// Apply the entry to the gauge, live on every change.
///
/// An empty entry leaves the level untouched; the gauge clamps whatever
/// value parses.
fn apply_entry(entry: &Entry, gauge: &mut BatteryGauge) {
    if let Ok(level) = entry.parse::<i32>() {
        gauge.set_level(level);
    }
}

/// Redraw the entry readout strip below the gauge.
fn draw_entry_strip(display: &mut SimulatorDisplay<Rgb565>, entry: &Entry) {
    let strip_top = (SCREEN_HEIGHT - ENTRY_HEIGHT) as i32;

    // Clear the strip each frame; the text changes with every keystroke
    Rectangle::new(Point::new(0, strip_top), Size::new(SCREEN_WIDTH, ENTRY_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let mut readout: String<8> = String::new();
    let _ = write!(readout, ">{entry}");
    Text::with_text_style(
        &readout,
        Point::new(2, strip_top + (ENTRY_HEIGHT as i32 - 10) / 2),
        READOUT_STYLE_WHITE,
        LEFT_TOP,
    )
    .draw(display)
    .ok();
}
