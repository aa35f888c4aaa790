//! TUI color theme and bar glyphs

// Bar widths are small display quantities
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

use ratatui::style::Color;

pub const HUD_GREEN: Color = Color::Rgb(0, 255, 0);
pub const CRITICAL_RED: Color = Color::Rgb(255, 0, 0);
pub const CAUTION_AMBER: Color = Color::Rgb(255, 191, 0);
pub const INFO_DIM: Color = Color::Rgb(0, 180, 0);
pub const RESCALED_CYAN: Color = Color::Rgb(0, 200, 200);

/// Selection brackets around the highlighted row
pub const SEL_LEFT: &str = "▶";
pub const SEL_RIGHT: &str = "◀";

// Share of total time above which an item is flagged
const CRITICAL_PCT: f64 = 20.0;
const CAUTION_PCT: f64 = 5.0;

/// Partial blocks, one to seven eighths of a cell
const EIGHTHS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// Color for an item based on its share of total time
/// - Above 20%: Critical (Red)
/// - Above 5%: Caution (Amber)
/// - Otherwise: Normal (Green)
#[must_use]
pub fn severity_color(percentage: f64) -> Color {
    if percentage > CRITICAL_PCT {
        CRITICAL_RED
    } else if percentage > CAUTION_PCT {
        CAUTION_AMBER
    } else {
        HUD_GREEN
    }
}

/// Horizontal bar of `fraction` (0.0 - 1.0) of `width` cells, with
/// eighth-cell resolution. Never longer than `width` characters.
#[must_use]
pub fn bar(fraction: f64, width: usize) -> String {
    if width == 0 || fraction.is_nan() || fraction <= 0.0 {
        return String::new();
    }
    let eighths = (fraction.min(1.0) * (width * 8) as f64).round() as usize;
    let full = eighths / 8;
    let rest = eighths % 8;

    let mut out = "█".repeat(full);
    if rest > 0 && full < width {
        out.push(EIGHTHS[rest - 1]);
    }
    out
}

/// Summary gauge, e.g. `[||||      ]`
#[must_use]
pub fn gauge_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "|".repeat(filled), " ".repeat(width - filled))
}
