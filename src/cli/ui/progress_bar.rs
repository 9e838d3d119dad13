//! Text progress bars for pot cards and the add/withdraw preview.

use colored::Colorize;
use crossterm::terminal;

use crate::core::progress::{AdjustmentKind, AdjustmentPreview, Progress};

use super::formatting::Formatter;

const MIN_WIDTH: usize = 10;
const MAX_WIDTH: usize = 40;
const DEFAULT_WIDTH: usize = 30;

/// Bar width for the current terminal; half the columns within bounds.
pub fn bar_width() -> usize {
    terminal::size()
        .map(|(columns, _)| (usize::from(columns) / 2).clamp(MIN_WIDTH, MAX_WIDTH))
        .unwrap_or(DEFAULT_WIDTH)
}

#[derive(Clone, Copy)]
enum Paint<'a> {
    Theme(&'a str),
    Change(AdjustmentKind),
}

fn cells(percent: f64, width: usize) -> usize {
    let share = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0) / 100.0
    };
    ((share * width as f64).round() as usize).min(width)
}

fn segment(formatter: &Formatter, count: usize, paint: Paint<'_>) -> String {
    if count == 0 {
        return String::new();
    }
    if formatter.is_plain() {
        let ch = match paint {
            Paint::Theme(_) => "#",
            Paint::Change(AdjustmentKind::Deposit) => "+",
            Paint::Change(AdjustmentKind::Withdraw) => "-",
        };
        return ch.repeat(count);
    }
    let block = "█".repeat(count);
    match paint {
        Paint::Theme(theme) => formatter.tint(&block, theme),
        Paint::Change(AdjustmentKind::Deposit) => block.green().to_string(),
        Paint::Change(AdjustmentKind::Withdraw) => block.red().to_string(),
    }
}

fn track(formatter: &Formatter, count: usize) -> String {
    if formatter.is_plain() {
        ".".repeat(count)
    } else {
        "░".repeat(count).dimmed().to_string()
    }
}

/// Bar for a pot card. Width always follows the clamped percentage.
pub fn render_progress(formatter: &Formatter, progress: &Progress, theme: &str, width: usize) -> String {
    let filled = cells(progress.bar_percent, width);
    format!(
        "[{}{}]",
        segment(formatter, filled, Paint::Theme(theme)),
        track(formatter, width - filled)
    )
}

/// Two-segment bar: what stays plus what is added or removed.
pub fn render_preview(
    formatter: &Formatter,
    preview: &AdjustmentPreview,
    theme: &str,
    width: usize,
) -> String {
    let base = cells(preview.base_bar_percent, width);
    let change = cells(preview.base_bar_percent + preview.change_bar_percent, width).saturating_sub(base);
    format!(
        "[{}{}{}]",
        segment(formatter, base, Paint::Theme(theme)),
        segment(formatter, change, Paint::Change(preview.kind)),
        track(formatter, width - base - change)
    )
}
