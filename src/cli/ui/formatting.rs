use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Detail,
    Positive,
    Error,
}

pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::with_preferences(current_preferences())
    }

    pub fn with_preferences(prefs: OutputPreferences) -> Self {
        Self { prefs }
    }

    pub fn is_plain(&self) -> bool {
        self.prefs.plain_mode
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.colorize(format!("=== {title} ==="), Style::Header)
    }

    pub fn detail_text(&self, message: impl fmt::Display) -> String {
        self.colorize(message.to_string(), Style::Detail)
    }

    /// Income amounts are highlighted like the green text in the web view.
    pub fn positive_text(&self, message: impl fmt::Display) -> String {
        self.colorize(message.to_string(), Style::Positive)
    }

    /// Inline field error, e.g. under a form input.
    pub fn error_text(&self, message: impl fmt::Display) -> String {
        self.colorize(format!("! {message}"), Style::Error)
    }

    /// A small coloured marker for a theme; plain mode shows `*`.
    pub fn swatch(&self, theme: &str) -> String {
        if self.prefs.plain_mode {
            return "*".into();
        }
        match parse_hex(theme) {
            Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
            None => "●".into(),
        }
    }

    /// `text` tinted with the theme colour.
    pub fn tint(&self, text: &str, theme: &str) -> String {
        match (self.prefs.plain_mode, parse_hex(theme)) {
            (false, Some((r, g, b))) => text.truecolor(r, g, b).to_string(),
            _ => text.to_string(),
        }
    }

    pub fn print_two_column(&self, entries: &[(&str, &str)]) {
        for row in self.two_column_rows(entries) {
            println!("{row}");
        }
    }

    pub fn two_column_rows(&self, entries: &[(&str, &str)]) -> Vec<String> {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        entries
            .iter()
            .map(|(label, value)| format!("  {label:<label_width$}  {value}"))
            .collect()
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.prefs.plain_mode {
            return text;
        }
        match style {
            Style::Header => text.bold().to_string(),
            Style::Detail => text.dimmed().to_string(),
            Style::Positive => text.green().to_string(),
            Style::Error => text.red().to_string(),
        }
    }
}

/// Parses `#RRGGBB` or `#RGB`.
pub(crate) fn parse_hex(code: &str) -> Option<(u8, u8, u8)> {
    let hex = code.trim().strip_prefix('#').filter(|hex| hex.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}
