//! Colour palette resolved from the theme configuration.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::config::ThemeConfig;

/// Resolved colours for every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub muted: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            danger: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

impl Palette {
    /// Resolve a theme. Unparsable entries keep the built-in colour.
    pub fn from_config(theme: &ThemeConfig) -> Self {
        let fallback = Self::default();
        Self {
            primary: parse_or("primary", &theme.primary, fallback.primary),
            accent: parse_or("accent", &theme.accent, fallback.accent),
            success: parse_or("success", &theme.success, fallback.success),
            danger: parse_or("danger", &theme.danger, fallback.danger),
            muted: parse_or("muted", &theme.muted, fallback.muted),
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a button that may be disabled.
    pub fn button(&self, color: Color, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.muted)
                .add_modifier(Modifier::CROSSED_OUT)
        }
    }
}

fn parse_or(name: &str, value: &str, fallback: Color) -> Color {
    match Color::from_str(value.trim()) {
        Ok(color) => color,
        Err(_) => {
            warn!(entry = name, value, "Unrecognised theme colour, using default");
            fallback
        }
    }
}
