//! Application-level state.

use chrono::{DateTime, Duration, Utc};

use super::Notification;

/// The current screen, addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Markets,
    /// `/market/{id}`
    MarketDetail(String),
    /// `/create`
    Create,
    /// `/learn`
    Learn,
    /// `/settings`
    Settings,
    /// `/transaction`
    Transactions,
}

impl Route {
    /// Parse a path. Trailing slashes are ignored and `/market` alone is the
    /// list.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let mut segments = trimmed.split('/').filter(|s| !s.is_empty());

        let route = match (segments.next(), segments.next()) {
            (None, _) => Self::Markets,
            (Some("market"), None) => Self::Markets,
            (Some("market"), Some(id)) => Self::MarketDetail(id.to_string()),
            (Some("create"), None) => Self::Create,
            (Some("learn"), None) => Self::Learn,
            (Some("settings"), None) => Self::Settings,
            (Some("transaction"), None) => Self::Transactions,
            _ => return None,
        };

        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Markets => "/".to_string(),
            Self::MarketDetail(id) => format!("/market/{id}"),
            Self::Create => "/create".to_string(),
            Self::Learn => "/learn".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::Transactions => "/transaction".to_string(),
        }
    }

    /// Where "back" leads from this route.
    pub fn parent(&self) -> Self {
        match self {
            Self::Transactions => Self::Settings,
            _ => Self::Markets,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands.
    #[default]
    Normal,
    /// Keys type into the focused text field.
    Insert,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current route.
    pub route: Route,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification and when it was raised.
    pub notification: Option<(Notification, DateTime<Utc>)>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Check if in an input mode.
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Insert
    }

    /// Whether the current notification has outlived its duration.
    pub fn notification_expired(&self, now: DateTime<Utc>) -> bool {
        self.notification.as_ref().is_some_and(|(n, shown_at)| {
            now - *shown_at >= Duration::seconds(n.duration_secs as i64)
        })
    }
}
