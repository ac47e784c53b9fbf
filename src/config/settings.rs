//! Configuration settings for PlayZone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI configuration.
    pub ui: UiConfig,
    /// Wallet session configuration.
    pub wallet: WalletConfig,
    /// Market catalog source.
    pub catalog: CatalogConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from file, returning default if file doesn't exist.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from file.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::config(e.to_string()))
    }
}

fn default_config_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for terminal input, in milliseconds.
    pub tick_rate_ms: u64,
    /// Period of the countdown tick in milliseconds.
    pub countdown_period_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Route shown at startup (e.g. "/", "/market/3", "/create").
    pub start_route: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            countdown_period_ms: 1000,
            mouse_support: true,
            show_status_bar: true,
            start_route: "/".to_string(),
        }
    }
}

/// Wallet session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Hex private key for the local signer. A fresh key is generated on
    /// every connect when unset.
    pub private_key: Option<String>,
    /// Chain id reported by the session.
    pub chain_id: u64,
    /// Human readable chain name.
    pub chain_name: String,
    /// Native balance shown for the account.
    pub balance: Decimal,
    /// Native balance symbol.
    pub balance_symbol: String,
    /// Connect at startup.
    pub auto_connect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            chain_id: 11_155_111,
            chain_name: "Sepolia".to_string(),
            balance: Decimal::ZERO,
            balance_symbol: "ETH".to_string(),
            auto_connect: false,
        }
    }
}

/// Market catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON seed file replacing the built-in markets.
    pub seed_path: Option<PathBuf>,
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Navigate up.
    pub up: String,
    /// Navigate down.
    pub down: String,
    /// Select/confirm.
    pub select: String,
    /// Cancel/back.
    pub back: String,
    /// Switch to the market list.
    pub markets: String,
    /// Switch to the creation wizard.
    pub create: String,
    /// Switch to the learn page.
    pub learn: String,
    /// Switch to settings.
    pub settings: String,
    /// Switch to transaction history.
    pub transactions: String,
    /// Sign in / log out.
    pub wallet: String,
    /// Toggle the profile menu.
    pub profile: String,
    /// Vote yes on the open market.
    pub vote_yes: String,
    /// Vote no on the open market.
    pub vote_no: String,
    /// Start typing a comment or edit the focused wizard field.
    pub edit: String,
    /// Advance the wizard.
    pub next_step: String,
    /// Go back one wizard step.
    pub prev_step: String,
    /// Submit the wizard.
    pub submit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            up: "k".to_string(),
            down: "j".to_string(),
            select: "Enter".to_string(),
            back: "Esc".to_string(),
            markets: "1".to_string(),
            create: "2".to_string(),
            learn: "3".to_string(),
            settings: "4".to_string(),
            transactions: "5".to_string(),
            wallet: "w".to_string(),
            profile: "p".to_string(),
            vote_yes: "y".to_string(),
            vote_no: "n".to_string(),
            edit: "i".to_string(),
            next_step: "Ctrl+n".to_string(),
            prev_step: "Ctrl+b".to_string(),
            submit: "Ctrl+s".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary color (hex), used for borders and headings.
    pub primary: String,
    /// Accent color (hex), used for key hints.
    pub accent: String,
    /// Color for open markets and "Yes".
    pub success: String,
    /// Color for closed markets and "No".
    pub danger: String,
    /// Secondary text color.
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#5c6bc0".to_string(),
            accent: "#ffa726".to_string(),
            success: "#66bb6a".to_string(),
            danger: "#ef5350".to_string(),
            muted: "#64748b".to_string(),
        }
    }
}
