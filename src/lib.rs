//! # PlayZone - Prediction Market Terminal Front End
//!
//! A terminal user interface for browsing and creating PlayZone prediction
//! markets. Built with ratatui, with a local alloy signer standing in for a
//! browser wallet.
//!
//! ## Architecture
//!
//! The application follows a unidirectional data flow:
//!
//! - **App**: Terminal lifecycle, event loop and collaborator calls
//! - **UI**: Layout and rendering logic
//! - **State**: Centralized store of every mounted view
//! - **Events**: Key handling and countdown tick subscriptions
//! - **Catalog**: Read-only market repository
//! - **Wallet**: Session capability behind the wallet-gated actions
//! - **Settlement**: Vote and market-creation collaborator
//! - **Time**: Clock, countdowns and date formatting
//! - **Config**: Configuration management

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod settlement;
pub mod state;
pub mod time;
pub mod ui;
pub mod wallet;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
