//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod theme;
mod widgets;

pub use layout::Layout;
pub use theme::Palette;
pub use widgets::{
    HelpPanel, LearnPage, MarketDetail, MarketList, ProfileMenuPopup, SettingsPage, StatusBar,
    TabBar, TransactionsPage, Wizard,
};

use crate::config::{KeyBindings, UiConfig};
use crate::state::{Route, Store};
use ratatui::{Frame, widgets::Paragraph};

/// Main UI renderer.
#[derive(Debug, Clone)]
pub struct Ui {
    palette: Palette,
    keys: KeyBindings,
    show_status_bar: bool,
}

impl Ui {
    pub fn new(palette: Palette, keys: KeyBindings, ui: &UiConfig) -> Self {
        Self {
            palette,
            keys,
            show_status_bar: ui.show_status_bar,
        }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let palette = &self.palette;
        let layout = Layout::new(frame.area(), self.show_status_bar);

        if self.show_status_bar {
            StatusBar::render(frame, layout.status_area, store, palette);
        }
        TabBar::render(frame, layout.tab_area, store, &self.keys, palette);

        // Render main content based on current route
        match &store.app.route {
            Route::Markets => MarketList::render(frame, layout.main_area, store, palette),
            Route::MarketDetail(_) => MarketDetail::render(frame, layout.main_area, store, palette),
            Route::Create => Wizard::render(frame, layout.main_area, store, &self.keys, palette),
            Route::Learn => LearnPage::render(frame, layout.main_area, store, palette),
            Route::Settings => {
                SettingsPage::render(frame, layout.main_area, store, &self.keys, palette)
            }
            Route::Transactions => {
                TransactionsPage::render(frame, layout.main_area, store, &self.keys, palette)
            }
        }

        frame.render_widget(
            Paragraph::new("© 2025 PlayZone. All rights reserved.").style(palette.dim()),
            layout.footer_area,
        );

        ProfileMenuPopup::render(frame, layout.menu_area, store, palette);

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keys, palette);
        }

        // Render notification if present
        if let Some((notification, _)) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification, palette);
        }
    }
}
