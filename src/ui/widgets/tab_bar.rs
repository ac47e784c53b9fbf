//! Tab bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Route, Store};
use crate::ui::Palette;

/// Tab bar widget.
pub struct TabBar;

impl TabBar {
    /// Render the tab bar.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        keys: &KeyBindings,
        palette: &Palette,
    ) {
        let tabs = [
            (&keys.markets, "Markets", Route::Markets),
            (&keys.create, "Create", Route::Create),
            (&keys.learn, "Learn", Route::Learn),
            (&keys.settings, "Settings", Route::Settings),
            (&keys.transactions, "Transactions", Route::Transactions),
        ];

        // The detail route lives under the Markets tab
        let active = match &store.app.route {
            Route::MarketDetail(_) => Route::Markets,
            route => route.clone(),
        };

        let mut spans = vec![Span::raw(" ")];

        for (key, name, route) in tabs {
            let is_selected = active == route;

            let key_style = Style::default().fg(palette.muted);
            let name_style = if is_selected {
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(format!("[{key}] "), key_style));
            spans.push(Span::styled(name, name_style));
            spans.push(Span::raw("  "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
