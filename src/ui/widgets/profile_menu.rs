//! Profile dropdown.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::state::{ProfileMenuItem, Store};
use crate::ui::Palette;

/// Profile dropdown, drawn over the top right of the main area.
pub struct ProfileMenuPopup;

impl ProfileMenuPopup {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        if !store.profile_menu.open || area.height == 0 {
            return;
        }
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = ProfileMenuItem::ALL
            .iter()
            .map(|item| {
                let (icon, style) = match item {
                    ProfileMenuItem::LogOut => ("⎋ ", Style::default().fg(palette.danger)),
                    _ => ("→ ", Style::default()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(icon, palette.dim()),
                    Span::styled(item.label(), style),
                ]))
            })
            .collect();

        let title = store
            .session
            .display_name()
            .map(|name| format!(" {name} "))
            .unwrap_or_default();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        state.select(Some(store.profile_menu.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
