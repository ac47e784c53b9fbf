//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{InputMode, Store};
use crate::ui::Palette;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        let session = match store.session.display_name() {
            Some(name) => Span::styled(format!("● {name}"), Style::default().fg(palette.success)),
            None => Span::styled("○ Sign in [w]", Style::default().fg(palette.danger)),
        };

        let chain = store
            .session
            .chain
            .as_ref()
            .map(|c| Span::styled(format!(" {} ", c.name), Style::default().fg(palette.accent)))
            .unwrap_or_else(|| Span::raw(""));

        let mode = match store.app.input_mode {
            InputMode::Normal => Span::raw(""),
            InputMode::Insert => Span::styled(
                " INSERT ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let help_hint = Span::styled(" Press ? for help ", Style::default().fg(palette.muted));

        // Create the status line
        let left_content = vec![
            Span::styled(
                " PlayZone ",
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            session,
            Span::raw(" | "),
            chain,
            mode,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for right-aligned help hint
        let left_len = status_line.width();
        let right_len = help_hint.width();
        let padding = (area.width as usize).saturating_sub(left_len + right_len);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }
}
