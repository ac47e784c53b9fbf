//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::KeyBindings;
use crate::ui::Palette;

use super::super::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, palette: &Palette) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let sections: [(&str, Vec<(String, &str)>); 4] = [
            (
                "Navigation",
                vec![
                    (format!("{}/↓", keys.down), "Move down"),
                    (format!("{}/↑", keys.up), "Move up"),
                    ("Home/End".to_string(), "Go to top / bottom"),
                    (keys.select.clone(), "Open / toggle"),
                    (keys.back.clone(), "Back"),
                ],
            ),
            (
                "Pages",
                vec![
                    (keys.markets.clone(), "Markets"),
                    (keys.create.clone(), "Create market"),
                    (keys.learn.clone(), "Learn"),
                    (keys.settings.clone(), "Settings"),
                    (keys.transactions.clone(), "Transaction history"),
                ],
            ),
            (
                "Markets",
                vec![
                    (keys.vote_yes.clone(), "Vote yes"),
                    (keys.vote_no.clone(), "Vote no"),
                    (keys.edit.clone(), "Write a comment / edit field"),
                    (keys.next_step.clone(), "Next wizard step"),
                    (keys.prev_step.clone(), "Previous wizard step"),
                    (keys.submit.clone(), "Create market"),
                ],
            ),
            (
                "Session",
                vec![
                    (keys.wallet.clone(), "Sign in / out"),
                    (keys.profile.clone(), "Profile menu"),
                    (keys.help.clone(), "Toggle help"),
                    (keys.quit.clone(), "Quit"),
                ],
            ),
        ];

        let mut help_text = Vec::new();
        for (title, entries) in sections {
            help_text.push(Line::from(Span::styled(title, palette.heading())));
            help_text.push(Line::from(""));
            for (key, description) in entries {
                help_text.push(Line::from(vec![
                    Span::styled(format!("  {key:<10}"), Style::default().fg(palette.primary)),
                    Span::raw(description),
                ]));
            }
            help_text.push(Line::from(""));
        }

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}
