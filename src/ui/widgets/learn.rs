//! Learn page with the FAQ accordion.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{FAQ_ITEMS, Store};
use crate::ui::Palette;

const SECTIONS: [(&str, &str); 3] = [
    (
        "What is a prediction market?",
        "A prediction market lets participants trade on the outcome of future events. \
         Prices reflect the collective probability of outcomes.",
    ),
    (
        "Creating a market",
        "Define a clear question, resolution criteria, and deadline. Liquidity providers \
         seed initial depth, and traders take positions by buying outcome shares.",
    ),
    (
        "Resolution",
        "After the deadline, the market resolves according to the specified oracle or \
         governance process. Winning shares pay out while losing shares become worthless.",
    ),
];

/// Learn page.
pub struct LearnPage;

impl LearnPage {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(10)])
            .split(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "How prediction markets on PlayZone work",
                palette.dim(),
            )),
            Line::from(""),
        ];
        for (title, body) in SECTIONS {
            lines.push(Line::from(Span::styled(title, palette.heading())));
            lines.push(Line::from(body));
            lines.push(Line::from(""));
        }

        let learn = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Learn ")
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
        frame.render_widget(learn, chunks[0]);

        render_faq(frame, chunks[1], store, palette);
    }
}

fn render_faq(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
    let mut lines = Vec::new();
    for (i, item) in FAQ_ITEMS.iter().enumerate() {
        let open = store.faq.is_open(item.id);
        let selected = store.faq.selected == i;
        let marker = if open { "▾ " } else { "▸ " };
        let style = if selected {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(item.question, style),
        ]));
        if open {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(item.answer, palette.dim()),
            ]));
        }
    }

    let faq = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" FAQ ")
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(faq, area);
}
