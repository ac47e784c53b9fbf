//! Transaction history page.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::Store;
use crate::ui::Palette;

use super::{connect_prompt, section};

/// Transaction history page.
pub struct TransactionsPage;

impl TransactionsPage {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        keys: &KeyBindings,
        palette: &Palette,
    ) {
        let Some(address) = store.session.address.as_deref() else {
            connect_prompt(
                frame,
                area,
                "Wallet",
                "Connect your wallet to view your account details",
                keys,
                palette,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(5),
                Constraint::Min(5),
            ])
            .split(area);

        let chain = store
            .session
            .chain
            .as_ref()
            .map(|c| format!("{} ({})", c.name, c.id))
            .unwrap_or_default();
        let overview = vec![
            Line::from(Span::styled("Your wallet information", palette.dim())),
            Line::from(vec![
                Span::styled("Wallet Address  ", palette.dim()),
                Span::raw(address),
            ]),
            Line::from(vec![
                Span::styled("Network         ", palette.dim()),
                Span::raw(chain),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(overview).block(section(" Account Overview ", palette)),
            chunks[0],
        );

        let balance = vec![
            Line::from(Span::styled("Native Balance", palette.dim())),
            Line::from(Span::styled(
                store.session.balance_display(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(
            Paragraph::new(balance).block(section(" Balance ", palette)),
            chunks[1],
        );

        let history = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", palette.heading())),
            Line::from(Span::styled(
                "Your transaction history will appear here once you start using the app",
                palette.dim(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("[{}] ", keys.back), palette.key_hint()),
                Span::raw("← Back to Settings"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(history)
                .alignment(Alignment::Center)
                .block(section(" Transaction History ", palette)),
            chunks[2],
        );
    }
}
