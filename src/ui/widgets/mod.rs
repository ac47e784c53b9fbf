//! TUI widgets.

mod help;
mod learn;
mod market_detail;
mod market_list;
mod notifications;
mod profile_menu;
mod settings;
mod status_bar;
mod tab_bar;
mod transactions;
mod wizard;

pub use help::HelpPanel;
pub use learn::LearnPage;
pub use market_detail::MarketDetail;
pub use market_list::MarketList;
pub use notifications::render_notification;
pub use profile_menu::ProfileMenuPopup;
pub use settings::SettingsPage;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use transactions::TransactionsPage;
pub use wizard::Wizard;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::KeyBindings;
use crate::ui::Palette;

fn section(title: &'static str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(palette.border())
}

/// Page body shown in place of wallet-only content.
fn connect_prompt(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    keys: &KeyBindings,
    palette: &Palette,
) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), palette.dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("[{}] ", keys.wallet), palette.key_hint()),
            Span::raw("Connect Wallet"),
        ]),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(paragraph, area);
}
