//! Market list widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::{MarketCard, MarketStatus, Store};
use crate::time::{CountdownStyle, group_thousands};
use crate::ui::Palette;

/// Market list widget. One row per market card.
pub struct MarketList;

impl MarketList {
    /// Render the market list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        let cards = &store.markets.cards;

        let block = Block::default()
            .title(format!(" Markets ({}) ", cards.len()))
            .borders(Borders::ALL)
            .border_style(palette.border());

        if cards.is_empty() {
            let empty = Paragraph::new("No markets available")
                .style(palette.dim())
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header_cells = ["Market", "Status", "Closes in", "Volume", "Vote"]
            .iter()
            .map(|h| Cell::from(*h).style(palette.heading()));
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = cards.iter().map(|card| card_row(card, palette));

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(50),
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(12),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(store.markets.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }
}

fn card_row<'a>(card: &'a MarketCard, palette: &Palette) -> Row<'a> {
    let market = &card.market;
    let status_style = match market.status {
        MarketStatus::Open => Style::default().fg(palette.success),
        MarketStatus::Closed => Style::default().fg(palette.danger),
    };
    let countdown_style = if card.countdown.is_expired() {
        palette.dim()
    } else {
        Style::default()
    };
    let votes_open = !card.countdown.is_expired() && market.status == MarketStatus::Open;

    let vote = Line::from(vec![
        Span::styled("Yes", palette.button(palette.success, votes_open)),
        Span::raw(" / "),
        Span::styled("No", palette.button(palette.danger, votes_open)),
    ]);

    Row::new(vec![
        Cell::from(market.title.as_str()),
        Cell::from(market.status.to_string()).style(status_style),
        Cell::from(card.countdown.label(CountdownStyle::Compact)).style(countdown_style),
        Cell::from(format!("${}", group_thousands(market.volume))),
        Cell::from(vote),
    ])
    .height(1)
}
