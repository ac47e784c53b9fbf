//! Market detail widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::state::{DetailState, DetailView, Store};
use crate::time::{CountdownStyle, format_long_date, format_relative, group_thousands};
use crate::ui::Palette;

const RECENT_TRADES: usize = 5;

/// Market detail widget.
pub struct MarketDetail;

impl MarketDetail {
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, palette: &Palette) {
        match &store.detail {
            Some(DetailView::Found(detail)) => render_found(frame, area, detail, store, palette),
            Some(DetailView::NotFound { .. }) | None => render_not_found(frame, area, palette),
        }
    }
}

fn render_not_found(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Market not found", palette.heading())),
        Line::from(""),
        Line::from("The market you're looking for doesn't exist."),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", palette.key_hint()),
            Span::styled("Back to Markets", Style::default().fg(palette.primary)),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        );
    frame.render_widget(paragraph, area);
}

fn render_found(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailState,
    store: &Store,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(6), // Details
            Constraint::Min(3),    // Recent trades
            Constraint::Length(3), // Vote buttons
        ])
        .split(chunks[0]);

    render_header(frame, left[0], detail, palette);
    render_details(frame, left[1], detail, palette);
    render_trades(frame, left[2], detail, palette);
    render_vote_buttons(frame, left[3], detail, palette);
    render_comments(frame, chunks[1], detail, store, palette);
}

fn render_header(frame: &mut Frame, area: Rect, detail: &DetailState, palette: &Palette) {
    let market = &detail.market;
    let countdown_style = if detail.countdown.is_expired() {
        Style::default().fg(palette.danger)
    } else {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::raw(market.description.as_str())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time Remaining: ", palette.dim()),
            Span::styled(detail.countdown.label(CountdownStyle::Long), countdown_style),
        ]),
        Line::from(vec![
            Span::styled("End Date: ", palette.dim()),
            Span::raw(format_long_date(market.end)),
        ]),
        Line::from(vec![
            Span::styled("Volume: ", palette.dim()),
            Span::raw(format!("${}", group_thousands(market.volume))),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(format!(" {} ", market.title))
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_details(frame: &mut Frame, area: Rect, detail: &DetailState, palette: &Palette) {
    let market = &detail.market;
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<17}"), palette.dim()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        row("Start Date", format_long_date(market.start)),
        row("End Date", format_long_date(market.end)),
        row("Resolution Time", format_long_date(market.resolution)),
        row("Total Trades", market.trades.len().to_string()),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Market Details ")
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_trades(frame: &mut Frame, area: Rect, detail: &DetailState, palette: &Palette) {
    let items: Vec<ListItem> = detail
        .market
        .recent_trades(RECENT_TRADES)
        .iter()
        .map(|trade| {
            ListItem::new(Line::from(vec![
                Span::styled(format_long_date(trade.time), palette.dim()),
                Span::raw("  "),
                Span::raw(format!("${}", group_thousands(trade.amount))),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Recent Trades ")
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(list, area);
}

fn render_vote_buttons(frame: &mut Frame, area: Rect, detail: &DetailState, palette: &Palette) {
    let enabled = detail.can_vote();
    let line = Line::from(vec![
        Span::styled("[y] ", palette.key_hint()),
        Span::styled("Vote Yes", palette.button(palette.success, enabled)),
        Span::raw("    "),
        Span::styled("[n] ", palette.key_hint()),
        Span::styled("Vote No", palette.button(palette.danger, enabled)),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border()),
    );
    frame.render_widget(paragraph, area);
}

fn render_comments(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailState,
    store: &Store,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" Comments {} ", detail.comment_count_label()))
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    // Input line
    let editing = store.app.is_editing();
    let input = if !store.session.is_connected() {
        Line::from(Span::styled(
            "Connect your wallet [w] to join the discussion",
            palette.dim(),
        ))
    } else if detail.comment_input.is_empty() && !editing {
        Line::from(vec![
            Span::styled("[i] ", palette.key_hint()),
            Span::styled("Share your thoughts...", palette.dim()),
        ])
    } else {
        let cursor = if editing { "▏" } else { "" };
        Line::from(vec![
            Span::raw(detail.comment_input.as_str()),
            Span::styled(cursor, Style::default().fg(palette.accent)),
            Span::raw("  "),
            Span::styled(
                "[Enter] Send",
                palette.button(palette.primary, detail.can_comment(&store.session)),
            ),
        ])
    };
    let input_style = if editing {
        Style::default().fg(palette.accent)
    } else {
        palette.dim()
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(input_style),
        ),
        chunks[0],
    );

    // Comment list, newest first
    let now = store.now();
    let items: Vec<ListItem> = detail
        .comments
        .iter()
        .map(|comment| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        comment.author.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        crate::state::short_address(&comment.author_address),
                        palette.dim(),
                    ),
                    Span::raw(" · "),
                    Span::styled(format_relative(comment.timestamp, now), palette.dim()),
                ]),
                Line::from(comment.content.as_str()),
                Line::from(""),
            ])
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("No comments yet").style(palette.dim()),
            chunks[1],
        );
    } else {
        frame.render_widget(List::new(items), chunks[1]);
    }
}
