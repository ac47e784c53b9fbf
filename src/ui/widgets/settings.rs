//! Settings page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::KeyBindings;
use crate::state::{Preference, Store};
use crate::ui::Palette;

use super::{connect_prompt, section};

/// Settings page.
pub struct SettingsPage;

impl SettingsPage {
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
                "Settings",
                "Please connect your wallet to access settings.",
                keys,
                palette,
            );
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(2 + 2 * Preference::ALL.len() as u16),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        let account = vec![
            Line::from(Span::styled("Your account information", palette.dim())),
            Line::from(vec![
                Span::styled("Wallet Address  ", palette.dim()),
                Span::raw(address),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("[{}] ", keys.transactions), palette.key_hint()),
                Span::raw("View Transaction History →"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(account).block(section(" Account ", palette)),
            chunks[0],
        );

        let mut prefs = vec![Line::from(Span::styled(
            "Customize your experience",
            palette.dim(),
        ))];
        for (i, pref) in Preference::ALL.iter().enumerate() {
            let selected = store.settings.selected == i;
            let toggle = if store.settings.is_enabled(*pref) {
                Span::styled("[on] ", Style::default().fg(palette.success))
            } else {
                Span::styled("[off]", palette.dim())
            };
            let label_style = if selected {
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines_for_pref(&mut prefs, selected, toggle, pref, label_style, palette);
        }
        frame.render_widget(
            Paragraph::new(prefs).block(section(" Preferences ", palette)),
            chunks[1],
        );

        let security = vec![
            Line::from(Span::styled("Manage your account security", palette.dim())),
            Line::from(vec![
                Span::raw("Two-Factor Authentication  "),
                Span::styled("Add an extra layer of security", palette.dim()),
            ]),
            Line::from(vec![
                Span::styled(format!("[{}] ", keys.wallet), palette.key_hint()),
                Span::styled("Disconnect Wallet", Style::default().fg(palette.danger)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(security).block(section(" Security ", palette)),
            chunks[2],
        );
    }
}

fn lines_for_pref(
    lines: &mut Vec<Line<'static>>,
    selected: bool,
    toggle: Span<'static>,
    pref: &Preference,
    label_style: Style,
    palette: &Palette,
) {
    let marker = if selected { "▶ " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.accent)),
        toggle,
        Span::raw(" "),
        Span::styled(pref.label(), label_style),
    ]));
    lines.push(Line::from(vec![
        Span::raw("        "),
        Span::styled(pref.hint(), palette.dim()),
    ]));
}
