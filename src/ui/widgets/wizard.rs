//! Market creation wizard widget.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::KeyBindings;
use crate::state::{Asset, Store, WizardField, WizardState, WizardStep};
use crate::ui::Palette;

const STEPS: [WizardStep; 3] = [WizardStep::Basics, WizardStep::Asset, WizardStep::Schedule];

/// Market creation wizard widget.
pub struct Wizard;

impl Wizard {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        keys: &KeyBindings,
        palette: &Palette,
    ) {
        let wizard = &store.wizard;
        let block = Block::default()
            .title(" Create market ")
            .borders(Borders::ALL)
            .border_style(palette.border());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Intro
                Constraint::Length(2), // Progress
                Constraint::Min(0),    // Fields
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new("Define your parameter for new market prediction market.")
                .style(palette.dim()),
            chunks[0],
        );
        frame.render_widget(Paragraph::new(progress_line(wizard, palette)), chunks[1]);
        frame.render_widget(
            Paragraph::new(field_lines(wizard, store.app.is_editing(), palette)),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new(controls_line(wizard, keys, palette)),
            chunks[3],
        );
    }
}

fn progress_line(wizard: &WizardState, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", palette.dim()));
        }
        let style = if *step == wizard.step {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if *step < wizard.step {
            Style::default().fg(palette.success)
        } else {
            palette.dim()
        };
        spans.push(Span::styled(format!(" {} ", step.number()), style));
        if *step == wizard.step {
            spans.push(Span::styled(format!(" {}", step.title()), palette.heading()));
        }
    }
    Line::from(spans)
}

fn field_lines<'a>(wizard: &'a WizardState, editing: bool, palette: &Palette) -> Vec<Line<'a>> {
    let focused = wizard.focused_field();
    let mut lines = Vec::new();

    for field in wizard.step.fields() {
        let is_focused = *field == focused;
        let marker = if is_focused { "▶ " } else { "  " };
        let label_style = if is_focused {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(field.label(), label_style),
        ]));

        let value = match wizard.draft.text(*field) {
            Some(text) if text.is_empty() => {
                Span::styled(field.placeholder(), palette.dim())
            }
            Some(text) => Span::raw(text),
            None => asset_picker(wizard.draft.asset, is_focused, palette),
        };
        let mut value_line = vec![Span::raw("    "), value];
        if is_focused && editing && field.is_text() {
            value_line.push(Span::styled("▏", Style::default().fg(palette.accent)));
        }
        lines.push(Line::from(value_line));
        lines.push(Line::from(""));
    }

    lines
}

fn asset_picker(asset: Option<Asset>, focused: bool, palette: &Palette) -> Span<'static> {
    let label = asset.map(|a| a.symbol()).unwrap_or(WizardField::Asset.placeholder());
    let style = if asset.is_some() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        palette.dim()
    };
    if focused {
        Span::styled(format!("◀ {label} ▶"), style)
    } else {
        Span::styled(label.to_string(), style)
    }
}

fn controls_line(wizard: &WizardState, keys: &KeyBindings, palette: &Palette) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("[{}] ", keys.prev_step), palette.key_hint()),
        Span::styled(
            "Back",
            palette.button(palette.primary, wizard.step != WizardStep::Basics),
        ),
        Span::raw("   "),
    ];

    if wizard.step == WizardStep::Schedule {
        spans.push(Span::styled(format!("[{}] ", keys.submit), palette.key_hint()));
        spans.push(Span::styled(
            "Create",
            palette.button(palette.success, wizard.can_submit()),
        ));
    } else {
        spans.push(Span::styled(format!("[{}] ", keys.next_step), palette.key_hint()));
        spans.push(Span::styled(
            "Next",
            palette.button(palette.primary, wizard.can_advance()),
        ));
    }

    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("[{}] edit  [Tab] next field", keys.edit),
        palette.dim(),
    ));
    Line::from(spans)
}
