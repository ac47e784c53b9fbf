//! Market creation wizard.
//!
//! Three steps, each gated on its own required fields. Moving back never
//! drops what was typed. Submission validates the whole draft at once and
//! reports every violated field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Assets a market can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Btc,
    Eth,
    Sol,
    Usdc,
    Dai,
}

impl Asset {
    pub const ALL: [Asset; 5] = [Asset::Btc, Asset::Eth, Asset::Sol, Asset::Usdc, Asset::Dai];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Sol => "SOL",
            Self::Usdc => "USDC",
            Self::Dai => "DAI",
        }
    }

    /// Look up an asset by symbol, case-insensitively.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.symbol().eq_ignore_ascii_case(symbol.trim()))
    }
}

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Basics = 1,
    Asset = 2,
    Schedule = 3,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Basics => "Market Basics",
            Self::Asset => "Asset & Target",
            Self::Schedule => "Market Time",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Basics => Self::Asset,
            Self::Asset | Self::Schedule => Self::Schedule,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Basics | Self::Asset => Self::Basics,
            Self::Schedule => Self::Asset,
        }
    }

    /// Fields shown on this step, in focus order.
    pub fn fields(&self) -> &'static [WizardField] {
        match self {
            Self::Basics => &[WizardField::Question, WizardField::Description],
            Self::Asset => &[WizardField::Asset, WizardField::TargetAmount],
            Self::Schedule => &[
                WizardField::StartDate,
                WizardField::StartTime,
                WizardField::EndDate,
                WizardField::EndTime,
            ],
        }
    }
}

/// A single input of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    Question,
    Description,
    Asset,
    TargetAmount,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

impl WizardField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Question => "Market Question",
            Self::Description => "Description",
            Self::Asset => "Select Crypto",
            Self::TargetAmount => "Target Amount",
            Self::StartDate => "Start Date",
            Self::StartTime => "Start Time",
            Self::EndDate => "End Date",
            Self::EndTime => "End Time",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Question => "e.g. Will BTC reach $80k by Dec 31?",
            Self::Description => "Add context and resolution criteria",
            Self::Asset => "Select a cryptocurrency",
            Self::TargetAmount => "e.g. 80000",
            Self::StartDate | Self::EndDate => "YYYY-MM-DD",
            Self::StartTime | Self::EndTime => "HH:MM",
        }
    }

    /// Whether the field takes free text (the asset field is a picker).
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Asset)
    }
}

/// Everything typed so far. Values stay as entered until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardDraft {
    pub question: String,
    pub description: String,
    pub asset: Option<Asset>,
    pub target_amount: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl WizardDraft {
    /// Text behind a text field. `None` for the asset picker.
    pub fn text(&self, field: WizardField) -> Option<&str> {
        Some(match field {
            WizardField::Question => &self.question,
            WizardField::Description => &self.description,
            WizardField::TargetAmount => &self.target_amount,
            WizardField::StartDate => &self.start_date,
            WizardField::StartTime => &self.start_time,
            WizardField::EndDate => &self.end_date,
            WizardField::EndTime => &self.end_time,
            WizardField::Asset => return None,
        })
    }

    fn text_mut(&mut self, field: WizardField) -> Option<&mut String> {
        Some(match field {
            WizardField::Question => &mut self.question,
            WizardField::Description => &mut self.description,
            WizardField::TargetAmount => &mut self.target_amount,
            WizardField::StartDate => &mut self.start_date,
            WizardField::StartTime => &mut self.start_time,
            WizardField::EndDate => &mut self.end_date,
            WizardField::EndTime => &mut self.end_time,
            WizardField::Asset => return None,
        })
    }

    fn parsed_target(&self) -> Option<Decimal> {
        Decimal::from_str(self.target_amount.trim()).ok()
    }

    fn schedule_filled(&self) -> bool {
        [
            &self.start_date,
            &self.start_time,
            &self.end_date,
            &self.end_time,
        ]
        .iter()
        .all(|v| !v.is_empty())
    }
}

/// A single reason a draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftViolation {
    #[error("question is required")]
    MissingQuestion,
    #[error("description is required")]
    MissingDescription,
    #[error("select an asset")]
    MissingAsset,
    #[error("target amount must be a number")]
    TargetNotNumeric,
    #[error("target amount must be greater than zero")]
    TargetNotPositive,
    #[error("start date/time is not a valid YYYY-MM-DD HH:MM")]
    InvalidStart,
    #[error("end date/time is not a valid YYYY-MM-DD HH:MM")]
    InvalidEnd,
    #[error("start must be before end")]
    StartNotBeforeEnd,
    #[error("end must be in the future")]
    EndNotInFuture,
}

/// Every violation found in a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_violations(.0))]
pub struct DraftErrors(pub Vec<DraftViolation>);

fn join_violations(violations: &[DraftViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A fully validated market definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketProposal {
    pub question: String,
    pub description: String,
    pub asset: Asset,
    pub target_amount: Decimal,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Wizard view state.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: WizardDraft,
    /// Index into the current step's fields.
    pub focus: usize,
}

impl WizardState {
    pub fn focused_field(&self) -> WizardField {
        let fields = self.step.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.step.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.step.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Whether the active step's required fields are filled.
    pub fn can_advance(&self) -> bool {
        let d = &self.draft;
        match self.step {
            WizardStep::Basics => !d.question.is_empty() && !d.description.is_empty(),
            WizardStep::Asset => d.asset.is_some() && d.parsed_target().is_some(),
            WizardStep::Schedule => false,
        }
    }

    /// Advance one step if allowed. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = self.step.next();
        self.focus = 0;
        true
    }

    /// Go back one step. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        let prev = self.step.prev();
        if prev == self.step {
            return false;
        }
        self.step = prev;
        self.focus = 0;
        true
    }

    /// Whether the Create button is enabled.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Schedule && self.draft.schedule_filled()
    }

    /// Type into the focused field.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(text) = self.draft.text_mut(field) {
            text.push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        if let Some(text) = self.draft.text_mut(field) {
            text.pop();
        }
    }

    /// Step through the asset options. The unselected state sits between the
    /// last and the first option.
    pub fn cycle_asset(&mut self, forward: bool) {
        let options = Asset::ALL;
        let current = self
            .draft
            .asset
            .and_then(|a| options.iter().position(|o| *o == a));
        let len = options.len();
        self.draft.asset = match (current, forward) {
            (None, true) => Some(options[0]),
            (None, false) => Some(options[len - 1]),
            (Some(i), true) if i + 1 == len => None,
            (Some(i), true) => Some(options[i + 1]),
            (Some(0), false) => None,
            (Some(i), false) => Some(options[i - 1]),
        };
    }

    /// Validate the whole draft. Times are read as UTC.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<MarketProposal, DraftErrors> {
        let d = &self.draft;
        let mut violations = Vec::new();

        let question = d.question.trim();
        if question.is_empty() {
            violations.push(DraftViolation::MissingQuestion);
        }
        let description = d.description.trim();
        if description.is_empty() {
            violations.push(DraftViolation::MissingDescription);
        }
        if d.asset.is_none() {
            violations.push(DraftViolation::MissingAsset);
        }

        let target = d.parsed_target();
        match target {
            None => violations.push(DraftViolation::TargetNotNumeric),
            Some(t) if t <= Decimal::ZERO => violations.push(DraftViolation::TargetNotPositive),
            Some(_) => {}
        }

        let start = parse_instant(&d.start_date, &d.start_time);
        if start.is_none() {
            violations.push(DraftViolation::InvalidStart);
        }
        let end = parse_instant(&d.end_date, &d.end_time);
        if end.is_none() {
            violations.push(DraftViolation::InvalidEnd);
        }
        if let (Some(s), Some(e)) = (start, end)
            && s >= e
        {
            violations.push(DraftViolation::StartNotBeforeEnd);
        }
        if let Some(e) = end
            && e <= now
        {
            violations.push(DraftViolation::EndNotInFuture);
        }

        match (violations.is_empty(), d.asset, target, start, end) {
            (true, Some(asset), Some(target_amount), Some(start), Some(end)) => {
                Ok(MarketProposal {
                    question: question.to_string(),
                    description: description.to_string(),
                    asset,
                    target_amount,
                    start,
                    end,
                })
            }
            _ => Err(DraftErrors(violations)),
        }
    }
}

fn parse_instant(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M").ok()?;
    Some(NaiveDateTime::new(date, time).and_utc())
}
