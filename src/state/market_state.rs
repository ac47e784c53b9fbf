//! Market-related state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::time::Countdown;

/// Market status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    #[default]
    Open,
    Closed,
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A single trade against a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// When the trade happened.
    pub time: DateTime<Utc>,
    /// Traded amount.
    pub amount: Decimal,
}

/// A market in the PlayZone catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Market ID.
    pub id: String,
    /// Market question/title.
    pub title: String,
    /// Market description.
    pub description: String,
    /// Trading window opens.
    pub start: DateTime<Utc>,
    /// Trading window closes.
    pub end: DateTime<Utc>,
    /// Outcome is resolved.
    pub resolution: DateTime<Utc>,
    /// Market status.
    pub status: MarketStatus,
    /// Total volume traded.
    pub volume: Decimal,
    /// Trades in chronological order.
    pub trades: Vec<Trade>,
}

impl Market {
    /// Check if the trading window ordering holds.
    pub fn has_ordered_window(&self) -> bool {
        self.start <= self.end && self.end <= self.resolution
    }

    /// Whether votes may be cast at `now`.
    pub fn accepts_votes(&self, now: DateTime<Utc>) -> bool {
        self.status == MarketStatus::Open && !Countdown::between(self.end, now).is_expired()
    }

    /// The most recent trades, capped at `limit`, in catalog order.
    pub fn recent_trades(&self, limit: usize) -> &[Trade] {
        &self.trades[..self.trades.len().min(limit)]
    }
}

/// One entry of the market list, with its own countdown.
#[derive(Debug, Clone)]
pub struct MarketCard {
    pub market: Market,
    pub countdown: Countdown,
}

impl MarketCard {
    /// Mount a card, computing its countdown immediately.
    pub fn mount(market: Market, now: DateTime<Utc>) -> Self {
        let countdown = Countdown::between(market.end, now);
        Self { market, countdown }
    }

    /// Recompute the countdown.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.countdown = Countdown::between(self.market.end, now);
    }
}

/// State for the market list view.
#[derive(Debug, Default)]
pub struct MarketState {
    /// Mounted cards, in catalog order. Empty while the list is not shown.
    pub cards: Vec<MarketCard>,
    /// Currently selected card index.
    pub selected_index: Option<usize>,
}

impl MarketState {
    /// Mount the list from catalog markets.
    pub fn mount(markets: &[Market], now: DateTime<Utc>) -> Self {
        let cards: Vec<_> = markets
            .iter()
            .cloned()
            .map(|m| MarketCard::mount(m, now))
            .collect();
        let selected_index = if cards.is_empty() { None } else { Some(0) };
        Self {
            cards,
            selected_index,
        }
    }

    /// Get the currently selected card.
    pub fn selected_card(&self) -> Option<&MarketCard> {
        self.selected_index.and_then(|i| self.cards.get(i))
    }

    /// Find a card by market id.
    pub fn card_mut(&mut self, market_id: &str) -> Option<&mut MarketCard> {
        self.cards.iter_mut().find(|c| c.market.id == market_id)
    }

    /// Move the selection by `delta`, clamped to the list.
    pub fn scroll(&mut self, delta: i32) {
        if self.cards.is_empty() {
            self.selected_index = None;
            return;
        }
        let current = self.selected_index.unwrap_or(0) as i32;
        let max_index = self.cards.len() as i32 - 1;
        self.selected_index = Some((current + delta).clamp(0, max_index) as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn market(id: &str, end: DateTime<Utc>) -> Market {
        Market {
            id: id.to_string(),
            title: format!("Market {id}"),
            description: String::new(),
            start: end - Duration::days(30),
            end,
            resolution: end + Duration::hours(5),
            status: MarketStatus::Open,
            volume: dec!(100),
            trades: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_mount_computes_countdowns_immediately() {
        let markets = vec![
            market("1", now() - Duration::days(1)),
            market("2", now() + Duration::seconds(90)),
        ];
        let state = MarketState::mount(&markets, now());
        assert!(state.cards[0].countdown.is_expired());
        assert!(!state.cards[1].countdown.is_expired());
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let markets = vec![market("1", now()), market("2", now()), market("3", now())];
        let mut state = MarketState::mount(&markets, now());
        state.scroll(10);
        assert_eq!(state.selected_index, Some(2));
        state.scroll(-10);
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_accepts_votes() {
        let mut m = market("1", now() + Duration::days(1));
        assert!(m.accepts_votes(now()));
        assert!(!m.accepts_votes(now() + Duration::days(2)));
        m.status = MarketStatus::Closed;
        assert!(!m.accepts_votes(now()));
    }

    #[test]
    fn test_recent_trades_caps() {
        let mut m = market("1", now());
        m.trades = (0..7)
            .map(|i| Trade {
                time: now() + Duration::hours(i),
                amount: dec!(10),
            })
            .collect();
        assert_eq!(m.recent_trades(5).len(), 5);
        assert_eq!(m.recent_trades(5)[0].time, now());
    }
}
