//! Market detail view state: countdown, comments and votes.

use chrono::{DateTime, Utc};

use super::{Market, SessionState};
use crate::error::{Error, Result};
use crate::time::Countdown;

/// Author label for comments written in this session.
const OWN_AUTHOR: &str = "You";

/// Yes/no side of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteSide {
    Yes,
    No,
}

impl std::fmt::Display for VoteSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// A vote ready to be handed to settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRequest {
    pub market_id: String,
    pub side: VoteSide,
    pub voter: String,
}

/// A comment posted during this detail-view session. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Derived from the creation instant.
    pub id: String,
    pub author: String,
    pub author_address: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Vote badge. No flow sets it yet.
    pub vote: Option<VoteSide>,
}

/// State of a mounted detail view for a market that exists.
#[derive(Debug, Clone)]
pub struct DetailState {
    pub market: Market,
    pub countdown: Countdown,
    /// Newest first.
    pub comments: Vec<Comment>,
    /// Text typed into the comment box.
    pub comment_input: String,
}

impl DetailState {
    /// Mount the view, computing the countdown immediately.
    pub fn mount(market: Market, now: DateTime<Utc>) -> Self {
        let countdown = Countdown::between(market.end, now);
        Self {
            market,
            countdown,
            comments: Vec::new(),
            comment_input: String::new(),
        }
    }

    /// Recompute the countdown.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.countdown = Countdown::between(self.market.end, now);
    }

    /// Whether the vote buttons are enabled.
    pub fn can_vote(&self) -> bool {
        !self.countdown.is_expired() && self.market.status == super::MarketStatus::Open
    }

    /// Whether the send button is enabled.
    pub fn can_comment(&self, session: &SessionState) -> bool {
        session.is_connected() && !self.comment_input.trim().is_empty()
    }

    /// The comment count shown next to the heading.
    pub fn comment_count_label(&self) -> String {
        format!("({})", self.comments.len())
    }

    /// Build a vote for settlement. Nothing changes here either way.
    pub fn vote_request(&self, side: VoteSide, session: &SessionState) -> Result<VoteRequest> {
        let voter = session
            .address
            .clone()
            .ok_or_else(|| Error::unauthenticated("Please connect your wallet to vote"))?;

        if !self.can_vote() {
            return Err(Error::invalid_input("This market is closed for voting"));
        }

        Ok(VoteRequest {
            market_id: self.market.id.clone(),
            side,
            voter,
        })
    }

    /// Post the typed comment, prepending it and clearing the input.
    ///
    /// Without a session this fails before touching the list or the input.
    pub fn submit_comment(&mut self, session: &SessionState, now: DateTime<Utc>) -> Result<()> {
        let address = session
            .address
            .clone()
            .ok_or_else(|| Error::unauthenticated("Please connect your wallet to comment"))?;

        let content = self.comment_input.trim();
        if content.is_empty() {
            return Err(Error::invalid_input("Comment is empty"));
        }

        let comment = Comment {
            id: self.next_comment_id(now),
            author: OWN_AUTHOR.to_string(),
            author_address: address,
            content: content.to_string(),
            timestamp: now,
            vote: None,
        };

        self.comments.insert(0, comment);
        self.comment_input.clear();
        Ok(())
    }

    fn next_comment_id(&self, now: DateTime<Utc>) -> String {
        let base = now.timestamp_millis().to_string();
        let taken = self
            .comments
            .iter()
            .filter(|c| c.id == base || c.id.starts_with(&format!("{base}-")))
            .count();
        if taken == 0 {
            base
        } else {
            format!("{base}-{taken}")
        }
    }
}

/// What the detail route shows.
#[derive(Debug, Clone)]
pub enum DetailView {
    Found(Box<DetailState>),
    NotFound { id: String },
}

impl DetailView {
    pub fn found(&self) -> Option<&DetailState> {
        match self {
            Self::Found(state) => Some(state),
            Self::NotFound { .. } => None,
        }
    }

    pub fn found_mut(&mut self) -> Option<&mut DetailState> {
        match self {
            Self::Found(state) => Some(state),
            Self::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MarketStatus;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()
    }

    fn detail() -> DetailState {
        let market = Market {
            id: "3".to_string(),
            title: "Will Bitcoin reach $100,000 by end of 2025?".to_string(),
            description: "Will Bitcoin close the year above $100,000?".to_string(),
            start: now() - Duration::days(26),
            end: now() + Duration::days(30),
            resolution: now() + Duration::days(31),
            status: MarketStatus::Open,
            volume: dec!(120450),
            trades: Vec::new(),
        };
        DetailState::mount(market, now())
    }

    fn connected() -> SessionState {
        SessionState {
            address: Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string()),
            ..SessionState::default()
        }
    }

    #[test]
    fn test_comment_while_disconnected_changes_nothing() {
        let mut state = detail();
        state.comment_input = "gm".to_string();

        let err = state
            .submit_comment(&SessionState::default(), now())
            .unwrap_err();

        assert!(matches!(err, Error::Unauthenticated(_)));
        assert_eq!(err.to_string(), "Please connect your wallet to comment");
        assert!(state.comments.is_empty());
        assert_eq!(state.comment_input, "gm");
    }

    #[test]
    fn test_comment_while_connected_prepends_and_clears() {
        let mut state = detail();
        state.comment_input = "first".to_string();
        state.submit_comment(&connected(), now()).unwrap();
        assert_eq!(state.comment_count_label(), "(1)");

        state.comment_input = "gm".to_string();
        state
            .submit_comment(&connected(), now() + Duration::seconds(5))
            .unwrap();

        assert_eq!(state.comments.len(), 2);
        assert_eq!(state.comments[0].content, "gm");
        assert_eq!(state.comments[0].author, "You");
        assert_eq!(
            state.comments[0].author_address,
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert_eq!(state.comments[0].vote, None);
        assert!(state.comment_input.is_empty());
        assert_eq!(state.comment_count_label(), "(2)");
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let mut state = detail();
        state.comment_input = "   ".to_string();
        assert!(!state.can_comment(&connected()));
        assert!(state.submit_comment(&connected(), now()).is_err());
        assert!(state.comments.is_empty());
    }

    #[test]
    fn test_comment_ids_stay_unique_within_a_millisecond() {
        let mut state = detail();
        for text in ["a", "b"] {
            state.comment_input = text.to_string();
            state.submit_comment(&connected(), now()).unwrap();
        }
        assert_ne!(state.comments[0].id, state.comments[1].id);
        assert_eq!(state.comments[1].id, now().timestamp_millis().to_string());
    }

    #[test]
    fn test_vote_requires_session() {
        let state = detail();
        let err = state
            .vote_request(VoteSide::Yes, &SessionState::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Please connect your wallet to vote");

        let request = state.vote_request(VoteSide::No, &connected()).unwrap();
        assert_eq!(request.market_id, "3");
        assert_eq!(request.side, VoteSide::No);
    }

    #[test]
    fn test_vote_refused_after_expiry() {
        let mut state = detail();
        state.tick(now() + Duration::days(40));
        assert!(state.countdown.is_expired());
        assert!(!state.can_vote());
        assert!(state.vote_request(VoteSide::Yes, &connected()).is_err());
    }
}
