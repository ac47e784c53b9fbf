//! Settlement collaborator.
//!
//! Votes and new markets would be settled on chain. No settlement layer is
//! wired yet, so the shipped implementation reports every call as not yet
//! supported and the UI surfaces that result.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::state::{MarketProposal, VoteRequest};

/// Proof that a vote was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub market_id: String,
    pub settled_at: DateTime<Utc>,
}

/// Reference to a market created on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketReceipt {
    pub market_id: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Settlement: Send + Sync {
    async fn submit_vote(&self, vote: &VoteRequest) -> Result<VoteReceipt>;

    async fn create_market(&self, proposal: &MarketProposal) -> Result<MarketReceipt>;
}

/// Settlement that has nothing behind it yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingSettlement;

#[async_trait]
impl Settlement for PendingSettlement {
    async fn submit_vote(&self, vote: &VoteRequest) -> Result<VoteReceipt> {
        info!(market_id = %vote.market_id, side = %vote.side, "Vote requested");
        Err(Error::not_yet_supported(format!("Voting {}", vote.side)))
    }

    async fn create_market(&self, proposal: &MarketProposal) -> Result<MarketReceipt> {
        info!(
            asset = proposal.asset.symbol(),
            target = %proposal.target_amount,
            "Market creation requested"
        );
        Err(Error::not_yet_supported("Market creation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Asset, VoteSide};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pending_vote_is_not_yet_supported() {
        let vote = VoteRequest {
            market_id: "1".to_string(),
            side: VoteSide::Yes,
            voter: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
        };
        let err = tokio_test::block_on(PendingSettlement.submit_vote(&vote)).unwrap_err();
        assert_eq!(err.to_string(), "Voting yes is not yet supported");
    }

    #[test]
    fn test_pending_create_is_not_yet_supported() {
        let proposal = MarketProposal {
            question: "Will BTC reach $80k?".to_string(),
            description: "By year end".to_string(),
            asset: Asset::Btc,
            target_amount: dec!(80000),
            start: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
        };
        let err = tokio_test::block_on(PendingSettlement.create_market(&proposal)).unwrap_err();
        assert!(matches!(err, Error::NotYetSupported(_)));
        assert_eq!(err.to_string(), "Market creation is not yet supported");
    }
}
