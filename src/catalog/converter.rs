//! Conversion from seed records to catalog markets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::state::{Market, MarketStatus, Trade};

/// A trade as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub time: DateTime<Utc>,
    pub amount: Decimal,
}

/// A market as written in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub resolution_time: DateTime<Utc>,
    pub status: MarketStatus,
    pub volume: Decimal,
    #[serde(default)]
    pub trades: Vec<TradeRecord>,
}

/// Converts seed records to internal market types.
pub struct RecordConverter;

impl RecordConverter {
    /// Parse a JSON seed document.
    pub fn parse_seed(json: &str) -> Result<Vec<MarketRecord>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert a record into a market.
    ///
    /// A window that is out of order is kept but logged, since seed data is
    /// trusted to be ordered.
    pub fn convert_market(record: MarketRecord) -> Result<Market> {
        if record.id.trim().is_empty() {
            return Err(Error::invalid_input("market record without an id"));
        }

        let market = Market {
            id: record.id,
            title: record.title,
            description: record.description,
            start: record.start_date,
            end: record.end_date,
            resolution: record.resolution_time,
            status: record.status,
            volume: record.volume,
            trades: record
                .trades
                .into_iter()
                .map(|t| Trade {
                    time: t.time,
                    amount: t.amount,
                })
                .collect(),
        };

        if !market.has_ordered_window() {
            warn!(
                market_id = %market.id,
                "Market window is out of order (start <= end <= resolution)"
            );
        }

        Ok(market)
    }

    /// Parse and convert a seed document in one go.
    pub fn convert_seed(json: &str) -> Result<Vec<Market>> {
        Self::parse_seed(json)?
            .into_iter()
            .map(Self::convert_market)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_seed_converts() {
        let markets = RecordConverter::convert_seed(crate::catalog::BUILTIN_SEED).unwrap();
        assert_eq!(markets.len(), 5);

        let btc = &markets[2];
        assert_eq!(btc.id, "3");
        assert_eq!(btc.volume, dec!(120450));
        assert_eq!(btc.status, MarketStatus::Open);
        assert_eq!(
            btc.end,
            Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap()
        );
        assert_eq!(btc.trades.len(), 3);
        assert!(markets.iter().all(Market::has_ordered_window));
    }

    #[test]
    fn test_trades_default_to_empty() {
        let json = r#"[{
            "id": "9",
            "title": "t",
            "description": "d",
            "startDate": "2025-01-01T00:00:00Z",
            "endDate": "2025-02-01T00:00:00Z",
            "resolutionTime": "2025-02-02T00:00:00Z",
            "status": "closed",
            "volume": 12.5
        }]"#;
        let markets = RecordConverter::convert_seed(json).unwrap();
        assert!(markets[0].trades.is_empty());
        assert_eq!(markets[0].status, MarketStatus::Closed);
    }

    #[test]
    fn test_bad_timestamp_is_serialization_error() {
        let json = r#"[{
            "id": "9", "title": "t", "description": "d",
            "startDate": "yesterday",
            "endDate": "2025-02-01T00:00:00Z",
            "resolutionTime": "2025-02-02T00:00:00Z",
            "status": "open", "volume": 1
        }]"#;
        let err = RecordConverter::convert_seed(json).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_blank_id_rejected() {
        let json = r#"[{
            "id": " ", "title": "t", "description": "d",
            "startDate": "2025-01-01T00:00:00Z",
            "endDate": "2025-02-01T00:00:00Z",
            "resolutionTime": "2025-02-02T00:00:00Z",
            "status": "open", "volume": 1
        }]"#;
        let err = RecordConverter::convert_seed(json).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
