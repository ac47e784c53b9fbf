//! Market catalog.
//!
//! The catalog is read-only at runtime. Views reach it through the
//! [`MarketRepository`] trait so another source can be swapped in without
//! touching view code.

mod converter;
mod repository;

pub use converter::{MarketRecord, RecordConverter, TradeRecord};
pub use repository::{InMemoryCatalog, MarketRepository, SharedCatalog};

/// Built-in seed markets, in the same JSON shape accepted from a seed file.
pub const BUILTIN_SEED: &str = include_str!("markets.json");
