//! Read-only market repository.

use std::collections::HashSet;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::RecordConverter;
use crate::error::Result;
use crate::state::Market;

/// Read access to the market catalog.
pub trait MarketRepository: Send + Sync + Debug {
    /// All markets, in catalog order.
    fn list(&self) -> &[Market];

    /// Look up one market by id.
    fn get(&self, id: &str) -> Option<&Market> {
        self.list().iter().find(|m| m.id == id)
    }
}

/// Shared handle to a repository.
pub type SharedCatalog = Arc<dyn MarketRepository>;

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    markets: Vec<Market>,
}

impl InMemoryCatalog {
    /// Build a catalog. Later duplicates of an id are dropped.
    pub fn new(markets: Vec<Market>) -> Self {
        let mut seen = HashSet::new();
        let markets = markets
            .into_iter()
            .filter(|m| {
                let fresh = seen.insert(m.id.clone());
                if !fresh {
                    warn!(market_id = %m.id, "Dropping duplicate market id");
                }
                fresh
            })
            .collect();
        Self { markets }
    }

    /// The markets that ship with the application.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(RecordConverter::convert_seed(super::BUILTIN_SEED)?))
    }

    /// Load markets from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::new(RecordConverter::convert_seed(&content)?);
        info!(
            path = %path.display(),
            markets = catalog.markets.len(),
            "Loaded market seed file"
        );
        Ok(catalog)
    }

    /// Seed file if configured, built-in markets otherwise.
    pub fn load(seed_path: Option<&Path>) -> Result<Self> {
        match seed_path {
            Some(path) => Self::from_seed_file(path),
            None => Self::builtin(),
        }
    }
}

impl MarketRepository for InMemoryCatalog {
    fn list(&self) -> &[Market] {
        &self.markets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let catalog = InMemoryCatalog::builtin().unwrap();
        assert_eq!(catalog.list().len(), 5);
        assert_eq!(
            catalog.get("5").map(|m| m.title.as_str()),
            Some("Will Solana reach $300 by end of 2025?")
        );
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = InMemoryCatalog::builtin().unwrap();
        assert!(catalog.get("404").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let builtin = InMemoryCatalog::builtin().unwrap();
        let mut markets = builtin.list().to_vec();
        let mut dup = markets[0].clone();
        dup.title = "Impostor".to_string();
        markets.push(dup);

        let catalog = InMemoryCatalog::new(markets);
        assert_eq!(catalog.list().len(), 5);
        assert_ne!(catalog.get("1").unwrap().title, "Impostor");
    }

    #[test]
    fn test_seed_file_round_trip() {
        let path = std::env::temp_dir().join(format!("playzone-seed-{}.json", std::process::id()));
        std::fs::write(&path, super::super::BUILTIN_SEED).unwrap();
        let catalog = InMemoryCatalog::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.list().len(), 5);
    }
}
