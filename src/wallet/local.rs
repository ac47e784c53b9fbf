//! Wallet backed by a local signing key.

use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::WalletSession;
use crate::config::WalletConfig;
use crate::error::{Error, Result};
use crate::state::{Balance, ChainInfo};

/// A wallet whose account is a local private key.
///
/// The key comes from configuration, or a fresh one is generated on each
/// connect when none is configured. The balance is the configured value;
/// nothing is read from a chain.
pub struct LocalWallet {
    config: WalletConfig,
    signer: Option<PrivateKeySigner>,
}

impl LocalWallet {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    fn load_signer(&self) -> Result<PrivateKeySigner> {
        let mut signer = match self.config.private_key.as_deref() {
            Some(key) => key
                .trim()
                .parse::<PrivateKeySigner>()
                .map_err(|e| Error::wallet(format!("invalid private key: {e}")))?,
            None => {
                debug!("No private key configured, generating one");
                PrivateKeySigner::random()
            }
        };
        Signer::set_chain_id(&mut signer, Some(self.config.chain_id));
        Ok(signer)
    }
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address())
            .field("chain_id", &self.config.chain_id)
            .finish()
    }
}

impl WalletSession for LocalWallet {
    fn is_connected(&self) -> bool {
        self.signer.is_some()
    }

    fn address(&self) -> Option<String> {
        self.signer
            .as_ref()
            .map(|s| s.address().to_checksum(None))
    }

    fn connect(&mut self) -> Result<String> {
        if let Some(address) = self.address() {
            return Ok(address);
        }
        let signer = self.load_signer()?;
        let address = signer.address().to_checksum(None);
        info!(address = %address, chain_id = self.config.chain_id, "Wallet connected");
        self.signer = Some(signer);
        Ok(address)
    }

    fn disconnect(&mut self) {
        if self.signer.take().is_some() {
            info!("Wallet disconnected");
        }
    }

    fn balance(&self) -> Option<Balance> {
        self.signer.as_ref()?;
        Some(Balance {
            value: self.config.balance.max(Decimal::ZERO),
            symbol: self.config.balance_symbol.clone(),
        })
    }

    fn chain(&self) -> Option<ChainInfo> {
        let signer = self.signer.as_ref()?;
        Some(ChainInfo {
            id: Signer::chain_id(signer).unwrap_or(self.config.chain_id),
            name: self.config.chain_name.clone(),
        })
    }
}
