//! Wallet session snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The chain a session is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub id: u64,
    pub name: String,
}

/// A native balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub value: Decimal,
    pub symbol: String,
}

impl Balance {
    /// Four decimals and the symbol, e.g. `0.1234 ETH`.
    pub fn display(&self) -> String {
        format!("{:.4} {}", self.value.round_dp(4), self.symbol)
    }
}

/// What the views know about the wallet. Refreshed after every
/// connect/disconnect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub address: Option<String>,
    pub chain: Option<ChainInfo>,
    pub balance: Option<Balance>,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Shortened address, e.g. `0xf39F…2266`.
    pub fn display_name(&self) -> Option<String> {
        self.address.as_deref().map(short_address)
    }

    /// Balance line for the transaction page.
    pub fn balance_display(&self) -> String {
        self.balance
            .as_ref()
            .map(Balance::display)
            .unwrap_or_else(|| "0.0000 ETH".to_string())
    }
}

/// Keep the `0x` prefix plus four leading and four trailing characters.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
