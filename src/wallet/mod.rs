//! Wallet session capability.
//!
//! Views never talk to a wallet directly. They read a [`SessionState`]
//! snapshot that the app refreshes from a [`WalletSession`] after every
//! connect and disconnect.

mod local;

pub use local::LocalWallet;

use crate::error::Result;
use crate::state::{Balance, ChainInfo, SessionState};

/// What the front end needs from a wallet.
#[cfg_attr(test, mockall::automock)]
pub trait WalletSession: Send {
    fn is_connected(&self) -> bool;

    /// Checksummed address of the connected account.
    fn address(&self) -> Option<String>;

    /// Connect and return the account address.
    fn connect(&mut self) -> Result<String>;

    fn disconnect(&mut self);

    fn balance(&self) -> Option<Balance>;

    fn chain(&self) -> Option<ChainInfo>;
}

/// Copy the wallet's current view into a session snapshot.
pub fn snapshot(wallet: &dyn WalletSession) -> SessionState {
    if !wallet.is_connected() {
        return SessionState::default();
    }
    SessionState {
        address: wallet.address(),
        chain: wallet.chain(),
        balance: wallet.balance(),
    }
}
