use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::WalletError;

/// Callback receiving the full account list after an `accountsChanged` event.
pub type AccountsCallback = Box<dyn Fn(Vec<String>)>;

/// Callback receiving the new chain id after a `chainChanged` event.
///
/// `None` when the provider reported a value that is not a hex quantity.
pub type ChainCallback = Box<dyn Fn(Option<u64>)>;

/// An injected wallet provider.
///
/// Calls may suspend for as long as the wallet UI keeps the user deciding;
/// no timeout is applied here.
#[async_trait(?Send)]
pub trait Provider {
    /// Ask the user to authorize accounts (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Accounts already authorized for this page, without prompting
    /// (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<String>, WalletError>;

    /// Current chain id (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// Balance of `address` in wei at the latest block (`eth_getBalance`).
    async fn balance(&self, address: &str) -> Result<U256, WalletError>;

    /// Subscribe to account changes for the lifetime of the page.
    fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), WalletError>;

    /// Subscribe to chain changes for the lifetime of the page.
    fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), WalletError>;
}
