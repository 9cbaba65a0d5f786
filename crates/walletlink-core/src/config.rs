//! Wallet connection constants.
//!
//! Centralizes labels, notices, and display layout shared by the modal
//! controller and the wallet component.

// =============================================================================
// Provider
// =============================================================================

/// Global property the wallet extension injects into `window`.
pub const PROVIDER_GLOBAL: &str = "ethereum";

/// Where users without a wallet are sent.
pub const METAMASK_INSTALL_URL: &str = "https://metamask.io/download/";

/// Label of the only wallet option with a real connection routine.
pub const METAMASK_LABEL: &str = "MetaMask";

/// EIP-1193 method names.
pub mod methods {
    pub const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    pub const ACCOUNTS: &str = "eth_accounts";
    pub const CHAIN_ID: &str = "eth_chainId";
    pub const GET_BALANCE: &str = "eth_getBalance";
}

/// EIP-1193 event names.
pub mod events {
    pub const ACCOUNTS_CHANGED: &str = "accountsChanged";
    pub const CHAIN_CHANGED: &str = "chainChanged";
}

// =============================================================================
// Trigger Button
// =============================================================================

/// Trigger label while no account is connected.
pub const CONNECT_LABEL: &str = "Connect Wallet";

/// Trigger background while an account is connected.
pub const CONNECTED_COLOR: &str = "#10b981";

// =============================================================================
// User Notices
// =============================================================================

pub mod messages {
    /// Generic failure after a rejected or failed connection request.
    pub const CONNECT_FAILED: &str = "Failed to connect wallet";
    /// Failure while populating address, balance, and network.
    pub const REFRESH_FAILED: &str = "Failed to update wallet state";
}

// =============================================================================
// Display
// =============================================================================

/// Address truncation layout (`0x1234...5678`).
pub mod address {
    /// Leading characters kept, including the `0x` prefix.
    pub const PREFIX_LEN: usize = 6;
    /// Trailing characters kept.
    pub const SUFFIX_LEN: usize = 4;
    /// Separator between prefix and suffix.
    pub const ELLIPSIS: &str = "...";
}

/// Decimal places shown for balances.
pub const BALANCE_PRECISION: usize = 4;

/// Unit suffix shown after balances.
pub const BALANCE_SYMBOL: &str = "ETH";
