//! UI components built with Leptos.
//!
//! - [`WalletConnect`] - Wallet connection card (address, balance, network)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod wallet;

pub use wallet::WalletConnect;
