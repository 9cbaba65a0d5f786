//! Browser-agnostic wallet connection logic.
//!
//! This crate provides:
//! - [`Provider`] - the injected wallet abstraction, with [`Eip1193Provider`]
//!   for `window.ethereum`
//! - [`ConnectionState`] and the [`connection`] operations behind the wallet
//!   component
//! - [`ModalController`] - the wallet-selection dialog driven through a
//!   [`ModalView`]
//! - Display helpers in [`format`] and [`network`]

pub mod config;
pub mod connection;
mod eip1193;
pub mod error;
pub mod format;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod modal;
pub mod network;
mod provider;
mod state;

pub use eip1193::Eip1193Provider;
pub use error::WalletError;
pub use modal::{ButtonStyle, ModalController, ModalView, WalletOption};
pub use network::network_name;
pub use provider::{AccountsCallback, ChainCallback, Provider};
pub use state::ConnectionState;
