//! Connection state machine behind the wallet component.
//!
//! The async operations return a fresh [`ConnectionState`] instead of
//! mutating one, and [`WalletStatus`] applies those outcomes. A failed
//! operation therefore never touches the current state; it only sets the
//! error message.

use crate::error::WalletError;
use crate::format::format_balance;
use crate::provider::Provider;
use crate::state::ConnectionState;

/// Ask the user for account access, then populate the connection details.
///
/// Fails with [`WalletError::NotInstalled`] when no provider is present and
/// with the provider's own error when the request is rejected.
pub async fn connect(provider: Option<&dyn Provider>) -> Result<ConnectionState, WalletError> {
    let provider = provider.ok_or(WalletError::NotInstalled)?;
    let accounts = provider.request_accounts().await?;
    let address = accounts.into_iter().next().ok_or(WalletError::NoAccount)?;
    populate(provider, address).await
}

/// Silently check for an already-authorized account (no wallet prompt).
///
/// `Ok(None)` means there is nothing to restore.
pub async fn restore(
    provider: Option<&dyn Provider>,
) -> Result<Option<ConnectionState>, WalletError> {
    let Some(provider) = provider else {
        return Ok(None);
    };
    match provider.accounts().await?.into_iter().next() {
        Some(address) => populate(provider, address).await.map(Some),
        None => Ok(None),
    }
}

/// Fetch balance and chain id for `address`.
///
/// All or nothing: any failed query yields [`WalletError::RefreshFailed`].
pub async fn populate(
    provider: &dyn Provider,
    address: String,
) -> Result<ConnectionState, WalletError> {
    let balance = provider
        .balance(&address)
        .await
        .map_err(|e| WalletError::RefreshFailed(e.to_string()))?;
    let chain_id = provider
        .chain_id()
        .await
        .map_err(|e| WalletError::RefreshFailed(e.to_string()))?;

    Ok(ConnectionState::connected(
        address,
        format_balance(balance),
        chain_id,
    ))
}

/// What the component should do after a provider event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Nothing to fetch.
    None,
    /// Re-populate the connection for this address.
    Refresh(String),
}

/// Connection state plus the last error surfaced to the user.
///
/// `pending` is the address the latest provider-triggered refresh was
/// started for. Refresh results for any other address, or arriving after a
/// disconnect, are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletStatus {
    state: ConnectionState,
    error: Option<String>,
    pending: Option<String>,
}

impl WalletStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Apply the outcome of a user-initiated [`connect`].
    ///
    /// Success replaces the state and clears the error; failure leaves the
    /// state as it was.
    pub fn apply(&mut self, outcome: Result<ConnectionState, WalletError>) {
        match outcome {
            Ok(state) => {
                self.state = state;
                self.error = None;
                self.pending = None;
            }
            Err(e) => {
                log::error!("wallet connection failed: {}", e);
                self.error = Some(e.user_message());
            }
        }
    }

    /// Apply the outcome of a [`populate`] started by a [`Followup::Refresh`].
    ///
    /// Commits only while still connected and `address` is the latest
    /// refresh target. A failed refresh keeps the previous account on
    /// display with the error banner, even if the wallet has moved on.
    pub fn apply_refresh(
        &mut self,
        address: &str,
        outcome: Result<ConnectionState, WalletError>,
    ) {
        if !self.state.is_connected() || self.pending.as_deref() != Some(address) {
            log::debug!("dropping stale refresh for {}", address);
            return;
        }
        self.pending = None;
        match outcome {
            Ok(state) => {
                self.state = state;
                self.error = None;
            }
            Err(e) => {
                log::error!("wallet refresh failed: {}", e);
                self.error = Some(e.user_message());
            }
        }
    }

    /// Apply the outcome of [`restore`].
    ///
    /// Restoring happens without user action, so failures are logged only.
    pub fn apply_restore(&mut self, outcome: Result<Option<ConnectionState>, WalletError>) {
        match outcome {
            Ok(Some(state)) => {
                log::info!("restored wallet connection");
                self.state = state;
            }
            Ok(None) => {}
            Err(e) => log::warn!("error checking connection: {}", e),
        }
    }

    /// Local-only reset. The provider keeps its own authorization.
    pub fn disconnect(&mut self) {
        self.state = ConnectionState::disconnected();
        self.error = None;
        self.pending = None;
    }

    /// React to `accountsChanged`.
    ///
    /// An empty list drops back to disconnected. A different account while
    /// connected needs its details fetched.
    pub fn accounts_changed(&mut self, accounts: &[String]) -> Followup {
        match accounts.first() {
            None => {
                if self.state.is_connected() {
                    log::info!("wallet disconnected by provider");
                }
                self.disconnect();
                Followup::None
            }
            Some(address)
                if self.state.is_connected() && self.state.address() != Some(address.as_str()) =>
            {
                self.pending = Some(address.clone());
                Followup::Refresh(address.clone())
            }
            Some(_) => {
                // Back on the displayed account: earlier switches are moot.
                self.pending = None;
                Followup::None
            }
        }
    }

    /// React to `chainChanged`. Balance and network follow the new chain.
    ///
    /// Targets the account a pending switch is heading to, if any.
    pub fn chain_changed(&mut self, chain_id: Option<u64>) -> Followup {
        if !self.state.is_connected() {
            return Followup::None;
        }
        if self.pending.is_none() && chain_id.is_some() && self.state.chain_id() == chain_id {
            return Followup::None;
        }
        let target = self
            .pending
            .clone()
            .or_else(|| self.state.address().map(str::to_string));
        match target {
            Some(address) => {
                self.pending = Some(address.clone());
                Followup::Refresh(address)
            }
            None => Followup::None,
        }
    }
}
