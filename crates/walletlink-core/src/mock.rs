//! In-memory provider for tests.
//!
//! Responses are configured up front; subscribed callbacks are stored so tests
//! can fire `accountsChanged` / `chainChanged` by hand. [`RecordingView`]
//! stands in for the page elements the modal controller drives.

use std::cell::{Cell, RefCell};

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::WalletError;
use crate::modal::{ButtonStyle, ModalView};
use crate::provider::{AccountsCallback, ChainCallback, Provider};

#[derive(Default)]
pub struct MockProvider {
    request_result: RefCell<Option<Result<Vec<String>, WalletError>>>,
    authorized: RefCell<Vec<String>>,
    chain_id: Cell<Option<u64>>,
    balance: Cell<Option<U256>>,
    accounts_listeners: RefCell<Vec<AccountsCallback>>,
    chain_listeners: RefCell<Vec<ChainCallback>>,
    request_count: Cell<usize>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Approve the next account request with `accounts`; they also become the
    /// authorized accounts.
    pub fn approving(self, accounts: &[&str]) -> Self {
        let accounts: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
        *self.request_result.borrow_mut() = Some(Ok(accounts));
        self
    }

    /// Reject account requests with the given provider message.
    pub fn rejecting(self, message: &str) -> Self {
        *self.request_result.borrow_mut() =
            Some(Err(WalletError::RequestRejected(message.to_string())));
        self
    }

    /// Accounts already authorized before any prompt.
    pub fn with_authorized(self, accounts: &[&str]) -> Self {
        self.set_authorized(accounts);
        self
    }

    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.chain_id.set(Some(chain_id));
        self
    }

    pub fn with_balance(self, wei: U256) -> Self {
        self.balance.set(Some(wei));
        self
    }

    pub fn set_authorized(&self, accounts: &[&str]) {
        *self.authorized.borrow_mut() = accounts.iter().map(|a| a.to_string()).collect();
    }

    pub fn set_chain_id(&self, chain_id: Option<u64>) {
        self.chain_id.set(chain_id);
    }

    /// Number of `eth_requestAccounts` calls seen.
    pub fn request_count(&self) -> usize {
        self.request_count.get()
    }

    pub fn listener_count(&self) -> (usize, usize) {
        (
            self.accounts_listeners.borrow().len(),
            self.chain_listeners.borrow().len(),
        )
    }

    /// Fire `accountsChanged` to every subscriber.
    pub fn emit_accounts_changed(&self, accounts: &[&str]) {
        self.set_authorized(accounts);
        let accounts: Vec<String> = accounts.iter().map(|a| a.to_string()).collect();
        for listener in self.accounts_listeners.borrow().iter() {
            listener(accounts.clone());
        }
    }

    /// Fire `chainChanged` to every subscriber.
    pub fn emit_chain_changed(&self, chain_id: u64) {
        self.chain_id.set(Some(chain_id));
        for listener in self.chain_listeners.borrow().iter() {
            listener(Some(chain_id));
        }
    }
}

#[async_trait(?Send)]
impl Provider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        self.request_count.set(self.request_count.get() + 1);
        let result = self
            .request_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(WalletError::RequestRejected(String::new())));
        if let Ok(accounts) = &result {
            *self.authorized.borrow_mut() = accounts.clone();
        }
        result
    }

    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        Ok(self.authorized.borrow().clone())
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        self.chain_id
            .get()
            .ok_or_else(|| WalletError::RequestRejected("chain unavailable".to_string()))
    }

    async fn balance(&self, _address: &str) -> Result<U256, WalletError> {
        self.balance
            .get()
            .ok_or_else(|| WalletError::RequestRejected("balance unavailable".to_string()))
    }

    fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), WalletError> {
        self.accounts_listeners.borrow_mut().push(callback);
        Ok(())
    }

    fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), WalletError> {
        self.chain_listeners.borrow_mut().push(callback);
        Ok(())
    }
}

// ============================================================================
// Recording View
// ============================================================================

/// Something the modal controller did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Shown,
    Hidden,
    Button(String, ButtonStyle),
    Notice(String),
    Opened(String),
    Reloaded,
}

/// [`ModalView`] that records every call in order.
#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    /// Whether the dialog is currently shown.
    pub fn is_visible(&self) -> bool {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Shown => Some(true),
                ViewEvent::Hidden => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Current trigger label and style.
    pub fn button(&self) -> (String, ButtonStyle) {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Button(label, style) => Some((label.clone(), *style)),
                _ => None,
            })
            .unwrap_or_else(|| (crate::config::CONNECT_LABEL.to_string(), ButtonStyle::Default))
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ModalView for RecordingView {
    fn show(&self) {
        self.record(ViewEvent::Shown);
    }

    fn hide(&self) {
        self.record(ViewEvent::Hidden);
    }

    fn set_button(&self, label: &str, style: ButtonStyle) {
        self.record(ViewEvent::Button(label.to_string(), style));
    }

    fn notify(&self, message: &str) {
        self.record(ViewEvent::Notice(message.to_string()));
    }

    fn open_url(&self, url: &str) {
        self.record(ViewEvent::Opened(url.to_string()));
    }

    fn reload(&self) {
        self.record(ViewEvent::Reloaded);
    }
}
