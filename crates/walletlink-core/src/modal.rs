//! Wallet-selection modal controller.
//!
//! The controller owns no DOM. Everything visible goes through a
//! [`ModalView`], which the page implements over its trigger button and
//! dialog elements and tests implement with a recorder.

use std::rc::{Rc, Weak};

use crate::config::{CONNECT_LABEL, METAMASK_INSTALL_URL, METAMASK_LABEL, messages};
use crate::error::WalletError;
use crate::format::short_address;
use crate::network::network_name;
use crate::provider::Provider;

/// Visual state of the trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    Connected,
}

/// An entry in the wallet-selection dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOption {
    MetaMask,
    /// A listed wallet without a connection routine.
    Other(String),
}

impl WalletOption {
    /// Parse an option from its visible label text.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label == METAMASK_LABEL {
            Self::MetaMask
        } else {
            Self::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::MetaMask => METAMASK_LABEL,
            Self::Other(name) => name,
        }
    }
}

/// Page elements the modal controller drives.
pub trait ModalView {
    /// Show the wallet-selection dialog.
    fn show(&self);
    /// Hide the wallet-selection dialog.
    fn hide(&self);
    /// Update the trigger button's label and color.
    fn set_button(&self, label: &str, style: ButtonStyle);
    /// Blocking user notice.
    fn notify(&self, message: &str);
    /// Open `url` in a new tab.
    fn open_url(&self, url: &str);
    /// Reload the whole page.
    fn reload(&self);
}

pub struct ModalController<V> {
    view: V,
    provider: Option<Rc<dyn Provider>>,
}

impl<V: ModalView + 'static> ModalController<V> {
    pub fn new(view: V, provider: Option<Rc<dyn Provider>>) -> Self {
        Self { view, provider }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&self) {
        self.view.show();
    }

    pub fn close(&self) {
        self.view.hide();
    }

    /// Window click handler. Only clicks landing on the backdrop itself
    /// (not on the dialog content) dismiss the modal.
    pub fn backdrop_click(&self, target_is_backdrop: bool) {
        if target_is_backdrop {
            self.view.hide();
        }
    }

    /// Dispatch a wallet option selection.
    pub async fn select(&self, option: WalletOption) -> Result<(), WalletError> {
        log::info!("wallet option selected: {}", option.label());
        match option {
            WalletOption::MetaMask => self.connect_metamask().await.map(|_| ()),
            WalletOption::Other(name) => {
                self.view.notify(&format!("Connecting to {}...", name));
                self.view.hide();
                Ok(())
            }
        }
    }

    /// Request account access and show the connected account on the trigger.
    ///
    /// Returns the full address of the first authorized account.
    pub async fn connect_metamask(&self) -> Result<String, WalletError> {
        let Some(provider) = self.provider.as_deref() else {
            self.view.notify(&WalletError::NotInstalled.user_message());
            self.view.open_url(METAMASK_INSTALL_URL);
            return Err(WalletError::NotInstalled);
        };

        let address = match request_first_account(provider).await {
            Ok(address) => address,
            Err(e) => {
                log::error!("Connection error: {}", e);
                self.view.notify(messages::CONNECT_FAILED);
                return Err(e);
            }
        };

        let short = short_address(&address);
        self.view.set_button(&short, ButtonStyle::Connected);
        self.view.hide();

        // Informational only; a failure here does not undo the connection.
        match provider.chain_id().await {
            Ok(id) => log::info!("Connected to chain: {} ({})", id, network_name(id)),
            Err(e) => log::warn!("could not read chain id: {}", e),
        }

        self.view.notify(&format!("Connected: {}", short));
        Ok(address)
    }

    /// React to `accountsChanged`.
    pub fn handle_accounts_changed(&self, accounts: &[String]) {
        match accounts.first() {
            Some(address) => self
                .view
                .set_button(&short_address(address), ButtonStyle::Connected),
            None => self.view.set_button(CONNECT_LABEL, ButtonStyle::Default),
        }
    }

    /// React to `chainChanged`. Every chain-dependent value on the page is
    /// stale, so start over.
    pub fn handle_chain_changed(&self) {
        log::info!("chain changed, reloading");
        self.view.reload();
    }

    /// Subscribe to provider events. Does nothing without a provider.
    ///
    /// Listeners hold a weak reference, so dropping the controller silences
    /// them.
    pub fn bind_provider_events(self: &Rc<Self>) -> Result<(), WalletError> {
        let Some(provider) = self.provider.as_ref() else {
            return Ok(());
        };

        let weak: Weak<Self> = Rc::downgrade(self);
        provider.on_accounts_changed(Box::new(move |accounts: Vec<String>| {
            if let Some(controller) = weak.upgrade() {
                controller.handle_accounts_changed(&accounts);
            }
        }))?;

        let weak: Weak<Self> = Rc::downgrade(self);
        provider.on_chain_changed(Box::new(move |_: Option<u64>| {
            if let Some(controller) = weak.upgrade() {
                controller.handle_chain_changed();
            }
        }))
    }
}

async fn request_first_account(provider: &dyn Provider) -> Result<String, WalletError> {
    provider
        .request_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingView, ViewEvent};

    #[test]
    fn test_wallet_option_from_label() {
        assert_eq!(WalletOption::from_label("  MetaMask\n"), WalletOption::MetaMask);
        assert_eq!(
            WalletOption::from_label("WalletConnect"),
            WalletOption::Other("WalletConnect".into())
        );
        assert_eq!(WalletOption::from_label("metamask").label(), "metamask");
    }

    #[test]
    fn test_open_and_close() {
        let controller = ModalController::new(RecordingView::default(), None);
        controller.open();
        controller.close();
        assert_eq!(controller.view().events(), vec![ViewEvent::Shown, ViewEvent::Hidden]);
    }

    #[test]
    fn test_click_inside_dialog_keeps_it_open() {
        let controller = ModalController::new(RecordingView::default(), None);
        controller.open();
        controller.backdrop_click(false);
        assert!(controller.view().is_visible());
        controller.backdrop_click(true);
        assert!(!controller.view().is_visible());
    }

    #[test]
    fn test_empty_accounts_resets_button() {
        let controller = ModalController::new(RecordingView::default(), None);
        controller.handle_accounts_changed(&["0x1234567890abcdef1234567890abcdef12345678".to_string()]);
        assert_eq!(
            controller.view().button(),
            ("0x1234...5678".to_string(), ButtonStyle::Connected)
        );
        controller.handle_accounts_changed(&[]);
        assert_eq!(
            controller.view().button(),
            ("Connect Wallet".to_string(), ButtonStyle::Default)
        );
    }

    #[test]
    fn test_chain_change_reloads() {
        let controller = ModalController::new(RecordingView::default(), None);
        controller.handle_chain_changed();
        assert_eq!(controller.view().events(), vec![ViewEvent::Reloaded]);
    }
}
