//! End-to-end flows of the wallet component's state machine against the
//! mock provider.

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::U256;
use walletlink_core::connection::{self, Followup, WalletStatus};
use walletlink_core::mock::MockProvider;
use walletlink_core::{Provider, WalletError};

const ADDR: &str = "0xABCDEF1234567890000000000000000000000042";
const OTHER: &str = "0x1234567890abcdef1234567890abcdef12345678";
const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

fn funded_provider() -> MockProvider {
    MockProvider::new()
        .approving(&[ADDR])
        .with_chain_id(137)
        .with_balance(U256::from(ONE_ETHER + ONE_ETHER / 4))
}

#[tokio::test]
async fn connect_populates_state() {
    let provider = funded_provider();
    let mut status = WalletStatus::new();

    status.apply(connection::connect(Some(&provider)).await);

    let state = status.state();
    assert!(state.is_connected());
    assert_eq!(state.address(), Some(ADDR));
    assert_eq!(state.display_address(), "0xABCD...0042");
    assert_eq!(state.display_balance(), "1.2500 ETH");
    assert_eq!(state.chain_id(), Some(137));
    assert_eq!(state.display_network(), "Polygon Mainnet");
    assert_eq!(status.error(), None);
}

#[tokio::test]
async fn connect_without_provider_leaves_state_untouched() {
    let mut status = WalletStatus::new();

    let outcome = connection::connect(None).await;
    assert_eq!(outcome, Err(WalletError::NotInstalled));
    status.apply(outcome);

    assert!(!status.is_connected());
    assert_eq!(status.state(), WalletStatus::new().state());
    assert_eq!(status.error(), Some("MetaMask is not installed!"));
}

#[tokio::test]
async fn rejection_surfaces_provider_message() {
    let provider = MockProvider::new().rejecting("User rejected the request.");
    let mut status = WalletStatus::new();

    status.apply(connection::connect(Some(&provider)).await);

    assert!(!status.is_connected());
    assert_eq!(status.error(), Some("User rejected the request."));
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn failed_detail_fetch_is_not_committed() {
    // No balance configured: the populate step fails after access is granted.
    let provider = MockProvider::new().approving(&[ADDR]).with_chain_id(1);
    let mut status = WalletStatus::new();

    let outcome = connection::connect(Some(&provider)).await;
    assert!(matches!(outcome, Err(WalletError::RefreshFailed(_))));
    status.apply(outcome);

    assert!(!status.is_connected());
    assert_eq!(status.error(), Some("Failed to update wallet state"));
}

#[tokio::test]
async fn empty_grant_is_an_error() {
    let provider = funded_provider().approving(&[]);
    let outcome = connection::connect(Some(&provider)).await;
    assert_eq!(outcome, Err(WalletError::NoAccount));
}

#[tokio::test]
async fn restore_uses_authorized_account_without_prompt() {
    let provider = funded_provider().with_authorized(&[ADDR]);
    let mut status = WalletStatus::new();

    status.apply_restore(connection::restore(Some(&provider)).await);

    assert!(status.is_connected());
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn restore_without_authorization_stays_disconnected() {
    let provider = funded_provider();
    let mut status = WalletStatus::new();

    assert_eq!(connection::restore(Some(&provider)).await, Ok(None));
    status.apply_restore(connection::restore(None).await);

    assert!(!status.is_connected());
    assert_eq!(status.error(), None);
}

#[tokio::test]
async fn disconnect_is_local_only() {
    let provider = funded_provider();
    let mut status = WalletStatus::new();
    status.apply(connection::connect(Some(&provider)).await);

    status.disconnect();

    assert!(!status.is_connected());
    // The provider still considers the page authorized.
    assert_eq!(provider.accounts().await, Ok(vec![ADDR.to_string()]));
}

#[tokio::test]
async fn provider_events_drive_status() {
    let provider = Rc::new(funded_provider());
    let status = Rc::new(RefCell::new(WalletStatus::new()));
    status
        .borrow_mut()
        .apply(connection::connect(Some(&*provider)).await);

    let pending = Rc::new(RefCell::new(Vec::new()));
    {
        let status = status.clone();
        let pending = pending.clone();
        provider
            .on_accounts_changed(Box::new(move |accounts: Vec<String>| {
                let followup = status.borrow_mut().accounts_changed(&accounts);
                pending.borrow_mut().push(followup);
            }))
            .unwrap();
    }
    {
        let status = status.clone();
        let pending = pending.clone();
        provider
            .on_chain_changed(Box::new(move |chain_id: Option<u64>| {
                let followup = status.borrow_mut().chain_changed(chain_id);
                pending.borrow_mut().push(followup);
            }))
            .unwrap();
    }

    provider.emit_accounts_changed(&[OTHER]);
    let followup = pending.borrow_mut().pop();
    assert_eq!(followup, Some(Followup::Refresh(OTHER.to_string())));
    let refreshed = connection::populate(&*provider, OTHER.to_string()).await;
    status.borrow_mut().apply_refresh(OTHER, refreshed);
    assert_eq!(status.borrow().state().address(), Some(OTHER));

    provider.emit_chain_changed(1);
    let followup = pending.borrow_mut().pop();
    assert_eq!(followup, Some(Followup::Refresh(OTHER.to_string())));
    let refreshed = connection::populate(&*provider, OTHER.to_string()).await;
    status.borrow_mut().apply_refresh(OTHER, refreshed);
    assert_eq!(status.borrow().state().display_network(), "Ethereum Mainnet");

    provider.emit_accounts_changed(&[]);
    assert_eq!(pending.borrow_mut().pop(), Some(Followup::None));
    assert!(!status.borrow().is_connected());
}

#[tokio::test]
async fn disconnect_wins_over_in_flight_refresh() {
    let provider = funded_provider();
    let mut status = WalletStatus::new();
    status.apply(connection::connect(Some(&provider)).await);

    provider.set_chain_id(Some(1));
    let Followup::Refresh(address) = status.chain_changed(Some(1)) else {
        panic!("chain change while connected should refresh");
    };
    let in_flight = connection::populate(&provider, address.clone());
    status.disconnect();
    status.apply_refresh(&address, in_flight.await);

    assert!(!status.is_connected());
    assert_eq!(status.state().address(), None);
}

#[tokio::test]
async fn refreshes_resolving_out_of_order_show_active_account() {
    const SECOND: &str = "0x2222222222222222222222222222222222222222";
    let provider = funded_provider();
    let mut status = WalletStatus::new();
    status.apply(connection::connect(Some(&provider)).await);

    provider.emit_accounts_changed(&[OTHER]);
    let Followup::Refresh(first) = status.accounts_changed(&[OTHER.to_string()]) else {
        panic!("switch should refresh");
    };
    provider.emit_accounts_changed(&[SECOND]);
    let Followup::Refresh(second) = status.accounts_changed(&[SECOND.to_string()]) else {
        panic!("switch should refresh");
    };

    let second_outcome = connection::populate(&provider, second.clone()).await;
    let first_outcome = connection::populate(&provider, first.clone()).await;
    status.apply_refresh(&second, second_outcome);
    status.apply_refresh(&first, first_outcome);

    let active = provider.accounts().await.unwrap();
    assert_eq!(status.state().address(), active.first().map(String::as_str));
    assert_eq!(status.state().address(), Some(SECOND));
}
