//! Wallet connection component.
//!
//! Shows a connect button while disconnected and an address / balance /
//! network panel while connected. State transitions come from
//! [`walletlink_core::connection`]; this module only schedules them and
//! renders the result.

use leptos::prelude::*;
use leptos_icons::Icon;

use walletlink_core::connection::{self, Followup};
use walletlink_core::{Eip1193Provider, Provider};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/wallet/wallet.module.css");

// ============================================================================
// Wallet Handlers
// ============================================================================

/// Injected provider, if the page has one.
fn detect_provider() -> Option<Eip1193Provider> {
    Eip1193Provider::detect().ok()
}

/// Request account access and populate the state.
fn handle_connect(ctx: AppContext) {
    wasm_bindgen_futures::spawn_local(async move {
        let provider = detect_provider();
        let outcome = connection::connect(provider.as_ref().map(|p| p as &dyn Provider)).await;
        ctx.wallet.update(|w| w.apply(outcome));
    });
}

/// Silently restore an already-authorized account.
fn handle_restore(ctx: AppContext) {
    wasm_bindgen_futures::spawn_local(async move {
        let provider = detect_provider();
        let outcome = connection::restore(provider.as_ref().map(|p| p as &dyn Provider)).await;
        ctx.wallet.update(|w| w.apply_restore(outcome));
    });
}

/// Re-fetch balance and network after a provider event.
fn handle_followup(ctx: AppContext, followup: Followup) {
    let Followup::Refresh(address) = followup else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let Some(provider) = detect_provider() else {
            return;
        };
        let outcome = connection::populate(&provider, address.clone()).await;
        ctx.wallet.update(|w| w.apply_refresh(&address, outcome));
    });
}

/// Subscribe to account and chain changes for the lifetime of the page.
fn setup_wallet_events(ctx: AppContext) {
    let Some(provider) = detect_provider() else {
        return;
    };

    let subscribed = provider
        .on_accounts_changed(Box::new(move |accounts: Vec<String>| {
            let followup = ctx
                .wallet
                .try_update(|w| w.accounts_changed(&accounts))
                .unwrap_or(Followup::None);
            handle_followup(ctx, followup);
        }))
        .and_then(|_| {
            provider.on_chain_changed(Box::new(move |chain_id: Option<u64>| {
                let followup = ctx
                    .wallet
                    .try_update(|w| w.chain_changed(chain_id))
                    .unwrap_or(Followup::None);
                handle_followup(ctx, followup);
            }))
        });

    if let Err(e) = subscribed {
        log::warn!("could not subscribe to wallet events: {}", e);
    }
}

// ============================================================================
// Wallet Component
// ============================================================================

#[component]
pub fn WalletConnect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Mount: probe for an existing authorization and listen for changes
    handle_restore(ctx);
    setup_wallet_events(ctx);

    let error = Signal::derive(move || ctx.wallet.with(|w| w.error().map(str::to_string)));
    let connected = Signal::derive(move || ctx.wallet.with(|w| w.is_connected()));
    let address = Signal::derive(move || ctx.wallet.with(|w| w.state().display_address()));
    let balance = Signal::derive(move || ctx.wallet.with(|w| w.state().display_balance()));
    let network = Signal::derive(move || ctx.wallet.with(|w| w.state().display_network()));

    let on_connect = move |_: leptos::ev::MouseEvent| handle_connect(ctx);
    let on_disconnect = move |_: leptos::ev::MouseEvent| ctx.wallet.update(|w| w.disconnect());

    view! {
        <div class=css::card>
            <h2 class=css::title>{APP_TITLE}</h2>

            {move || error.get().map(|message| view! {
                <div class=css::error>{message}</div>
            })}

            <Show
                when=move || connected.get()
                fallback=move || view! {
                    <button class=css::connectButton on:click=on_connect>
                        <span class=css::buttonIcon><Icon icon=ic::WALLET /></span>
                        "Connect Wallet"
                    </button>
                }
            >
                <div class=css::info>
                    <div class=css::row>
                        <span class=css::label>
                            <Icon icon=ic::USER />
                            "Address:"
                        </span>
                        <span class=css::address>{address}</span>
                    </div>
                    <div class=css::row>
                        <span class=css::label>
                            <Icon icon=ic::BALANCE />
                            "Balance:"
                        </span>
                        <span>{balance}</span>
                    </div>
                    <div class=css::row>
                        <span class=css::label>
                            <Icon icon=ic::NETWORK />
                            "Network:"
                        </span>
                        <span>{network}</span>
                    </div>
                    <button class=css::disconnectButton on:click=on_disconnect>
                        "Disconnect"
                    </button>
                </div>
            </Show>
        </div>
    }
}
