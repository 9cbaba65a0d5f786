//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;
use walletlink_core::connection::WalletStatus;

use crate::components::WalletConnect;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state and the last surfaced error.
    pub wallet: RwSignal<WalletStatus>,
}

impl AppContext {
    /// Creates a context with a disconnected wallet.
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletStatus::new()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    max-width: 500px;
                    margin: 2rem auto;
                    padding: 2rem;
                    text-align: center;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="text-align: left; color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| crate::utils::dom::reload()
                        style="
                            background: #667eea;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 8px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <WalletConnect />
        </ErrorBoundary>
    }
}
