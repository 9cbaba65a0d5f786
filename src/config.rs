//! Application configuration.
//!
//! Centralizes the constants the page wiring depends on. Wallet labels and
//! notices live in `walletlink_core::config`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Title rendered by the wallet component.
pub const APP_TITLE: &str = "Web3 Wallet Connection";

// =============================================================================
// Logging
// =============================================================================

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// Page Markup
// =============================================================================

/// Element ids and selectors the landing page markup provides.
pub mod dom_ids {
    /// Mount point for the wallet component.
    pub const APP_ROOT: &str = "app";
    /// Trigger button opening the wallet modal.
    pub const CONNECT_BUTTON: &str = "connectBtn";
    /// Wallet-selection modal backdrop.
    pub const WALLET_MODAL: &str = "walletModal";
    /// Close button inside the modal.
    pub const CLOSE_SELECTOR: &str = ".close";
    /// Wallet choices inside the modal.
    pub const OPTION_SELECTOR: &str = ".wallet-option";
    /// In-page anchors that scroll smoothly.
    pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
