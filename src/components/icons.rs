//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCoins as Balance, LuGlobe as Network, LuUser as User, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCoin as Balance, BsGlobe as Network, BsPerson as User, BsWallet2 as Wallet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(WALLET, Wallet);
themed_icon!(USER, User);
themed_icon!(BALANCE, Balance);
themed_icon!(NETWORK, Network);
