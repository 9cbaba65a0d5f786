mod app;
mod components;
mod config;
mod modal;
mod utils;

use app::App;
use leptos::prelude::*;

use crate::config::{LOG_LEVEL, dom_ids};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    let Some(document) = utils::dom::document() else {
        log::error!("no document available");
        return;
    };

    utils::dom::install_smooth_scroll(&document, dom_ids::ANCHOR_SELECTOR);

    // Landing page: vanilla modal on the existing markup
    if modal::install(&document) {
        log::info!("wallet modal installed");
    }

    // Dapp page: reactive wallet component
    if let Some(root) = utils::dom::html_element_by_id(&document, dom_ids::APP_ROOT) {
        mount_to(root, App).forget();
        log::info!("wallet component mounted");
    }
}
