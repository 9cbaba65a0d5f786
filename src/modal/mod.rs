//! Wallet-selection modal bound to the landing page markup.
//!
//! The page provides a trigger button, a modal backdrop, a close button, and
//! one element per wallet option. [`DomModalView`] holds references to those
//! elements and [`install`] wires their events to a
//! [`ModalController`](walletlink_core::ModalController).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use walletlink_core::config::CONNECTED_COLOR;
use walletlink_core::{
    ButtonStyle, Eip1193Provider, ModalController, ModalView, Provider, WalletOption,
};

use crate::config::dom_ids;
use crate::utils::dom;

/// Page elements driven by the modal controller.
pub struct DomModalView {
    button: HtmlElement,
    modal: HtmlElement,
}

impl DomModalView {
    /// Look up the trigger button and modal. `None` if the page lacks them.
    pub fn from_document(document: &Document) -> Option<Self> {
        Some(Self {
            button: dom::html_element_by_id(document, dom_ids::CONNECT_BUTTON)?,
            modal: dom::html_element_by_id(document, dom_ids::WALLET_MODAL)?,
        })
    }

    fn set_display(&self, value: &str) {
        let _ = self.modal.style().set_property("display", value);
    }
}

impl ModalView for DomModalView {
    fn show(&self) {
        self.set_display("block");
    }

    fn hide(&self) {
        self.set_display("none");
    }

    fn set_button(&self, label: &str, style: ButtonStyle) {
        self.button.set_text_content(Some(label));
        let background = match style {
            ButtonStyle::Connected => CONNECTED_COLOR,
            ButtonStyle::Default => "",
        };
        let _ = self.button.style().set_property("background", background);
    }

    fn notify(&self, message: &str) {
        dom::alert(message);
    }

    fn open_url(&self, url: &str) {
        dom::open_in_new_tab(url);
    }

    fn reload(&self) {
        dom::reload();
    }
}

/// Wire the wallet modal into the page.
///
/// Returns `false` when the page has no modal markup.
pub fn install(document: &Document) -> bool {
    let Some(view) = DomModalView::from_document(document) else {
        return false;
    };

    let provider = match Eip1193Provider::detect() {
        Ok(provider) => Some(Rc::new(provider) as Rc<dyn Provider>),
        Err(e) => {
            log::info!("no injected wallet: {}", e);
            None
        }
    };

    let button = view.button.clone();
    let modal = view.modal.clone();
    let controller = Rc::new(ModalController::new(view, provider));

    // Open
    let c = controller.clone();
    dom::listen(&button, "click", move |_| c.open());

    // Close button
    if let Ok(Some(close)) = document.query_selector(dom_ids::CLOSE_SELECTOR) {
        let c = controller.clone();
        dom::listen(&close, "click", move |_| c.close());
    }

    // Outside click: only the backdrop itself counts
    if let Some(window) = dom::window() {
        let c = controller.clone();
        dom::listen(&window, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                .is_some_and(|t| t == modal);
            c.backdrop_click(on_backdrop);
        });
    }

    // Wallet options
    for option in dom::query_all(document, dom_ids::OPTION_SELECTOR) {
        let c = controller.clone();
        let label_source = option.clone();
        dom::listen(&option, "click", move |_| {
            let label = label_source.text_content().unwrap_or_default();
            let choice = WalletOption::from_label(&label);
            let c = c.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = c.select(choice).await {
                    log::debug!("wallet selection ended with: {}", e);
                }
            });
        });
    }

    if let Err(e) = controller.bind_provider_events() {
        log::warn!("could not subscribe to wallet events: {}", e);
    }

    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture() -> (Document, DomModalView) {
        let document = dom::document().unwrap();
        let body = document.body().unwrap();
        for id in [dom_ids::CONNECT_BUTTON, dom_ids::WALLET_MODAL] {
            if document.get_element_by_id(id).is_none() {
                let el = document.create_element("div").unwrap();
                el.set_id(id);
                body.append_child(&el).unwrap();
            }
        }
        let view = DomModalView::from_document(&document).unwrap();
        (document, view)
    }

    #[wasm_bindgen_test]
    fn test_show_and_hide_toggle_display() {
        let (_, view) = fixture();
        view.show();
        assert_eq!(view.modal.style().get_property_value("display").unwrap(), "block");
        view.hide();
        assert_eq!(view.modal.style().get_property_value("display").unwrap(), "none");
    }

    #[wasm_bindgen_test]
    fn test_button_label_and_reset() {
        let (_, view) = fixture();
        view.set_button("0xABCD...0042", ButtonStyle::Connected);
        assert_eq!(view.button.text_content().unwrap(), "0xABCD...0042");
        assert!(!view.button.style().get_property_value("background").unwrap().is_empty());

        view.set_button("Connect Wallet", ButtonStyle::Default);
        assert_eq!(view.button.text_content().unwrap(), "Connect Wallet");
        assert!(view.button.style().get_property_value("background").unwrap().is_empty());
    }
}
