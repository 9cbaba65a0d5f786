//! EIP-1193 provider backed by the injected `window.ethereum` object.
//!
//! All calls go through `ethereum.request({ method, params })` using the
//! Reflect API, so no bindings to a specific wallet SDK are needed.

use alloy_primitives::U256;
use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::config::{PROVIDER_GLOBAL, events, methods};
use crate::error::WalletError;
use crate::format::{parse_chain_id, parse_quantity};
use crate::provider::{AccountsCallback, ChainCallback, Provider};

/// Handle to the injected wallet object.
#[derive(Clone, Debug)]
pub struct Eip1193Provider {
    ethereum: Object,
}

impl Eip1193Provider {
    /// Look up the injected provider on `window`.
    pub fn detect() -> Result<Self, WalletError> {
        let window = web_sys::window().ok_or(WalletError::NoWindow)?;
        let ethereum = Reflect::get(&window, &PROVIDER_GLOBAL.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.dyn_into::<Object>().ok())
            .ok_or(WalletError::NotInstalled)?;
        Ok(Self { ethereum })
    }

    fn method(&self, name: &str) -> Result<Function, WalletError> {
        Reflect::get(&self.ethereum, &name.into())
            .map_err(|_| WalletError::RequestCreationFailed)?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::RequestCreationFailed)
    }

    /// Call `ethereum.request({ method, params })` and await the result.
    async fn request(&self, method: &str, params: Option<Array>) -> Result<JsValue, WalletError> {
        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into())
            .map_err(|_| WalletError::RequestCreationFailed)?;
        if let Some(params) = params {
            Reflect::set(&args, &"params".into(), &params)
                .map_err(|_| WalletError::RequestCreationFailed)?;
        }

        let promise: Promise = self
            .method("request")?
            .call1(&self.ethereum, &args)
            .map_err(|_| WalletError::RequestCreationFailed)?
            .dyn_into()
            .map_err(|_| WalletError::RequestCreationFailed)?;

        JsFuture::from(promise).await.map_err(|e| {
            let (code, message) = rejection_details(&e);
            log::warn!("{} rejected (code {:?}): {}", method, code, message);
            WalletError::RequestRejected(message)
        })
    }

    /// Call `ethereum.on(event, listener)`.
    ///
    /// The closure is leaked with `forget()`: listeners live as long as the
    /// page does.
    fn subscribe(&self, event: &str, listener: Closure<dyn Fn(JsValue)>) -> Result<(), WalletError> {
        self.method("on")?
            .call2(&self.ethereum, &event.into(), listener.as_ref())
            .map_err(|_| WalletError::RequestCreationFailed)?;
        listener.forget();
        Ok(())
    }
}

/// Extract `code` and `message` from an EIP-1193 `ProviderRpcError`.
fn rejection_details(err: &JsValue) -> (Option<i64>, String) {
    let code = Reflect::get(err, &"code".into())
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_default();
    (code, message)
}

fn decode_accounts(value: JsValue) -> Result<Vec<String>, WalletError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| WalletError::InvalidResponse(e.to_string()))
}

fn decode_hex(value: &JsValue) -> Result<String, WalletError> {
    value
        .as_string()
        .ok_or_else(|| WalletError::InvalidResponse(format!("{:?}", value)))
}

#[async_trait(?Send)]
impl Provider for Eip1193Provider {
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        decode_accounts(self.request(methods::REQUEST_ACCOUNTS, None).await?)
    }

    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        decode_accounts(self.request(methods::ACCOUNTS, None).await?)
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let hex_str = decode_hex(&self.request(methods::CHAIN_ID, None).await?)?;
        parse_chain_id(&hex_str).ok_or(WalletError::InvalidResponse(hex_str))
    }

    async fn balance(&self, address: &str) -> Result<U256, WalletError> {
        let params = Array::of2(&address.into(), &"latest".into());
        let hex_str = decode_hex(&self.request(methods::GET_BALANCE, Some(params)).await?)?;
        parse_quantity(&hex_str).ok_or(WalletError::InvalidResponse(hex_str))
    }

    fn on_accounts_changed(&self, callback: AccountsCallback) -> Result<(), WalletError> {
        let listener = Closure::wrap(Box::new(move |accounts: JsValue| {
            match decode_accounts(accounts) {
                Ok(accounts) => callback(accounts),
                Err(e) => log::warn!("ignoring accountsChanged payload: {}", e),
            }
        }) as Box<dyn Fn(JsValue)>);
        self.subscribe(events::ACCOUNTS_CHANGED, listener)
    }

    fn on_chain_changed(&self, callback: ChainCallback) -> Result<(), WalletError> {
        let listener = Closure::wrap(Box::new(move |chain_id: JsValue| {
            callback(chain_id.as_string().as_deref().and_then(parse_chain_id));
        }) as Box<dyn Fn(JsValue)>);
        self.subscribe(events::CHAIN_CHANGED, listener)
    }
}
