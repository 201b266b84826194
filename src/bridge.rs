/// Browser-side implementations of the fetch, storage and tab seams
use crate::dispatcher::TabOpener;
use crate::error::{FetchError, StorageError};
use crate::fetcher::StreamSource;
use crate::settings::PreferenceBackend;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn fetchText(url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openUrl(url: &str) -> Result<(), JsValue>;
}

/// Message from a thrown JS value, for logs and inline errors
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Extension APIs as seen from the popup
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserBridge;

impl StreamSource for BrowserBridge {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let body = fetchText(url).await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            message: js_error_message(&e),
        })?;

        body.as_string()
            .ok_or_else(|| FetchError::Parse("response body was not text".to_string()))
    }
}

impl PreferenceBackend for BrowserBridge {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let value = getStorage(key).await.map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: js_error_message(&e),
        })?;

        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Decode {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let write_error = |message: String| StorageError::Write {
            key: key.to_string(),
            message,
        };

        let value_js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| write_error(e.to_string()))?;

        setStorage(key, value_js)
            .await
            .map_err(|e| write_error(js_error_message(&e)))
    }
}

impl TabOpener for BrowserBridge {
    fn open_url(&self, url: &str) {
        let url = url.to_string();
        spawn_local(async move {
            if let Err(e) = openUrl(&url).await {
                log::warn!("Failed to open {}: {}", url, js_error_message(&e));
            }
        });
    }
}
