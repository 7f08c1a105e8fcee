//! Fetch API transport for the listing client.
//!
//! Implements [`Transport`] on top of `window.fetch`, racing every request
//! against a timeout.

use driveview_core::{RawResponse, Transport, TransportError};
use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timeout promise resolves to `undefined`, so a promise that itself
/// resolves to `undefined` is reported as [`RaceResult::TimedOut`].
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message from a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Transport
// =============================================================================

/// [`Transport`] backed by the browser Fetch API.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTransport {
    timeout_ms: i32,
}

impl BrowserTransport {
    pub fn new() -> Self {
        Self {
            timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("Browser window not available".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| TransportError::Network("Failed to create request".to_string()))?;

        let fetch_promise = window.fetch_with_request(&request);

        let resp: Response = match race_with_timeout(fetch_promise, self.timeout_ms).await {
            RaceResult::TimedOut => return Err(TransportError::TimedOut),
            RaceResult::Error(msg) => return Err(TransportError::Network(msg)),
            RaceResult::Completed(result) => result
                .dyn_into()
                .map_err(|_| TransportError::Network("Invalid response object".to_string()))?,
        };

        let text_promise = resp
            .text()
            .map_err(|_| TransportError::Network("Failed to read response".to_string()))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|e| TransportError::Network(js_error_message(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(RawResponse {
            status: resp.status(),
            status_text: resp.status_text(),
            body,
        })
    }
}
