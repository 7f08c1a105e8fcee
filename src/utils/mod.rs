//! Browser-side utilities.
//!
//! Provides:
//! - [`BrowserTransport`] - Fetch API transport with timeout
//! - [`BrowserStorage`] - localStorage key-value store
//! - [`validate_link_url`] - allowlist check for "open file" links
//! - [`logger`] - `log` facade backend writing to the console

pub mod dom;
mod fetch;
pub mod logger;
mod storage;
pub mod time;
mod url;

pub use fetch::BrowserTransport;
pub use storage::BrowserStorage;
pub use url::{UrlValidation, validate_link_url};
