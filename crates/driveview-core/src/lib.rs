//! Navigation, query and render state machine for a cloud-drive explorer.
//!
//! This crate provides:
//! - [`ExplorerController`] - the orchestrating state machine
//! - [`ListingClient`] - one-shot folder listing over a pluggable [`Transport`]
//! - [`ConfigStore`] - credential persistence over a [`KeyValueStore`]
//! - [`search::filter`] - client-side name filtering
//! - [`render::render`] - pure projection into a [`RenderPlan`]
//!
//! Nothing here touches the browser; the web front end supplies the
//! transport and the key-value store.

mod client;
pub mod config;
mod controller;
mod entry;
pub mod error;
pub mod format;
mod icon;
mod listing;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod navigation;
pub mod render;
pub mod search;

pub use client::{
    DEFAULT_API_BASE, FetchRequest, FetchResponse, ListingClient, RawResponse, Transport, list_url,
};
pub use config::{ConfigStore, Configuration, KeyValueStore, MemoryStore};
pub use controller::{ConfigForm, ExplorerController, ExplorerView, Phase};
pub use entry::{Entry, EntryKind, FOLDER_MIME_TYPE, browse_order, sort_entries};
pub use error::{ConfigError, ConfigField, FetchError, StorageError, TransportError, ValidationError};
pub use icon::IconKey;
pub use listing::{ListingState, ListingStatus};
pub use navigation::{NavigationState, ROOT_LABEL};
pub use render::{ItemAction, ItemView, Layout, RenderPlan, ViewMode};
