//! UI components built with Leptos.
//!
//! - [`explorer`] - Drive browser UI
//! - [`icons`] - Centralized icon definitions

pub mod explorer;
pub mod icons;

pub use explorer::Explorer;
