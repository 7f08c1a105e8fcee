//! Drive explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`Header`] - Location, search and actions
//! - [`FileList`] - List or grid of folder entries
//! - [`ConfigForm`] - Credentials modal
//! - [`states`] - Welcome, loading, empty and error panels

mod config_form;
#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod states;

pub use config_form::ConfigForm;
pub use explorer::Explorer;
pub use file_list::FileList;
pub use header::Header;
