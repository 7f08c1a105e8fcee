//! Application configuration.
//!
//! Centralizes the compile-time constants of the web front end. User
//! credentials are not configured here: they are entered in the settings
//! form and persisted by `driveview_core::ConfigStore`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Drive Explorer";

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Info
};

// =============================================================================
// Network Configuration
// =============================================================================

/// Listing request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Hosts that "open file" links may point to.
/// Links to other domains are not opened.
pub const ALLOWED_LINK_DOMAINS: &[&str] = &["drive.google.com", "docs.google.com"];

// =============================================================================
// Time Constants
// =============================================================================

/// Interval for refreshing relative dates ("3 days ago") in milliseconds.
pub const CLOCK_TICK_MS: u64 = 60_000;
