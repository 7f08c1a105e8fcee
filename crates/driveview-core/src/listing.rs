//! Listing state for the current folder.

use crate::entry::Entry;
use crate::search;

/// Where the listing is in its load cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Loaded, but nothing matches (empty folder or no search hits).
    Empty,
    Error(String),
}

/// Entries of the current folder, the active query and the visible subset.
///
/// `visible_entries` is always `search::filter(all_entries, query)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    all_entries: Vec<Entry>,
    query: String,
    visible_entries: Vec<Entry>,
    status: ListingStatus,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Loading`, dropping the previous folder's entries.
    pub fn begin_loading(&mut self) {
        self.all_entries.clear();
        self.visible_entries.clear();
        self.status = ListingStatus::Loading;
    }

    /// Store a successful listing.
    pub fn load(&mut self, entries: Vec<Entry>) {
        self.all_entries = entries;
        self.status = ListingStatus::Loaded;
        self.refilter();
    }

    /// Store a failure; no stale entries survive next to the error.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.all_entries.clear();
        self.visible_entries.clear();
        self.status = ListingStatus::Error(message.into());
    }

    /// Change the query and recompute the visible entries.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible_entries = search::filter(&self.all_entries, &self.query);
        if matches!(self.status, ListingStatus::Loaded | ListingStatus::Empty) {
            self.status = if self.visible_entries.is_empty() {
                ListingStatus::Empty
            } else {
                ListingStatus::Loaded
            };
        }
    }

    pub fn all_entries(&self) -> &[Entry] {
        &self.all_entries
    }

    pub fn visible_entries(&self) -> &[Entry] {
        &self.visible_entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ListingStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
