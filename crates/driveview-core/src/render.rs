//! Projection of explorer state into render instructions.
//!
//! [`render`] is pure: the same listing, navigation, view mode and `now`
//! always yield the same [`RenderPlan`]. The UI layer only maps the plan to
//! DOM nodes.

use chrono::{DateTime, Utc};

use crate::entry::{Entry, EntryKind};
use crate::format::{count_label, format_file_size, format_modified};
use crate::icon::IconKey;
use crate::listing::{ListingState, ListingStatus};
use crate::navigation::NavigationState;

/// Layout hint for the file list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }
}

/// What activating an item does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemAction {
    OpenFolder { id: String, label: String },
    OpenLink { url: String },
    /// A file without a link.
    None,
}

/// One row or tile of the file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    pub icon: IconKey,
    pub size: String,
    pub modified: String,
    /// e.g. "File • 2.0 MB • Modified 3 days ago"
    pub details: String,
    /// Grid mode only.
    pub thumbnail: Option<String>,
    pub action: ItemAction,
}

/// Main area layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    ConfigurationRequired,
    Loading,
    Empty,
    Error { message: String },
    Content { items: Vec<ItemView> },
}

/// Everything the UI needs to draw the explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    pub path_label: String,
    pub at_root: bool,
    pub view_mode: ViewMode,
    pub query: String,
    pub count_label: String,
    pub layout: Layout,
}

/// Project the listing into a [`RenderPlan`].
pub fn render(
    listing: &ListingState,
    navigation: &NavigationState,
    view_mode: ViewMode,
    now: DateTime<Utc>,
) -> RenderPlan {
    let visible = listing.visible_entries();

    let layout = match listing.status() {
        ListingStatus::Idle | ListingStatus::Loading => Layout::Loading,
        ListingStatus::Error(message) => Layout::Error {
            message: message.clone(),
        },
        ListingStatus::Empty => Layout::Empty,
        ListingStatus::Loaded if visible.is_empty() => Layout::Empty,
        ListingStatus::Loaded => Layout::Content {
            items: visible
                .iter()
                .map(|entry| item_view(entry, view_mode, now))
                .collect(),
        },
    };

    RenderPlan {
        path_label: navigation.path_label().to_string(),
        at_root: navigation.is_at_root(),
        view_mode,
        query: listing.query().to_string(),
        count_label: count_label(visible.len()),
        layout,
    }
}

fn item_view(entry: &Entry, view_mode: ViewMode, now: DateTime<Utc>) -> ItemView {
    let is_folder = entry.is_folder();
    let size = if is_folder {
        String::new()
    } else {
        format_file_size(entry.size_bytes)
    };
    let modified = format_modified(entry.modified_at, now);

    let mut details = entry.kind.label().to_string();
    if !size.is_empty() {
        details.push_str(" • ");
        details.push_str(&size);
    }
    if !modified.is_empty() {
        details.push_str(" • Modified ");
        details.push_str(&modified);
    }

    let action = match (&entry.kind, &entry.open_link) {
        (EntryKind::Folder, _) => ItemAction::OpenFolder {
            id: entry.id.clone(),
            label: entry.name.clone(),
        },
        (EntryKind::File, Some(url)) => ItemAction::OpenLink { url: url.clone() },
        (EntryKind::File, None) => ItemAction::None,
    };

    let thumbnail = match view_mode {
        ViewMode::Grid if !is_folder => entry.thumbnail_link.clone(),
        _ => None,
    };

    ItemView {
        id: entry.id.clone(),
        name: entry.name.clone(),
        kind: entry.kind,
        icon: IconKey::for_entry(entry),
        size,
        modified,
        details,
        thumbnail,
        action,
    }
}
