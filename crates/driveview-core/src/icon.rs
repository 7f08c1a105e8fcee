//! Icon selection for entries.

use crate::entry::{Entry, EntryKind};

/// Display token for an entry, resolved from its kind and extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKey {
    Folder,
    Pdf,
    Document,
    Text,
    Image,
    Video,
    Audio,
    Archive,
    Script,
    Web,
    Style,
    Data,
    /// Anything without a more specific icon.
    File,
}

impl IconKey {
    /// Pick the icon for an entry.
    pub fn for_entry(entry: &Entry) -> Self {
        match entry.kind {
            EntryKind::Folder => Self::Folder,
            EntryKind::File => entry
                .extension()
                .map(|ext| Self::from_extension(&ext))
                .unwrap_or(Self::File),
        }
    }

    /// Map a lower-case extension; unknown extensions fall back to [`IconKey::File`].
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Document,
            "txt" => Self::Text,
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Self::Image,
            "mp4" | "avi" | "mkv" | "mov" | "webm" => Self::Video,
            "mp3" | "wav" | "flac" | "aac" => Self::Audio,
            "zip" | "rar" | "7z" | "tar" => Self::Archive,
            "js" => Self::Script,
            "html" => Self::Web,
            "css" => Self::Style,
            "json" => Self::Data,
            _ => Self::File,
        }
    }
}
