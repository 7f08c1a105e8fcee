//! Folder listing entries and their wire representation.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// MIME type the remote store reserves for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Entry kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    /// Derive the kind from a MIME type.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type == FOLDER_MIME_TYPE {
            Self::Folder
        } else {
            Self::File
        }
    }

    /// Display label ("Folder" / "File").
    pub fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::File => "File",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Folder => 0,
            Self::File => 1,
        }
    }
}

/// One item in a folder listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    /// Size in bytes, files only.
    pub size_bytes: Option<u64>,
    pub modified_at: Option<DateTime<Utc>>,
    /// Link that opens the file in a new browsing context, files only.
    pub open_link: Option<String>,
    /// Preview image, files only.
    pub thumbnail_link: Option<String>,
}

impl Entry {
    /// Create a folder entry.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: EntryKind::Folder,
            size_bytes: None,
            modified_at: None,
            open_link: None,
            thumbnail_link: None,
        }
    }

    /// Create a file entry without size or link.
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::File,
            ..Self::folder(id, name)
        }
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size_bytes = Some(bytes);
        self
    }

    pub fn with_modified(mut self, at: DateTime<Utc>) -> Self {
        self.modified_at = Some(at);
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.open_link = Some(url.into());
        self
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Lower-cased extension of the name, if it has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// Response body of a listing query.
#[derive(Debug, Deserialize)]
pub(crate) struct FileListResponse {
    #[serde(default)]
    pub files: Option<Vec<RemoteFile>>,
}

/// One element of the `files` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoteFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    /// Usually a decimal string such as `"245760"`.
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub modified_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
}

impl From<RemoteFile> for Entry {
    fn from(file: RemoteFile) -> Self {
        let kind = EntryKind::from_mime_type(&file.mime_type);
        let name = if file.name.trim().is_empty() {
            file.id.clone()
        } else {
            file.name
        };

        match kind {
            EntryKind::Folder => Entry {
                modified_at: file.modified_time,
                ..Entry::folder(file.id, name)
            },
            EntryKind::File => Entry {
                id: file.id,
                name,
                kind,
                size_bytes: file.size,
                modified_at: file.modified_time,
                open_link: file.web_view_link.filter(|l| !l.trim().is_empty()),
                thumbnail_link: file.thumbnail_link.filter(|l| !l.trim().is_empty()),
            },
        }
    }
}

/// Size as a decimal string or a number; anything else is unknown.
fn lenient_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    })
}

/// RFC 3339 timestamp; an unparsable value is treated as absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    })
}

// =============================================================================
// Ordering
// =============================================================================

/// Browsing order: folders first, then by name (case-insensitive).
pub fn browse_order(a: &Entry, b: &Entry) -> Ordering {
    a.kind
        .rank()
        .cmp(&b.kind.rank())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort into browsing order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(browse_order);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_mime_type() {
        assert_eq!(EntryKind::from_mime_type(FOLDER_MIME_TYPE), EntryKind::Folder);
        assert_eq!(EntryKind::from_mime_type("application/pdf"), EntryKind::File);
        assert_eq!(EntryKind::from_mime_type(""), EntryKind::File);
    }

    #[test]
    fn test_folders_sort_first() {
        let mut entries = vec![Entry::file("1", "Zeta"), Entry::folder("2", "Alpha")];
        sort_entries(&mut entries);
        assert_eq!(entries[0].name, "Alpha");
        assert!(entries[0].is_folder());
        assert_eq!(entries[1].name, "Zeta");
    }

    #[test]
    fn test_sort_is_case_insensitive_with_stable_ties() {
        let mut entries = vec![
            Entry::file("1", "beta.txt"),
            Entry::file("2", "Alpha.txt"),
            Entry::folder("3", "zoo"),
            Entry::file("4", "alpha.txt"),
        ];
        sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zoo", "Alpha.txt", "alpha.txt", "beta.txt"]);
    }

    #[test]
    fn test_remote_file_conversion() {
        let json = r#"{
            "id": "4",
            "name": "vacation.jpg",
            "mimeType": "image/jpeg",
            "size": "2048000",
            "modifiedTime": "2024-01-08T14:20:00Z",
            "webViewLink": "https://drive.google.com/file/d/4/view"
        }"#;
        let file: RemoteFile = serde_json::from_str(json).unwrap();
        let entry = Entry::from(file);
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size_bytes, Some(2_048_000));
        assert_eq!(
            entry.open_link.as_deref(),
            Some("https://drive.google.com/file/d/4/view")
        );
        assert!(entry.modified_at.is_some());
    }

    #[test]
    fn test_folder_drops_size_and_link() {
        let json = r#"{
            "id": "1",
            "name": "Documents",
            "mimeType": "application/vnd.google-apps.folder",
            "size": "4096",
            "webViewLink": "https://drive.google.com/drive/folders/1"
        }"#;
        let file: RemoteFile = serde_json::from_str(json).unwrap();
        let entry = Entry::from(file);
        assert!(entry.is_folder());
        assert_eq!(entry.size_bytes, None);
        assert_eq!(entry.open_link, None);
    }

    #[test]
    fn test_empty_name_falls_back_to_id() {
        let file: RemoteFile =
            serde_json::from_str(r#"{"id": "abc", "name": "", "mimeType": "text/plain"}"#)
                .unwrap();
        assert_eq!(Entry::from(file).name, "abc");
    }

    #[test]
    fn test_unparsable_size_is_absent() {
        let file: RemoteFile = serde_json::from_str(
            r#"{"id": "1", "name": "a.bin", "mimeType": "x", "size": "lots"}"#,
        )
        .unwrap();
        assert_eq!(Entry::from(file).size_bytes, None);
    }

    #[test]
    fn test_numeric_size_and_bad_timestamp() {
        let file: RemoteFile = serde_json::from_str(
            r#"{"id": "1", "name": "a.bin", "mimeType": "x", "size": 2048000,
                "modifiedTime": "not-a-date"}"#,
        )
        .unwrap();
        let entry = Entry::from(file);
        assert_eq!(entry.size_bytes, Some(2_048_000));
        assert_eq!(entry.modified_at, None);
    }

    #[test]
    fn test_extension() {
        assert_eq!(Entry::file("1", "Report.PDF").extension().as_deref(), Some("pdf"));
        assert_eq!(Entry::file("1", "archive.tar").extension().as_deref(), Some("tar"));
        assert_eq!(Entry::file("1", "Makefile").extension(), None);
        assert_eq!(Entry::file("1", ".bashrc").extension(), None);
        assert_eq!(Entry::file("1", "trailing.").extension(), None);
    }
}
