//! Remote listing client.
//!
//! Builds the folder query, runs it through a [`Transport`] and turns the
//! response into sorted [`Entry`] values. The transport is the only part that
//! touches the network, so the browser supplies a Fetch API implementation
//! and tests supply a scripted one.

use std::future::Future;

use crate::entry::{Entry, FileListResponse, sort_entries};
use crate::error::{FetchError, TransportError};

/// Files endpoint of the remote store.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/drive/v3/files";

/// Fields requested for each file.
pub const LIST_FIELDS: &str =
    "files(id,name,mimeType,size,modifiedTime,webViewLink,thumbnailLink)";

/// Server-side ordering: folders first, then by name.
pub const LIST_ORDER: &str = "folder,name";

/// Largest page the API serves; listings are never paginated.
pub const PAGE_SIZE: u32 = 1000;

/// An HTTP response as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn error(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one GET request.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// A fetch the controller wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation at issue time; only the latest one is applied.
    pub generation: u64,
    pub folder_id: String,
    pub api_key: String,
}

/// Outcome of a [`FetchRequest`], tagged with its generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: u64,
    pub folder_id: String,
    pub result: Result<Vec<Entry>, FetchError>,
}

/// Lists folders of the remote store.
#[derive(Clone, Debug)]
pub struct ListingClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ListingClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_API_BASE)
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetch the entries whose parent is `folder_id`.
    ///
    /// A single attempt; folders come first, then names in ascending order.
    pub async fn list(&self, folder_id: &str, api_key: &str) -> Result<Vec<Entry>, FetchError> {
        let url = list_url(&self.base_url, folder_id, api_key);
        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            return Err(FetchError::from_status(
                response.status,
                &response.status_text,
            ));
        }

        parse_listing(&response.body)
    }

    /// Run a controller-issued request.
    pub async fn execute(&self, request: FetchRequest) -> FetchResponse {
        let result = self.list(&request.folder_id, &request.api_key).await;
        FetchResponse {
            generation: request.generation,
            folder_id: request.folder_id,
            result,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Query URL listing the children of `folder_id`.
pub fn list_url(base_url: &str, folder_id: &str, api_key: &str) -> String {
    let query = format!("'{}' in parents", escape_query_literal(folder_id));
    format!(
        "{}?q={}&key={}&fields={}&orderBy={}&pageSize={}",
        base_url,
        urlencoding::encode(&query),
        urlencoding::encode(api_key),
        urlencoding::encode(LIST_FIELDS),
        urlencoding::encode(LIST_ORDER),
        PAGE_SIZE,
    )
}

/// Escape a value for use inside a single-quoted query string literal.
fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Parse a listing body; a missing `files` field is an empty folder.
fn parse_listing(body: &str) -> Result<Vec<Entry>, FetchError> {
    let parsed: FileListResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::Network(format!("malformed response: {}", e)))?;

    let mut entries: Vec<Entry> = parsed
        .files
        .unwrap_or_default()
        .into_iter()
        .map(Entry::from)
        .collect();
    sort_entries(&mut entries);
    Ok(entries)
}
