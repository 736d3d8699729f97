/// A theme advertised by the remote listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTheme {
    pub name: String,
    pub download_url: String,
}

/// Errors that can occur when talking to a remote theme source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("listing remote themes failed: {0}")]
    Listing(String),

    #[error("could not decode remote listing: {0}")]
    Decode(String),

    #[error("download of {url} failed: {reason}")]
    Download { url: String, reason: String },
}

/// Lists the themes available from a remote collection.
///
/// Implementations know how to enumerate one particular backing store
/// (e.g., a directory in a GitHub repository).
#[async_trait::async_trait]
pub trait ThemeLister: Send + Sync {
    async fn list(&self) -> Result<Vec<RemoteTheme>, FetchError>;
}

/// Fetches the raw bytes of a single remote theme.
#[async_trait::async_trait]
pub trait ThemeDownloader: Send + Sync {
    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
