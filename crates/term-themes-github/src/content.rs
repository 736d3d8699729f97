use serde::Deserialize;

/// One entry from GitHub's directory Contents API.
/// `GET /repos/{owner}/{repo}/contents/{path}`
///
/// Directories carry a null `download_url`, and both fields are optional
/// so a malformed entry drops out of the listing instead of failing it.
#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub name: Option<String>,
    pub download_url: Option<String>,
}
