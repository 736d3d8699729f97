use std::io;
use std::path::Path;
use std::sync::Mutex;

use crate::materialize::ThemeWriter;
use crate::remote::{FetchError, RemoteTheme, ThemeDownloader, ThemeLister};
use crate::workflow::ThemeChooser;

/// Lister with a canned answer, for exercising the orchestrator without a
/// network.
pub struct StaticLister {
    result: Result<Vec<RemoteTheme>, String>,
}

impl StaticLister {
    pub fn new(themes: Vec<RemoteTheme>) -> Self {
        Self { result: Ok(themes) }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
        }
    }
}

#[async_trait::async_trait]
impl ThemeLister for StaticLister {
    async fn list(&self) -> Result<Vec<RemoteTheme>, FetchError> {
        match &self.result {
            Ok(themes) => Ok(themes.clone()),
            Err(reason) => Err(FetchError::Listing(reason.clone())),
        }
    }
}

/// Downloader that hands back fixed bytes, with optional per-URL failures.
pub struct StaticDownloader {
    body: Vec<u8>,
    fail_keys: Vec<String>,
}

impl StaticDownloader {
    pub fn returning(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            fail_keys: Vec::new(),
        }
    }

    /// Fail any download whose URL contains `key`.
    pub fn failing_for(mut self, key: impl Into<String>) -> Self {
        self.fail_keys.push(key.into());
        self
    }
}

#[async_trait::async_trait]
impl ThemeDownloader for StaticDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if self.fail_keys.iter().any(|key| url.contains(key.as_str())) {
            return Err(FetchError::Download {
                url: url.to_owned(),
                reason: "simulated failure".to_owned(),
            });
        }
        Ok(self.body.clone())
    }
}

/// Writer that keeps materialized themes in memory instead of on disk,
/// with optional per-name rejection.
pub struct MemoryWriter {
    written: Mutex<Vec<(String, Vec<u8>)>>,
    reject: Vec<String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            reject: Vec::new(),
        }
    }

    /// Reject writes for the given theme name with a permission error.
    pub fn rejecting(mut self, name: impl Into<String>) -> Self {
        self.reject.push(name.into());
        self
    }

    /// Names written so far, in completion order.
    pub fn names(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl Default for MemoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeWriter for MemoryWriter {
    fn create_file(&self, name: &str, content: &[u8], _dir: &Path) -> io::Result<()> {
        if self.reject.iter().any(|r| r == name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            ));
        }
        self.written
            .lock()
            .unwrap()
            .push((name.to_owned(), content.to_vec()));
        Ok(())
    }
}

/// Chooser that records what it was offered and answers with a fixed pick
/// (or a cancel).
pub struct RecordingChooser {
    pick: Option<String>,
    offered: Mutex<Vec<String>>,
}

impl RecordingChooser {
    pub fn picking(name: impl Into<String>) -> Self {
        Self {
            pick: Some(name.into()),
            offered: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            pick: None,
            offered: Mutex::new(Vec::new()),
        }
    }

    /// The names the workflow offered, empty if it never asked.
    pub fn offered(&self) -> Vec<String> {
        self.offered.lock().unwrap().clone()
    }
}

impl ThemeChooser for RecordingChooser {
    fn choose(&self, names: &[String]) -> Option<String> {
        *self.offered.lock().unwrap() = names.to_vec();
        self.pick.clone()
    }
}
