use std::fs;
use std::path::{Path, PathBuf};

/// One theme visible for selection in the local catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Errors that can occur when probing the local catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("theme directory not found: {0}")]
    NotFound(PathBuf),
}

/// Verify the catalog directory exists before offering it for selection.
pub fn ensure_catalog(dir: &Path) -> Result<(), CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::NotFound(dir.to_path_buf()));
    }
    Ok(())
}

/// Walk `dir` recursively and collect one entry per name found.
///
/// Entries literally named `themes` are skipped so a container directory
/// never lists itself. Unreadable entries are skipped rather than failing
/// the walk (a partial catalog beats no catalog), and a missing root
/// yields an empty listing. Order is traversal order, not sorted.
pub fn list_themes(dir: &Path) -> Vec<ThemeEntry> {
    let mut entries = Vec::new();
    walk(dir, &mut entries);
    entries
}

fn walk(dir: &Path, out: &mut Vec<ThemeEntry>) {
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };

    for entry in read.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if name != "themes" {
            out.push(ThemeEntry {
                name,
                path: path.clone(),
            });
        }

        if path.is_dir() {
            walk(&path, out);
        }
    }
}
