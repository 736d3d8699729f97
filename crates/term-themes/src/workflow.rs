use std::path::{Path, PathBuf};

use crate::catalog::{self, CatalogError};
use crate::font::{self, FontError};
use crate::snapshot::{self, SnapshotError};

/// Supplies the user's pick from the listed theme names.
///
/// This is the workflow's single suspension point; implementations range
/// from an interactive prompt to a fixed answer for scripted use. `None`
/// means the user backed out.
pub trait ThemeChooser {
    fn choose(&self, names: &[String]) -> Option<String>;
}

/// Pre-committed choice, for non-interactive callers that already know
/// which theme they want.
pub struct PickByName(pub String);

impl ThemeChooser for PickByName {
    fn choose(&self, _names: &[String]) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Errors from a selection run.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The catalog exists but offers nothing to choose from. Distinct
    /// from I/O failures so callers can suggest a sync instead of a fix.
    #[error("no themes available under {0}")]
    NoThemes(PathBuf),

    #[error("selection cancelled")]
    Cancelled,

    #[error("\"{0}\" is not in the theme list")]
    UnknownTheme(String),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Font(#[from] FontError),
}

/// Outcome of a completed selection run.
#[derive(Debug)]
pub struct Applied {
    pub theme: String,
    pub backup: PathBuf,
}

/// The pick-and-apply workflow: list the catalog, let the chooser pick,
/// back the current config up, copy the theme into place, optionally
/// patch the font block.
///
/// Ordering is the whole point: the chooser is never consulted for an
/// empty catalog, and nothing destructive happens until the backup rename
/// has succeeded. If the apply itself fails, the backup stays on disk and
/// the old configuration is recoverable by hand.
pub struct Selection<'a> {
    themes_dir: &'a Path,
    dest_config: &'a Path,
    font: Option<(String, i64)>,
}

impl<'a> Selection<'a> {
    pub fn new(themes_dir: &'a Path, dest_config: &'a Path) -> Self {
        Self {
            themes_dir,
            dest_config,
            font: None,
        }
    }

    /// Also patch the font block after the theme is applied.
    pub fn with_font(mut self, family: impl Into<String>, size: i64) -> Self {
        self.font = Some((family.into(), size));
        self
    }

    pub fn run(&self, chooser: &dyn ThemeChooser) -> Result<Applied, WorkflowError> {
        catalog::ensure_catalog(self.themes_dir)?;

        let entries = catalog::list_themes(self.themes_dir);
        if entries.is_empty() {
            return Err(WorkflowError::NoThemes(self.themes_dir.to_path_buf()));
        }

        let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        let picked = chooser.choose(&names).ok_or(WorkflowError::Cancelled)?;

        let entry = entries
            .iter()
            .find(|e| e.name == picked)
            .ok_or_else(|| WorkflowError::UnknownTheme(picked.clone()))?;

        let backup = snapshot::backup_config(self.dest_config)?;
        snapshot::apply_theme(&entry.path, self.dest_config)?;

        if let Some((family, size)) = &self.font {
            font::apply_font(self.dest_config, family, *size)?;
        }

        Ok(Applied {
            theme: picked,
            backup,
        })
    }
}
