use anyhow::Result;
use term_themes::{PickByName, Selection, SnapshotError, WorkflowError};

use crate::config::{AppPaths, Settings};

/// Back up the current config and apply the named theme, optionally
/// patching the configured font pair on top.
pub fn run(paths: &AppPaths, settings: &Settings, name: &str, with_font: bool) -> Result<()> {
    let mut selection = Selection::new(
        &settings.general.themes_directory,
        &paths.alacritty_config,
    );
    if with_font {
        selection = selection.with_font(settings.theme.font.as_str(), settings.theme.font_size);
    }

    match selection.run(&PickByName(name.to_owned())) {
        Ok(applied) => {
            println!("Previous config saved as {}", applied.backup.display());
            println!("{} has been applied", applied.theme);
            Ok(())
        }
        Err(e @ (WorkflowError::NoThemes(_) | WorkflowError::Catalog(_))) => {
            anyhow::bail!("{e}; run `term-themes sync` first")
        }
        Err(WorkflowError::Snapshot(SnapshotError::NotFound(path))) => {
            anyhow::bail!(
                "no config at {} to back up; put your Alacritty config under {} first",
                path.display(),
                paths.alacritty_dir.display()
            )
        }
        Err(e) => Err(e.into()),
    }
}
