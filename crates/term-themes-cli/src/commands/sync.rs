use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use term_themes::{DirWriter, ThemeDownloader, ThemeWriter, list_themes, sync_themes};
use term_themes_github::{GitHubThemeSource, GitHubThemeSourceConfig};

use crate::config::{AppPaths, Settings};

/// Populate the local catalog from the remote collection, then record the
/// refreshed theme list. A partial sync still records whatever landed on
/// disk before the failure is reported.
pub async fn run(paths: &AppPaths, settings: &mut Settings, token: Option<String>) -> Result<()> {
    let themes_dir = settings.general.themes_directory.clone();
    fs::create_dir_all(&themes_dir).with_context(|| {
        format!(
            "failed to create themes directory {}",
            themes_dir.display()
        )
    })?;

    let config = GitHubThemeSourceConfig::alacritty_theme(token);
    println!("Syncing themes from {}/{}...", config.owner, config.repo);

    let source = Arc::new(GitHubThemeSource::new(config));
    let result = sync_themes(
        source.as_ref(),
        Arc::clone(&source) as Arc<dyn ThemeDownloader>,
        Arc::new(DirWriter) as Arc<dyn ThemeWriter>,
        &themes_dir,
    )
    .await;

    let names: Vec<String> = list_themes(&themes_dir)
        .into_iter()
        .map(|e| e.name)
        .collect();
    let on_disk = names.len();
    settings.record_themes(names);
    settings.save(&paths.config_file)?;

    match result {
        Ok(count) => {
            println!("Synced {count} themes into {}", themes_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("warning: {on_disk} themes are on disk; re-run sync to fill the gaps");
            Err(e.into())
        }
    }
}
