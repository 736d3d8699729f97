use anyhow::Result;
use term_themes::{ensure_catalog, list_themes};

use crate::config::{AppPaths, Settings};

/// Print the local catalog. If the themes directory changed since the last
/// recorded refresh, the settings file is brought up to date as a side
/// effect.
pub fn run(paths: &AppPaths, settings: &mut Settings) -> Result<()> {
    let themes_dir = settings.general.themes_directory.clone();

    if ensure_catalog(&themes_dir).is_err() {
        println!("No themes yet. Run `term-themes sync` to fetch the collection.");
        return Ok(());
    }

    let names: Vec<String> = list_themes(&themes_dir)
        .into_iter()
        .map(|e| e.name)
        .collect();

    if names.is_empty() {
        println!("No themes yet. Run `term-themes sync` to fetch the collection.");
        return Ok(());
    }

    if settings.themes_changed_since(&themes_dir) {
        eprintln!("warning: theme directory changed since the last refresh; updating the recorded list");
        settings.record_themes(names.clone());
        settings.save(&paths.config_file)?;
    }

    for name in &names {
        println!("  {name}");
    }
    println!("\n{} themes", names.len());

    Ok(())
}
