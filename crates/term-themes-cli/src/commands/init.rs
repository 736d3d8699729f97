use std::fs;

use anyhow::{Context, Result};

use crate::config::{AppPaths, Settings};

/// Create the config directory, the themes directory, and a default
/// settings file. Refuses to clobber an existing settings file.
pub fn run(paths: &AppPaths) -> Result<()> {
    if paths.config_file.exists() {
        println!("Settings already exist at {}", paths.config_file.display());
        return Ok(());
    }

    fs::create_dir_all(&paths.config_dir).with_context(|| {
        format!(
            "failed to create config directory {}",
            paths.config_dir.display()
        )
    })?;
    fs::create_dir_all(&paths.themes_dir).with_context(|| {
        format!(
            "failed to create themes directory {}",
            paths.themes_dir.display()
        )
    })?;

    Settings::defaults(paths).save(&paths.config_file)?;

    println!("Created {}", paths.config_file.display());
    println!("Run `term-themes sync` to fetch the theme collection.");
    Ok(())
}
