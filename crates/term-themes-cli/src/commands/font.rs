use anyhow::Result;
use term_themes::apply_font;

use crate::config::{AppPaths, Settings};

/// Patch the font block of the Alacritty config and persist the chosen
/// pair back to the settings file. Arguments left out fall back to the
/// persisted values.
pub fn run(
    paths: &AppPaths,
    settings: &mut Settings,
    family: Option<String>,
    size: Option<i64>,
) -> Result<()> {
    let family = family.unwrap_or_else(|| settings.theme.font.clone());
    let size = size.unwrap_or(settings.theme.font_size);

    apply_font(&paths.alacritty_config, &family, size)?;

    settings.theme.font = family.clone();
    settings.theme.font_size = size;
    settings.save(&paths.config_file)?;

    println!("Font set to {family} at size {size}");
    Ok(())
}
