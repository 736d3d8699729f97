use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_FONT: &str = "monospace";
const DEFAULT_FONT_SIZE: i64 = 14;

/// Filesystem layout, resolved once at startup from the home directory and
/// passed explicitly to everything that needs a path.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub themes_dir: PathBuf,
    pub alacritty_dir: PathBuf,
    pub alacritty_config: PathBuf,
}

impl AppPaths {
    pub fn new(home: &Path) -> Self {
        let config_dir = home.join(".term-themes");
        let alacritty_dir = home.join(".config").join("alacritty");
        Self {
            config_file: config_dir.join("term-themes.toml"),
            themes_dir: config_dir.join("themes"),
            alacritty_config: alacritty_dir.join("alacritty.toml"),
            config_dir,
            alacritty_dir,
        }
    }
}

/// Persisted settings file. The section and key names are the on-disk
/// schema; serde renames keep the Rust side idiomatic.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(rename = "Config")]
    pub general: General,
    #[serde(rename = "ConfigTheme")]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct General {
    #[serde(rename = "ThemesDirectory")]
    pub themes_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    #[serde(rename = "Themes", default)]
    pub themes: Vec<String>,
    #[serde(rename = "LastModified", default)]
    pub last_modified: String,
    #[serde(rename = "FontSize", default = "default_font_size")]
    pub font_size: i64,
    #[serde(rename = "Font", default = "default_font")]
    pub font: String,
}

fn default_font() -> String {
    DEFAULT_FONT.to_owned()
}

fn default_font_size() -> i64 {
    DEFAULT_FONT_SIZE
}

impl Settings {
    pub fn defaults(paths: &AppPaths) -> Self {
        Self {
            general: General {
                themes_directory: paths.themes_dir.clone(),
            },
            theme: ThemeSettings {
                themes: Vec::new(),
                last_modified: String::new(),
                font_size: DEFAULT_FONT_SIZE,
                font: default_font(),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                anyhow::bail!(
                    "no settings at {}; run `term-themes init` first",
                    path.display()
                );
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = toml::to_string(self).context("failed to encode settings")?;
        fs::write(path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Remember the current theme list and stamp the refresh time.
    pub fn record_themes(&mut self, names: Vec<String>) {
        self.theme.themes = names;
        self.theme.last_modified = chrono::Local::now().to_rfc3339();
    }

    /// Whether the themes directory was modified after the recorded
    /// refresh. An unparseable or missing stamp counts as changed; an
    /// unreadable directory does not (there is nothing to refresh from).
    pub fn themes_changed_since(&self, themes_dir: &Path) -> bool {
        let Ok(meta) = fs::metadata(themes_dir) else {
            return false;
        };
        let Ok(modified) = meta.modified() else {
            return false;
        };

        let Ok(recorded) = chrono::DateTime::parse_from_rfc3339(&self.theme.last_modified) else {
            return true;
        };

        chrono::DateTime::<chrono::Utc>::from(modified) > recorded.with_timezone(&chrono::Utc)
    }
}
