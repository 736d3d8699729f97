use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from patching the font block of a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read or write {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("config at {path} is not valid TOML: {source}")]
    Decode {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to re-encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Replace the `font` table of the configuration at `dest`, leaving every
/// other key untouched.
///
/// The document is handled as an untyped TOML table, not a typed model, so
/// keys this tool knows nothing about survive the rewrite. All four style
/// families are set to `family` and `size` to `size`:
///
/// ```toml
/// [font]
/// size = 14
/// [font.normal]
/// family = "..."
/// # bold, italic, bold_italic likewise
/// ```
pub fn apply_font(dest: &Path, family: &str, size: i64) -> Result<(), FontError> {
    let raw = fs::read_to_string(dest).map_err(|source| FontError::Io {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut doc: toml::Table = raw.parse().map_err(|source| FontError::Decode {
        path: dest.to_path_buf(),
        source,
    })?;

    doc.insert("font".to_owned(), font_table(family, size));

    let encoded = toml::to_string(&doc)?;
    fs::write(dest, encoded).map_err(|source| FontError::Io {
        path: dest.to_path_buf(),
        source,
    })
}

fn font_table(family: &str, size: i64) -> toml::Value {
    let style = |family: &str| {
        let mut t = toml::Table::new();
        t.insert("family".to_owned(), toml::Value::String(family.to_owned()));
        toml::Value::Table(t)
    };

    let mut font = toml::Table::new();
    font.insert("normal".to_owned(), style(family));
    font.insert("bold".to_owned(), style(family));
    font.insert("italic".to_owned(), style(family));
    font.insert("bold_italic".to_owned(), style(family));
    font.insert("size".to_owned(), toml::Value::Integer(size));
    toml::Value::Table(font)
}
