use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from backing up or overwriting the destination configuration.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to copy {from} onto {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Move the current configuration aside before a theme overwrites it.
///
/// The file is renamed, not copied, so on success the original path no
/// longer exists and the backup owns the original bytes. The suffix is the
/// zero-padded local date; if a backup from the same day already exists, a
/// counter is appended until the name is free. Returns the backup path.
pub fn backup_config(dest: &Path) -> Result<PathBuf, SnapshotError> {
    let date = chrono::Local::now().format("%Y%m%d");
    let base = {
        let mut s = OsString::from(dest.as_os_str());
        s.push(format!(".{date}.bak"));
        s
    };

    let mut candidate = PathBuf::from(&base);
    let mut counter = 1u32;
    while candidate.exists() {
        let mut s = base.clone();
        s.push(format!(".{counter}"));
        candidate = PathBuf::from(s);
        counter += 1;
    }

    match fs::rename(dest, &candidate) {
        Ok(()) => Ok(candidate),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(SnapshotError::NotFound(dest.to_path_buf()))
        }
        Err(source) => Err(SnapshotError::Rename {
            from: dest.to_path_buf(),
            to: candidate,
            source,
        }),
    }
}

/// Copy a theme's bytes over the destination configuration, replacing its
/// content entirely. The theme file itself is left untouched. Callers must
/// take a backup first; this function will not do it for them.
pub fn apply_theme(theme: &Path, dest: &Path) -> Result<(), SnapshotError> {
    fs::copy(theme, dest)
        .map(|_| ())
        .map_err(|source| SnapshotError::CopyFailed {
            from: theme.to_path_buf(),
            to: dest.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("term-themes-snapshot-{tag}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn backup_renames_with_dated_suffix() {
        let dir = scratch_dir("backup");
        let config = dir.join("alacritty.toml");
        fs::write(&config, "original contents").unwrap();

        let backup = backup_config(&config).unwrap();

        assert!(!config.exists(), "original path should be gone");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "original contents");

        let date = chrono::Local::now().format("%Y%m%d").to_string();
        let expected = format!("alacritty.toml.{date}.bak");
        assert_eq!(backup.file_name().unwrap().to_str().unwrap(), expected);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn backup_of_missing_file_is_not_found() {
        let dir = scratch_dir("backup-missing");
        let result = backup_config(&dir.join("no-such-file.toml"));
        assert!(matches!(result, Err(SnapshotError::NotFound(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn same_day_backups_never_collide() {
        let dir = scratch_dir("backup-twice");
        let config = dir.join("alacritty.toml");

        fs::write(&config, "first").unwrap();
        let first = backup_config(&config).unwrap();

        fs::write(&config, "second").unwrap();
        let second = backup_config(&config).unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
        assert!(second.to_str().unwrap().ends_with(".bak.1"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_replaces_destination_content() {
        let dir = scratch_dir("apply");
        let theme = dir.join("nord.toml");
        let dest = dir.join("alacritty.toml");
        fs::write(&theme, "[colors]\nbackground = \"#2e3440\"\n").unwrap();
        fs::write(&dest, "old config").unwrap();

        apply_theme(&theme, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "[colors]\nbackground = \"#2e3440\"\n"
        );
        // source is copied, not moved
        assert!(theme.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_with_missing_source_fails() {
        let dir = scratch_dir("apply-missing");
        let dest = dir.join("alacritty.toml");
        fs::write(&dest, "old config").unwrap();

        let result = apply_theme(&dir.join("ghost.toml"), &dest);
        assert!(matches!(result, Err(SnapshotError::CopyFailed { .. })));
        // destination untouched on failure
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old config");

        let _ = fs::remove_dir_all(&dir);
    }
}
