use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::materialize::ThemeWriter;
use crate::remote::{FetchError, ThemeDownloader, ThemeLister};

/// Failure of one download-and-materialize task, tagged with the theme it
/// was working on.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("downloading {name}: {source}")]
    Download { name: String, source: FetchError },

    #[error("writing {name}: {source}")]
    Write {
        name: String,
        source: std::io::Error,
    },
}

/// Errors from a bulk sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The remote listing itself failed; nothing was attempted.
    #[error(transparent)]
    Listing(#[from] FetchError),

    /// Some tasks failed. The themes that did download are on disk; the
    /// first failure drained stands in for the rest.
    #[error("{failed} of {total} themes failed to sync, first failure: {first}")]
    Incomplete {
        total: usize,
        failed: usize,
        first: TaskError,
    },
}

/// Populate `dest` with every theme the remote source lists.
///
/// A listing failure aborts the whole run. After that, each theme gets its
/// own task to download and materialize it. A slow or failing download
/// never blocks or cancels its siblings, so the local catalog ends up as
/// complete as the remote allows. Task failures land in a channel sized to
/// the task count (no producer ever blocks on it); once every task has
/// finished, the drained errors are folded into a single `Incomplete`.
///
/// Returns the number of themes the remote listed on full success.
pub async fn sync_themes(
    lister: &dyn ThemeLister,
    downloader: Arc<dyn ThemeDownloader>,
    writer: Arc<dyn ThemeWriter>,
    dest: &Path,
) -> Result<usize, SyncError> {
    let themes = lister.list().await?;
    let total = themes.len();

    let (tx, mut rx) = mpsc::channel::<TaskError>(total.max(1));
    let mut handles = Vec::with_capacity(total);

    for theme in themes {
        let downloader = Arc::clone(&downloader);
        let writer = Arc::clone(&writer);
        let dest = dest.to_path_buf();
        let tx = tx.clone();

        handles.push(tokio::spawn(async move {
            let bytes = match downloader.download(&theme.download_url).await {
                Ok(bytes) => bytes,
                Err(source) => {
                    let _ = tx
                        .send(TaskError::Download {
                            name: theme.name,
                            source,
                        })
                        .await;
                    return;
                }
            };

            if let Err(source) = writer.create_file(&theme.name, &bytes, &dest) {
                let _ = tx
                    .send(TaskError::Write {
                        name: theme.name,
                        source,
                    })
                    .await;
            }
        }));
    }
    drop(tx);

    for handle in handles {
        let _ = handle.await;
    }

    let mut failed = 0usize;
    let mut first = None;
    while let Some(err) = rx.recv().await {
        failed += 1;
        if first.is_none() {
            first = Some(err);
        }
    }

    match first {
        None => Ok(total),
        Some(first) => Err(SyncError::Incomplete {
            total,
            failed,
            first,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteTheme;
    use crate::test_support::{MemoryWriter, StaticDownloader, StaticLister};

    fn theme(name: &str) -> RemoteTheme {
        RemoteTheme {
            name: name.to_owned(),
            download_url: format!("https://example.com/{name}"),
        }
    }

    #[tokio::test]
    async fn syncs_every_listed_theme() {
        let lister = StaticLister::new(vec![theme("nord.toml"), theme("gruvbox.toml")]);
        let downloader = Arc::new(StaticDownloader::returning(b"bytes"));
        let writer = Arc::new(MemoryWriter::new());

        let count = sync_themes(
            &lister,
            downloader,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            Path::new("/themes"),
        )
        .await
        .unwrap();

        assert_eq!(count, 2);
        let mut written = writer.names();
        written.sort();
        assert_eq!(written, vec!["gruvbox.toml", "nord.toml"]);
    }

    #[tokio::test]
    async fn listing_failure_aborts_before_any_download() {
        let lister = StaticLister::failing("boom");
        let downloader = Arc::new(StaticDownloader::returning(b"bytes"));
        let writer = Arc::new(MemoryWriter::new());

        let result = sync_themes(
            &lister,
            downloader,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            Path::new("/themes"),
        )
        .await;

        assert!(matches!(result, Err(SyncError::Listing(_))));
        assert!(writer.names().is_empty());
    }

    #[tokio::test]
    async fn one_failed_download_does_not_stop_the_rest() {
        let lister = StaticLister::new(vec![
            theme("nord.toml"),
            theme("gruvbox.toml"),
            theme("dracula.toml"),
        ]);
        let downloader =
            Arc::new(StaticDownloader::returning(b"bytes").failing_for("gruvbox.toml"));
        let writer = Arc::new(MemoryWriter::new());

        let result = sync_themes(
            &lister,
            downloader,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            Path::new("/themes"),
        )
        .await;

        match result {
            Err(SyncError::Incomplete {
                total,
                failed,
                first,
            }) => {
                assert_eq!(total, 3);
                assert_eq!(failed, 1);
                assert!(matches!(first, TaskError::Download { ref name, .. } if name == "gruvbox.toml"));
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }

        let mut written = writer.names();
        written.sort();
        assert_eq!(written, vec!["dracula.toml", "nord.toml"]);
    }

    #[tokio::test]
    async fn write_failures_are_tagged_with_the_theme() {
        let lister = StaticLister::new(vec![theme("nord.toml")]);
        let downloader = Arc::new(StaticDownloader::returning(b"bytes"));
        let writer = Arc::new(MemoryWriter::new().rejecting("nord.toml"));

        let result = sync_themes(
            &lister,
            downloader,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            Path::new("/themes"),
        )
        .await;

        match result {
            Err(SyncError::Incomplete { failed, first, .. }) => {
                assert_eq!(failed, 1);
                assert!(matches!(first, TaskError::Write { ref name, .. } if name == "nord.toml"));
            }
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rerun_after_remote_recovers_completes_the_catalog() {
        let dir = std::env::temp_dir().join("term-themes-sync-rerun");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let lister = StaticLister::new(vec![theme("nord.toml"), theme("gruvbox.toml")]);
        let writer = Arc::new(crate::materialize::DirWriter);

        let flaky = Arc::new(StaticDownloader::returning(b"bytes").failing_for("gruvbox.toml"));
        let first = sync_themes(
            &lister,
            flaky,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            &dir,
        )
        .await;
        assert!(first.is_err());
        assert!(dir.join("nord.toml").exists());
        assert!(!dir.join("gruvbox.toml").exists());

        let recovered = Arc::new(StaticDownloader::returning(b"bytes"));
        let second =
            sync_themes(&lister, recovered, Arc::new(crate::materialize::DirWriter), &dir).await;
        assert_eq!(second.unwrap(), 2);
        assert!(dir.join("nord.toml").exists());
        assert!(dir.join("gruvbox.toml").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn empty_listing_is_a_successful_noop() {
        let lister = StaticLister::new(vec![]);
        let downloader = Arc::new(StaticDownloader::returning(b"bytes"));
        let writer = Arc::new(MemoryWriter::new());

        let count = sync_themes(
            &lister,
            downloader,
            Arc::clone(&writer) as Arc<dyn ThemeWriter>,
            Path::new("/themes"),
        )
        .await
        .unwrap();

        assert_eq!(count, 0);
        assert!(writer.names().is_empty());
    }
}
