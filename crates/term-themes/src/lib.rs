pub mod catalog;
pub mod font;
pub mod materialize;
pub mod remote;
pub mod snapshot;
pub mod sync;
pub mod workflow;

pub use catalog::{CatalogError, ThemeEntry, ensure_catalog, list_themes};
pub use font::{FontError, apply_font};
pub use materialize::{DirWriter, ThemeWriter};
pub use remote::{FetchError, RemoteTheme, ThemeDownloader, ThemeLister};
pub use snapshot::{SnapshotError, apply_theme, backup_config};
pub use sync::{SyncError, TaskError, sync_themes};
pub use workflow::{Applied, PickByName, Selection, ThemeChooser, WorkflowError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
