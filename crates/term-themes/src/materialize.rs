use std::fs;
use std::io;
use std::path::Path;

/// Writes fetched theme bytes into the local catalog.
pub trait ThemeWriter: Send + Sync {
    fn create_file(&self, name: &str, content: &[u8], dir: &Path) -> io::Result<()>;
}

/// Plain filesystem writer.
///
/// Content lands in a temporary sibling first and is renamed into place,
/// so `dir/name` is either the complete theme or absent. A task that dies
/// mid-write never leaves a truncated theme under its final name.
pub struct DirWriter;

impl ThemeWriter for DirWriter {
    fn create_file(&self, name: &str, content: &[u8], dir: &Path) -> io::Result<()> {
        let staging = dir.join(format!("{name}.partial"));

        if let Err(e) = fs::write(&staging, content) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        fs::rename(&staging, dir.join(name))
    }
}
