pub mod content;
pub mod theme_source;

pub use content::ContentEntry;
pub use theme_source::{GitHubThemeSource, GitHubThemeSourceConfig};
