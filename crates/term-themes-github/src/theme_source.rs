use std::time::Duration;

use term_themes::{FetchError, RemoteTheme, ThemeDownloader, ThemeLister};

use crate::content::ContentEntry;

/// Every request gets a hard deadline; a hung remote must not pin a sync
/// task forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a GitHub-hosted theme collection.
#[derive(Debug, Clone)]
pub struct GitHubThemeSourceConfig {
    pub owner: String,
    pub repo: String,
    /// Directory within the repository holding the theme files.
    pub path: String,
    pub token: Option<String>,
    pub api_base_url: Option<String>,
}

impl GitHubThemeSourceConfig {
    /// The alacritty-theme collection, the default place to sync from.
    pub fn alacritty_theme(token: Option<String>) -> Self {
        Self {
            owner: "alacritty".to_owned(),
            repo: "alacritty-theme".to_owned(),
            path: "themes".to_owned(),
            token,
            api_base_url: None,
        }
    }
}

/// Fetches terminal themes from a directory in a GitHub repository.
pub struct GitHubThemeSource {
    config: GitHubThemeSourceConfig,
    client: reqwest::Client,
}

impl GitHubThemeSource {
    pub fn new(config: GitHubThemeSourceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn api_base(&self) -> &str {
        self.config
            .api_base_url
            .as_deref()
            .unwrap_or("https://api.github.com")
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", "term-themes")
            .timeout(REQUEST_TIMEOUT);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }
}

#[async_trait::async_trait]
impl ThemeLister for GitHubThemeSource {
    async fn list(&self) -> Result<Vec<RemoteTheme>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base(),
            self.config.owner,
            self.config.repo,
            self.config.path,
        );

        let response = self
            .build_request(&url)
            .send()
            .await
            .map_err(|e| FetchError::Listing(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Listing(format!(
                "{url} returned HTTP {}",
                response.status()
            )));
        }

        // A success status with a non-JSON body is still a decode failure.
        let entries: Vec<ContentEntry> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let name = entry.name?;
                let download_url = entry.download_url?;
                Some(RemoteTheme { name, download_url })
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl ThemeDownloader for GitHubThemeSource {
    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.build_request(url).send().await.map_err(|e| {
            FetchError::Download {
                url: url.to_owned(),
                reason: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            return Err(FetchError::Download {
                url: url.to_owned(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Download {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}
