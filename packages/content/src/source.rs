use async_trait::async_trait;
use reqwest::Url;
use thiserror::Error;

use crate::bundle::ContentPatch;
use crate::config::ContentConfig;
use crate::normalize::parse_document;

/// Why a remote content load did not produce a patch. Every variant is
/// recoverable: the store keeps serving what it already has.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid content url: {0}")]
    InvalidUrl(String),
    #[error("content request failed: {0}")]
    Transport(String),
    #[error("content request returned status {0}")]
    Status(u16),
    #[error("malformed content document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content document is not a JSON object")]
    NotAnObject,
    #[error("no content path configured")]
    NoPaths,
    #[error("news feed reported: {0}")]
    Feed(String),
}

/// Where the CMS document comes from.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches the document over HTTP, resolving relative paths against the site root.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpSource {
    pub fn new(config: &ContentConfig) -> Self {
        let base_url = config
            .base_url
            .as_deref()
            .and_then(|base| match Url::parse(base) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::warn!("content.source: ignoring base url {base:?}: {err}");
                    None
                }
            })
            .or_else(site_root);
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        if let Ok(absolute) = Url::parse(path) {
            return Ok(absolute);
        }
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| FetchError::InvalidUrl(format!("{path} (no base url)")))?;
        base.join(path)
            .map_err(|err| FetchError::InvalidUrl(format!("{path}: {err}")))
    }
}

#[async_trait(?Send)]
impl ContentSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        tracing::debug!("content.source: GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

// The router uses history paths, so relative paths must not be resolved
// against the current page (`/partners/<slug>`), only against the origin.
#[cfg(target_arch = "wasm32")]
fn site_root() -> Option<Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Url::parse(&format!("{origin}/")).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn site_root() -> Option<Url> {
    None
}

/// Tries each configured path in order and returns the first document that
/// loads and decodes. A path is attempted once; there is no retry.
pub async fn load_remote_content<S>(
    source: &S,
    config: &ContentConfig,
) -> Result<ContentPatch, FetchError>
where
    S: ContentSource + ?Sized,
{
    let mut last_err = FetchError::NoPaths;
    for path in &config.content_paths {
        match source.fetch_text(path).await {
            Ok(text) => match parse_document(&text) {
                Ok(patch) => {
                    tracing::debug!(
                        "content.load: {path} decoded with {} collection(s)",
                        patch.collections().len()
                    );
                    return Ok(patch);
                }
                Err(err) => {
                    tracing::debug!("content.load: {path} did not decode: {err}");
                    last_err = err;
                }
            },
            Err(err) => {
                tracing::debug!("content.load: {path} failed: {err}");
                last_err = err;
            }
        }
    }
    Err(last_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with_base(base: &str) -> HttpSource {
        HttpSource::new(&ContentConfig {
            base_url: Some(base.to_string()),
            ..ContentConfig::default()
        })
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let source = source_with_base("https://example.org/");
        let url = source.resolve("./data/content.json").expect("resolves");
        assert_eq!(url.as_str(), "https://example.org/data/content.json");
        let url = source.resolve("data/content.json").expect("resolves");
        assert_eq!(url.as_str(), "https://example.org/data/content.json");
    }

    #[test]
    fn absolute_paths_ignore_base() {
        let source = source_with_base("https://example.org/");
        let url = source
            .resolve("https://cdn.example.org/content.json")
            .expect("resolves");
        assert_eq!(url.host_str(), Some("cdn.example.org"));
    }

    #[test]
    fn relative_path_without_base_is_invalid() {
        let source = HttpSource::new(&ContentConfig::default());
        assert!(source.base_url().is_none());
        assert!(matches!(
            source.resolve("./data/content.json"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn malformed_base_is_ignored() {
        let source = source_with_base("not a url");
        assert!(source.base_url().is_none());
    }
}
