use crate::news::NEWS_RSS_URL;

pub const DEFAULT_CONTENT_PATHS: [&str; 2] = ["./data/content.json", "data/content.json"];

/// Where the remote content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Base for relative paths. In the browser the site origin is used when unset.
    pub base_url: Option<String>,
    /// Candidate paths, tried in order.
    pub content_paths: Vec<String>,
    /// RSS feed behind the "latest news" tab.
    pub news_rss_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            content_paths: DEFAULT_CONTENT_PATHS.iter().map(|p| p.to_string()).collect(),
            news_rss_url: NEWS_RSS_URL.to_string(),
        }
    }
}

impl ContentConfig {
    /// Reads `CONTENT_BASE_URL`, `CONTENT_PATHS` (comma-separated) and `NEWS_RSS_URL`.
    /// Missing or blank values keep the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(base) = std::env::var("CONTENT_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            config.base_url = Some(base);
        }

        let paths: Vec<String> = std::env::var("CONTENT_PATHS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if !paths.is_empty() {
            config.content_paths = paths;
        }

        if let Some(feed) = std::env::var("NEWS_RSS_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            config.news_rss_url = feed;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both variables are read by every test here, so they run as one test to
    // avoid racing on the process environment.
    #[test]
    fn test_from_env() {
        std::env::remove_var("CONTENT_BASE_URL");
        std::env::remove_var("CONTENT_PATHS");
        std::env::remove_var("NEWS_RSS_URL");
        assert_eq!(ContentConfig::from_env(), ContentConfig::default());

        std::env::set_var("NEWS_RSS_URL", "https://feeds.example/arch.xml");
        assert_eq!(
            ContentConfig::from_env().news_rss_url,
            "https://feeds.example/arch.xml"
        );
        std::env::remove_var("NEWS_RSS_URL");

        std::env::set_var("CONTENT_BASE_URL", " https://alnebras.example/ ");
        std::env::set_var("CONTENT_PATHS", "cms/content.json, ,data/content.json");
        let config = ContentConfig::from_env();
        assert_eq!(config.base_url.as_deref(), Some("https://alnebras.example/"));
        assert_eq!(
            config.content_paths,
            vec!["cms/content.json".to_string(), "data/content.json".to_string()]
        );

        std::env::set_var("CONTENT_BASE_URL", "   ");
        std::env::set_var("CONTENT_PATHS", " , ");
        assert_eq!(ContentConfig::from_env(), ContentConfig::default());

        std::env::remove_var("CONTENT_BASE_URL");
        std::env::remove_var("CONTENT_PATHS");
    }

    #[test]
    fn test_default_paths() {
        let config = ContentConfig::default();
        assert_eq!(config.base_url, None);
        assert_eq!(config.content_paths[0], "./data/content.json");
        assert_eq!(config.content_paths[1], "data/content.json");
        assert_eq!(config.news_rss_url, "https://www.archdaily.com/feed/rss/");
    }
}
