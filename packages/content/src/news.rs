//! The "latest news" tab: an architecture RSS feed, converted to JSON by a
//! public rss2json endpoint and mapped onto [`BlogPost`] cards.

use reqwest::Url;
use serde::Deserialize;

use crate::source::{ContentSource, FetchError};
use crate::types::{lenient_opt_text, lenient_text, BlogPost};

pub const NEWS_RSS_URL: &str = "https://www.archdaily.com/feed/rss/";
pub const RSS2JSON_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";
pub const NEWS_CATEGORY: &str = "Global Architecture";
pub const NEWS_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1487958449943-2429e8be8625?q=80&w=2070&auto=format&fit=crop";
pub const EXCERPT_CHARS: usize = 120;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FeedResponse {
    status: String,
    message: Option<String>,
    items: Vec<FeedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedItem {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(deserialize_with = "lenient_text")]
    pub pub_date: String,
    #[serde(deserialize_with = "lenient_opt_text")]
    pub thumbnail: Option<String>,
    pub enclosure: Option<Enclosure>,
    #[serde(deserialize_with = "lenient_opt_text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_opt_text")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Enclosure {
    #[serde(deserialize_with = "lenient_opt_text")]
    pub link: Option<String>,
}

/// The rss2json request for `rss_url`, with the feed address query-encoded.
pub fn news_feed_url(rss_url: &str) -> Result<Url, FetchError> {
    Url::parse_with_params(RSS2JSON_ENDPOINT, &[("rss_url", rss_url)])
        .map_err(|err| FetchError::InvalidUrl(format!("{RSS2JSON_ENDPOINT}: {err}")))
}

/// Drops everything from a `<` up to the next `>`. An unclosed tag runs to
/// the end of the text.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match (in_tag, ch) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, _) => text.push(ch),
            (true, _) => {}
        }
    }
    text
}

/// First [`EXCERPT_CHARS`] characters of the plain text, followed by `...`.
pub fn excerpt(html: &str) -> String {
    let mut text: String = strip_html(html).chars().take(EXCERPT_CHARS).collect();
    text.push_str("...");
    text
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Maps the `index`-th feed entry onto an external post.
pub fn feed_item_to_post(index: usize, item: &FeedItem) -> BlogPost {
    let image = non_blank(item.thumbnail.as_deref())
        .or_else(|| non_blank(item.enclosure.as_ref()?.link.as_deref()))
        .unwrap_or(NEWS_PLACEHOLDER_IMAGE);
    // "2024-05-02 10:15:00" -> "2024-05-02"
    let date = item.pub_date.split_whitespace().next().unwrap_or_default();

    BlogPost {
        id: format!("ext-{index}"),
        title: item.title.clone(),
        excerpt: excerpt(&item.description),
        content: None,
        date: date.to_string(),
        image: image.to_string(),
        author: non_blank(item.author.as_deref()).map(str::to_string),
        category: NEWS_CATEGORY.to_string(),
        link: item.link.clone(),
        is_external: true,
    }
}

/// Decodes an rss2json response. Anything but `"status": "ok"` is an error.
pub fn parse_feed(text: &str) -> Result<Vec<BlogPost>, FetchError> {
    let feed: FeedResponse = serde_json::from_str(text)?;
    if feed.status != "ok" {
        let reason = feed.message.unwrap_or(feed.status);
        return Err(FetchError::Feed(reason));
    }
    Ok(feed
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| feed_item_to_post(i, item))
        .collect())
}

/// Fetches and maps the news feed in one attempt.
pub async fn load_external_news<S>(source: &S, rss_url: &str) -> Result<Vec<BlogPost>, FetchError>
where
    S: ContentSource + ?Sized,
{
    let url = news_feed_url(rss_url)?;
    let text = source.fetch_text(url.as_str()).await?;
    let posts = parse_feed(&text)?;
    tracing::debug!("content.news: {} item(s) from {rss_url}", posts.len());
    Ok(posts)
}

/// Load state of the news tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NewsFeed {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<BlogPost>),
    Failed,
}

impl NewsFeed {
    /// A fetch is due while nothing is shown and none is in flight. A failed
    /// or empty feed is fetched again the next time the tab opens.
    pub fn needs_fetch(&self) -> bool {
        match self {
            NewsFeed::Idle | NewsFeed::Failed => true,
            NewsFeed::Loaded(posts) => posts.is_empty(),
            NewsFeed::Loading => false,
        }
    }

    pub fn finish(result: Result<Vec<BlogPost>, FetchError>) -> Self {
        match result {
            Ok(posts) => NewsFeed::Loaded(posts),
            Err(err) => {
                tracing::warn!("content.news: feed unavailable: {err}");
                NewsFeed::Failed
            }
        }
    }

    pub fn posts(&self) -> &[BlogPost] {
        match self {
            NewsFeed::Loaded(posts) => posts,
            _ => &[],
        }
    }
}
