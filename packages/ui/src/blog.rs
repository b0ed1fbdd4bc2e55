use content::{load_external_news, BlogPost, ContentConfig, HttpSource, NewsFeed};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlogTab {
    Insights,
    News,
}

/// Company posts, plus a second tab with the live architecture news feed.
/// The feed is fetched the first time its tab opens, and again after a failure.
#[component]
pub fn BlogPage() -> Element {
    let store = crate::use_content();
    let mut tab = use_signal(|| BlogTab::Insights);
    let mut feed = use_signal(NewsFeed::default);

    use_effect(move || {
        if tab() != BlogTab::News || !feed.peek().needs_fetch() {
            return;
        }
        feed.set(NewsFeed::Loading);
        spawn(async move {
            let config = ContentConfig::from_env();
            let source = HttpSource::new(&config);
            let result = load_external_news(&source, &config.news_rss_url).await;
            feed.set(NewsFeed::finish(result));
        });
    });

    let c = store.read();
    let read_more = c.t("common.readMore");
    let posts = match tab() {
        BlogTab::Insights => c.blog_posts().to_vec(),
        BlogTab::News => feed.read().posts().to_vec(),
    };
    let status = match (tab(), &*feed.read()) {
        (BlogTab::News, NewsFeed::Idle | NewsFeed::Loading) => Some(c.t("common.feedLoading")),
        (BlogTab::News, NewsFeed::Failed) => Some(c.t("common.feedError")),
        _ => None,
    };

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("nav.blog")} }
            }
            div { class: "filter_row",
                for (option, label) in [(BlogTab::Insights, "common.companyInsights"), (BlogTab::News, "common.latestNews")] {
                    button {
                        key: "{label}",
                        class: if tab() == option { "chip active" } else { "chip" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        {c.t(label)}
                    }
                }
            }
            if let Some(message) = status {
                p { class: "feed_status", "{message}" }
            } else {
                div { class: "card_grid",
                    for post in posts {
                        PostCard { key: "{post.id}", post, read_more: read_more.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard(post: BlogPost, read_more: String) -> Element {
    let external = post.link.as_deref().filter(|_| post.is_external).map(str::to_string);
    let href = external.clone().unwrap_or_else(|| format!("/blog/{}", post.id));

    rsx! {
        a {
            class: "card post_card",
            href: "{href}",
            target: if external.is_some() { "_blank" } else { "_self" },
            rel: if external.is_some() { "noopener noreferrer" } else { "" },
            if !post.image.is_empty() {
                img { src: "{post.image}", alt: "{post.title}", loading: "lazy" }
            }
            div { class: "card_body",
                div { class: "card_meta",
                    span { "{post.category}" }
                    span { "{post.date}" }
                }
                h3 { "{post.title}" }
                p { class: "summary", "{post.excerpt}" }
                span { class: "nav_link", "{read_more}" }
            }
        }
    }
}

#[component]
pub fn BlogPostPage(id: String) -> Element {
    let store = crate::use_content();
    let c = store.read();

    let Some(post) = c.blog_post(&id).cloned() else {
        return rsx! { crate::NotFoundPage {} };
    };

    rsx! {
        article { class: "page post",
            a { class: "nav_link", href: "/blog", {c.t("nav.blog")} }
            div { class: "card_meta",
                span { "{post.category}" }
                span { "{post.date}" }
                if let Some(author) = post.author.as_deref() {
                    span { "{author}" }
                }
            }
            h1 { "{post.title}" }
            if !post.image.is_empty() {
                img { class: "post_cover", src: "{post.image}", alt: "{post.title}" }
            }
            for (i, paragraph) in post.paragraphs().enumerate() {
                p { key: "{i}", "{paragraph}" }
            }
            if let Some(link) = post.link.as_deref().filter(|_| post.is_external) {
                a { class: "btn primary", href: "{link}", target: "_blank", rel: "noopener noreferrer",
                    {c.t("common.readMore")}
                }
            }
        }
    }
}
