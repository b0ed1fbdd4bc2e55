use dioxus::prelude::*;
use std::env;

use views::{About, Blog, BlogPost, Contact, Home, NotFound, PartnerDetail, Partners, Projects, Services};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/projects?:project")]
    Projects { project: Option<String> },
    #[route("/services")]
    Services {},
    #[route("/partners")]
    Partners {},
    #[route("/partners/:slug")]
    PartnerDetail { slug: String },
    #[route("/blog")]
    Blog {},
    #[route("/blog/:id")]
    BlogPost { id: String },
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn log_runtime_config() {
    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    eprintln!("startup: IP={ip} PORT={port}");

    let config = content::ContentConfig::from_env();
    eprintln!(
        "startup: CONTENT_BASE_URL={} CONTENT_PATHS={} NEWS_RSS_URL={}",
        config.base_url.as_deref().unwrap_or("<site origin>"),
        config.content_paths.join(","),
        config.news_rss_url
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::ContentProvider {
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared page components
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let store = ui::use_content();
    let c = store.read();

    rsx! {
        div { class: "site_nav",
            div { class: "site_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_name", {c.t("nav.brandName")} }
                    span { class: "brand_subtitle", {c.t("nav.brandSubtitle")} }
                }
                div { class: "nav_links",
                    Link { class: "nav_link", to: Route::Projects { project: None }, {c.t("nav.projects")} }
                    Link { class: "nav_link", to: Route::Services {}, {c.t("nav.services")} }
                    Link { class: "nav_link", to: Route::Partners {}, {c.t("nav.partners")} }
                    Link { class: "nav_link", to: Route::About {}, {c.t("nav.about")} }
                    Link { class: "nav_link", to: Route::Blog {}, {c.t("nav.blog")} }
                    Link { class: "nav_link", to: Route::Contact {}, {c.t("nav.contact")} }
                    ui::LanguageToggle {}
                }
            }
        }
        main { class: "route_view", Outlet::<Route> {} }
        ui::SiteFooter {}
    }
}
