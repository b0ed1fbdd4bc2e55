use dioxus::prelude::*;
use dioxus::dioxus_core::Task;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

const STATS: [(&str, &str); 3] = [
    ("24+", "hero.stats.years"),
    ("2500+", "hero.stats.projects"),
    ("12", "hero.stats.awards"),
];

#[component]
pub fn HomePage() -> Element {
    let store = crate::use_content();
    let c = store.read();

    let featured: Vec<_> = c
        .projects()
        .iter()
        .take(3)
        .chain(c.interior_projects().iter().take(2))
        .cloned()
        .collect();
    let services: Vec<_> = c.services().iter().take(4).cloned().collect();
    let testimonials = c.testimonials().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        section { id: "hero",
            p { class: "hero_est", {c.t("hero.est")} }
            h1 { class: "hero_title", Typewriter { text: c.t("hero.typewriter") } }
            p { class: "hero_subtitle", {c.t("hero.subtitle")} }
            div { class: "cta_row",
                a { class: "btn", href: "/about", {c.t("hero.cta")} }
                a { class: "btn primary", href: "/projects", {c.t("hero.exploreProjects")} }
            }
            p { class: "hint", {c.t("hero.scroll")} }
        }

        section { class: "panel",
            div { class: "page_header",
                h2 { {c.t("nav.projects")} }
                a { class: "nav_link", href: "/projects", {c.t("common.explore")} }
            }
            div { class: "card_grid",
                for project in featured {
                    a { key: "{project.id}", class: "card project_card", href: "/projects?project={project.id}",
                        img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                        div { class: "card_body",
                            div { class: "card_meta",
                                span { "{project.year}" }
                                span { "{project.location}" }
                            }
                            h3 { "{project.title}" }
                            p { class: "summary", "{project.description}" }
                        }
                    }
                }
            }
        }

        section { class: "panel",
            h2 { {c.t("nav.services")} }
            p { class: "hint", {c.t("services.heroDescription")} }
            div { class: "card_grid",
                for service in services {
                    div { key: "{service.id}", class: "card",
                        h3 { "{service.title}" }
                        p { class: "summary", "{service.description}" }
                    }
                }
            }
            a { class: "btn", href: "/services", {c.t("common.viewAllServices")} }
        }

        if !testimonials.is_empty() {
            section { class: "panel",
                h2 { {c.t("common.testimonials")} }
                div { class: "card_grid",
                    for item in testimonials {
                        blockquote { key: "{item.id}", class: "card testimonial",
                            p { "“{item.content}”" }
                            footer {
                                strong { "{item.name}" }
                                span { class: "hint",
                                    "{item.role}"
                                    if let Some(company) = item.company.as_deref() {
                                        ", {company}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "stats_row",
            for (value, label) in STATS {
                div { key: "{label}", class: "stat",
                    span { class: "stat_value", "{value}" }
                    span { class: "stat_label", {c.t(label)} }
                }
            }
        }
    }
}

/// Reveals `text` one character at a time in the browser. Elsewhere the full
/// text renders immediately.
#[component]
fn Typewriter(text: String) -> Element {
    let full = text.chars().count();
    let mut shown = use_signal(|| if cfg!(target_arch = "wasm32") { 0 } else { full });
    let mut task = use_signal(|| None::<Task>);

    use_effect(use_reactive((&text,), move |(text,)| {
        if let Some(running) = task.take() {
            running.cancel();
        }
        let total = text.chars().count();
        task.set(Some(spawn(async move {
            #[cfg(target_arch = "wasm32")]
            for i in 0..=total {
                shown.set(i);
                gloo_timers::future::TimeoutFuture::new(80).await;
            }
            #[cfg(not(target_arch = "wasm32"))]
            shown.set(total);
        })));
    }));

    let visible: String = text.chars().take(shown()).collect();
    rsx! {
        span { class: "typewriter", "{visible}" }
        span { class: "typewriter_caret", "aria-hidden": "true", "|" }
    }
}
