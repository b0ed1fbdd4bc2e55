use content::{find_owning_dataset, Lightbox, PendingDeepLink, ProjectBrowser, ProjectView};
use dioxus::prelude::*;

use crate::{GalleryStrip, LightboxOverlay};

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

/// Portfolio grid with the exterior/interior switch, category filter, detail
/// overlay and lightbox. `project` is the `?project=` deep link, if any.
#[component]
pub fn ProjectsPage(project: Option<String>) -> Element {
    let store = crate::use_content();
    let mut browser = use_signal(ProjectBrowser::default);
    let mut pending = use_signal(PendingDeepLink::default);
    let mut lightbox = use_signal(Lightbox::default);

    // Reruns on a new query and on every store change, so an id that only the
    // CMS document defines still opens once the document arrives.
    use_effect(use_reactive((&project,), move |(project,)| {
        let store = store.read();
        let mut pending = pending.write();
        pending.request(project.as_deref());
        if let Some(link) = pending.poll(&store) {
            browser.write().open_deep_link(link);
        }
    }));

    use_effect(move || {
        let language = store.read().language();
        browser.write().set_language(language);
    });

    // Rebuild the image sequence for the selection, keeping an open position.
    use_effect(move || {
        let store = store.read();
        let selected = browser.read().selected().map(str::to_string);
        let next = selected.and_then(|id| {
            find_owning_dataset(&id, store.projects(), store.interior_projects())
                .map(|(_, project)| Lightbox::for_item(project))
        });
        let mut next = next.unwrap_or_default();
        if let Some(i) = lightbox.peek().state().index() {
            next.open(i);
        }
        lightbox.set(next);
    });

    let c = store.read();
    let state = browser.read().clone();
    let active = state.view();
    let categories = c.project_categories(active);
    let current_filter = state.category().map(str::to_string);
    let visible: Vec<_> = c
        .projects_in(active)
        .iter()
        .filter(|p| current_filter.as_ref().map_or(true, |f| &p.category == f))
        .cloned()
        .collect();
    let detail = state.selected().and_then(|id| {
        find_owning_dataset(id, c.projects(), c.interior_projects()).map(|(_, p)| p.clone())
    });
    let project_open = detail.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: PROJECTS_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("projects.heading")} }
            }

            div { class: "view_switch",
                for option in [ProjectView::Exterior, ProjectView::Interior] {
                    button {
                        key: "{option.as_str()}",
                        class: if option == active { "view_tab active" } else { "view_tab" },
                        r#type: "button",
                        onclick: move |_| browser.write().set_view(option),
                        span { class: "view_title", {c.t(&format!("projects.{}.title", option.as_str()))} }
                        span { class: "view_subtitle", {c.t(&format!("projects.{}.subtitle", option.as_str()))} }
                    }
                }
            }

            div { class: "filter_row",
                button {
                    class: if current_filter.is_none() { "chip active" } else { "chip" },
                    r#type: "button",
                    onclick: move |_| browser.write().set_category(None),
                    {c.t("common.filterAll")}
                }
                for category in categories {
                    button {
                        key: "{category}",
                        class: if current_filter.as_deref() == Some(category.as_str()) { "chip active" } else { "chip" },
                        r#type: "button",
                        onclick: {
                            let category = category.clone();
                            move |_| browser.write().set_category(Some(category.clone()))
                        },
                        "{category}"
                    }
                }
            }

            div { class: "card_grid",
                for p in visible {
                    button {
                        key: "{p.id}",
                        class: "card project_card",
                        r#type: "button",
                        onclick: {
                            let id = p.id.clone();
                            move |_| browser.write().select(id.clone())
                        },
                        img { src: "{p.image}", alt: "{p.title}", loading: "lazy" }
                        div { class: "card_body",
                            span { class: "card_meta", "{p.category}" }
                            h3 { "{p.title}" }
                            span { class: "hint", "{p.location} · {p.year}" }
                        }
                    }
                }
            }
        }

        if let Some(p) = detail {
            div {
                class: "modal_backdrop",
                onclick: move |_| browser.write().close(),
                div {
                    class: "modal project_detail",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    button {
                        class: "modal_close",
                        r#type: "button",
                        onclick: move |_| browser.write().close(),
                        {c.t("common.backToProjects")}
                    }
                    GalleryStrip { lightbox, alt: p.title.clone() }
                    div { class: "detail_body",
                        span { class: "card_meta", "{p.category}" }
                        h2 { "{p.title}" }
                        div { class: "detail_facts",
                            span { "{p.location}" }
                            span { "{p.year}" }
                            if !p.area.is_empty() {
                                span { "{p.area}" }
                            }
                        }
                        p { "{p.description}" }
                        if !p.specs.is_empty() {
                            h4 { {c.t("common.specs")} }
                            dl { class: "spec_list",
                                for spec in p.specs.iter() {
                                    div { key: "{spec.label}",
                                        dt { "{spec.label}" }
                                        dd { "{spec.value}" }
                                    }
                                }
                            }
                        }
                        a { class: "btn primary", href: "/contact", {c.t("common.getInTouch")} }
                    }
                }
            }
        }

        LightboxOverlay { lightbox, keep_locked: project_open }
    }
}
