use content::Lang;
use dioxus::prelude::*;

#[component]
pub fn AboutPage() -> Element {
    let store = crate::use_content();
    let c = store.read();
    let team = c.team().to_vec();

    let values: Vec<(String, String)> = c
        .translations()
        .get("about.values.items")
        .or_else(|| c.bundle().translations(Lang::En).get("about.values.items"))
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    let field = |name: &str| {
                        item.get(name)
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string()
                    };
                    (field("title"), field("desc"))
                })
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("nav.about")} }
            }
            p { {c.t("about.heroText1")} }
            p { {c.t("about.heroText2")} }

            section { class: "panel",
                h2 { {c.t("about.history.title")} }
                p { {c.t("about.history.content")} }
                p { class: "hint", {c.t("about.digitalPioneer")} }
            }

            section { class: "panel",
                h2 { {c.t("about.mission.title")} }
                p { {c.t("about.mission.content")} }
            }

            if !values.is_empty() {
                section { class: "panel",
                    h2 { {c.t("about.values.title")} }
                    div { class: "card_grid",
                        for (title, desc) in values {
                            div { key: "{title}", class: "card",
                                h3 { "{title}" }
                                p { class: "summary", "{desc}" }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { {c.t("about.leadership")} }
                div { class: "card_grid",
                    for member in team {
                        div { key: "{member.id}", class: "card team_card",
                            if !member.image.is_empty() {
                                img { src: "{member.image}", alt: "{member.name}", loading: "lazy" }
                            }
                            div { class: "card_body",
                                h3 { "{member.name}" }
                                span { class: "card_meta", "{member.role}" }
                                p { class: "summary", "{member.bio}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
