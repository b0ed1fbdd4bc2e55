use content::Service;
use dioxus::prelude::*;

#[component]
pub fn ServicesPage() -> Element {
    let store = crate::use_content();
    let c = store.read();
    let core = c.services().to_vec();
    let premium = c.premium_services().to_vec();
    let features_label = c.t("common.features");

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("nav.services")} }
                span { class: "badge", {c.t("services.worldClassBadge")} }
            }
            p { class: "hint", {c.t("services.heroDescription")} }

            section { class: "panel",
                h2 { {c.t("services.sectionCore")} }
                p { class: "hint", {c.t("services.coreSubtitle")} }
                div { class: "card_grid",
                    for service in core {
                        ServiceCard { key: "{service.id}", service, features_label: features_label.clone() }
                    }
                }
            }

            if !premium.is_empty() {
                section { class: "panel premium",
                    span { class: "badge", {c.t("services.premiumLabel")} }
                    h2 { {c.t("services.sectionAtelier")} }
                    p { class: "hint", {c.t("services.atelierSubtitle")} }
                    div { class: "card_grid",
                        for service in premium {
                            ServiceCard { key: "{service.id}", service, features_label: features_label.clone() }
                        }
                    }
                }
            }

            div { class: "cta_row",
                a { class: "btn primary", href: "/contact", {c.t("common.getInTouch")} }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service, features_label: String) -> Element {
    rsx! {
        div { class: "card service_card", "data-icon": "{service.icon}",
            if let Some(image) = service.image.as_deref() {
                img { src: "{image}", alt: "{service.title}", loading: "lazy" }
            }
            div { class: "card_body",
                h3 { "{service.title}" }
                p { class: "summary", "{service.description}" }
                if !service.features.is_empty() {
                    h4 { "{features_label}" }
                    ul { class: "feature_list",
                        for feature in service.features.iter() {
                            li { key: "{feature}", "{feature}" }
                        }
                    }
                }
            }
        }
    }
}
