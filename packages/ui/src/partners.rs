use content::Lightbox;
use dioxus::prelude::*;

use crate::{GalleryStrip, LightboxOverlay};

#[component]
pub fn PartnersPage() -> Element {
    let store = crate::use_content();
    let c = store.read();
    let partners = c.partners().to_vec();

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("partners.title")} }
            }
            p { class: "hint", {c.t("partners.description")} }
            div { class: "card_grid",
                for partner in partners {
                    a { key: "{partner.id}", class: "card partner_card", href: "/partners/{partner.slug}",
                        img { class: "partner_logo", src: "{partner.logo}", alt: "{partner.name}" }
                        div { class: "card_body",
                            h3 { "{partner.name}" }
                            p { class: "summary", "{partner.description}" }
                            span { class: "hint", {c.t("common.partnerSince")} " {partner.since}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PartnerDetailPage(slug: String) -> Element {
    let store = crate::use_content();
    let mut lightbox = use_signal(Lightbox::default);

    use_effect(use_reactive((&slug,), move |(slug,)| {
        let store = store.read();
        let mut next = store
            .partner_by_slug(&slug)
            .map(|p| Lightbox::for_item(p))
            .unwrap_or_default();
        if let Some(i) = lightbox.peek().state().index() {
            next.open(i);
        }
        lightbox.set(next);
    }));

    let c = store.read();
    let Some(partner) = c.partner_by_slug(&slug).cloned() else {
        return rsx! {
            div { class: "page not_found",
                h1 { {c.t("common.partnerNotFound")} }
                a { class: "btn", href: "/partners", {c.t("common.backToPartners")} }
            }
        };
    };

    rsx! {
        div { class: "page partner_detail",
            a { class: "nav_link", href: "/partners", {c.t("common.backToPartners")} }
            div { class: "page_header",
                img { class: "partner_logo", src: "{partner.logo}", alt: "{partner.name}" }
                h1 { "{partner.name}" }
            }
            p { "{partner.description}" }

            dl { class: "detail_facts",
                div {
                    dt { {c.t("common.partnerSince")} }
                    dd { "{partner.since}" }
                }
                if let Some(director) = partner.director.as_deref() {
                    div {
                        dt { {c.t("common.director")} }
                        dd { "{director}" }
                    }
                }
                if let Some(location) = partner.location.as_deref() {
                    div {
                        dt { {c.t("common.location")} }
                        dd { "{location}" }
                    }
                }
                if let Some(phone) = partner.phone.as_deref() {
                    div {
                        dt { {c.t("common.phone")} }
                        dd { a { href: "tel:{phone}", "{phone}" } }
                    }
                }
                if let Some(email) = partner.contact_email.as_deref() {
                    div {
                        dt { {c.t("common.contactLabel")} }
                        dd { a { href: "mailto:{email}", "{email}" } }
                    }
                }
            }

            if let Some(accreditation) = partner.accreditation.as_deref() {
                section { class: "panel",
                    h2 { {c.t("partners.accreditationHeading")} }
                    p { "{accreditation}" }
                }
            }

            if !partner.services.is_empty() {
                section { class: "panel",
                    h2 { {c.t("common.servicesProvided")} }
                    ul { class: "feature_list",
                        for service in partner.services.iter() {
                            li { key: "{service}", "{service}" }
                        }
                    }
                }
            }

            if !partner.gallery.is_empty() {
                section { class: "panel",
                    h2 { {c.t("common.gallery")} }
                    GalleryStrip { lightbox, alt: partner.name.clone() }
                }
            }

            if let Some(website) = partner.website() {
                a { class: "btn primary", href: "{website}", target: "_blank", rel: "noopener noreferrer",
                    {c.t("common.visitWebsite")}
                }
            }
        }

        LightboxOverlay { lightbox }
    }
}
