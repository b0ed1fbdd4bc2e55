use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let store = crate::use_content();
    let c = store.read();

    rsx! {
        footer { class: "site_footer",
            div { class: "footer_inner",
                div {
                    strong { {c.t("footer.brandNameFull")} }
                    p { class: "hint", {c.t("footer.description")} }
                }
                div {
                    h4 { {c.t("footer.officeHeading")} }
                    p { {c.t("footer.address.line1")} }
                    p { {c.t("footer.address.line2")} }
                    p { {c.t("footer.address.line3")} }
                }
            }
            div { class: "footer_legal",
                span { {c.t("footer.rights")} }
                span { {c.t("footer.privacy")} }
                span { {c.t("footer.terms")} }
            }
        }
    }
}
