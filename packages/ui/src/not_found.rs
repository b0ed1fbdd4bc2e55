use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    let store = crate::use_content();
    let c = store.read();

    rsx! {
        div { class: "page not_found",
            h1 { {c.t("common.notFoundTitle")} }
            p { class: "hint", {c.t("common.notFoundDesc")} }
            a { class: "btn primary", href: "/", {c.t("common.returnHome")} }
        }
    }
}
