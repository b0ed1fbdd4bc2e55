use dioxus::prelude::*;

#[component]
pub fn Partners() -> Element {
    rsx! { ui::PartnersPage {} }
}

#[component]
pub fn PartnerDetail(slug: String) -> Element {
    rsx! { ui::PartnerDetailPage { slug } }
}
