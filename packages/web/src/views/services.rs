use dioxus::prelude::*;

#[component]
pub fn Services() -> Element {
    rsx! { ui::ServicesPage {} }
}
