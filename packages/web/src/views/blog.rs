use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    rsx! { ui::BlogPage {} }
}

#[component]
pub fn BlogPost(id: String) -> Element {
    rsx! { ui::BlogPostPage { id } }
}
