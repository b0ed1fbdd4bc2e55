use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("web: no route for /{}", segments.join("/"));
    rsx! { ui::NotFoundPage {} }
}
