use content::{Lightbox, NavKey};
use dioxus::prelude::*;

const LIGHTBOX_CSS: Asset = asset!("/assets/styling/lightbox.css");

fn set_body_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!(
        r#"(function(){{ try {{ document.body.style.overflow = "{overflow}"; }} catch(e) {{}} return ""; }})()"#
    ));
}

/// Primary image plus thumbnails; each opens the shared lightbox at its position.
#[component]
pub fn GalleryStrip(lightbox: Signal<Lightbox>, alt: String) -> Element {
    let lb = lightbox.read();
    let has_primary = lb.thumbnails().len() < lb.len();
    let primary = if has_primary { lb.images().first().cloned() } else { None };
    let thumbnails = lb.thumbnails().to_vec();
    drop(lb);

    rsx! {
        document::Link { rel: "stylesheet", href: LIGHTBOX_CSS }
        div { class: "gallery_strip",
            if let Some(src) = primary {
                img {
                    class: "gallery_primary",
                    src: "{src}",
                    alt: "{alt}",
                    onclick: move |_| lightbox.write().open_primary(),
                }
            }
            if !thumbnails.is_empty() {
                div { class: "gallery_thumbs",
                    for (k, src) in thumbnails.into_iter().enumerate() {
                        img {
                            key: "{k}",
                            class: "gallery_thumb",
                            src: "{src}",
                            alt: "{alt}",
                            loading: "lazy",
                            onclick: move |_| lightbox.write().open_thumbnail(k),
                        }
                    }
                }
            }
        }
    }
}

/// Full-screen viewer for the open image of `lightbox`. Renders nothing while closed.
///
/// Owns `body` scrolling for the page: locked while an image is open, or while
/// `keep_locked` is set by a surrounding modal.
#[component]
pub fn LightboxOverlay(lightbox: Signal<Lightbox>, #[props(default)] keep_locked: bool) -> Element {
    let store = crate::use_content();
    let mut touch_start = use_signal(|| None::<f64>);

    use_effect(use_reactive((&keep_locked,), move |(keep_locked,)| {
        set_body_scroll_locked(keep_locked || lightbox.read().locks_scroll());
    }));
    use_drop(|| set_body_scroll_locked(false));

    let direction = store.read().direction();
    let close_label = store.read().t("common.close");

    let lb = lightbox.read();
    let Some(src) = lb.current_image().map(str::to_string) else {
        return rsx! {};
    };
    let (position, total) = lb.position().unwrap_or((1, 1));
    drop(lb);

    rsx! {
        document::Link { rel: "stylesheet", href: LIGHTBOX_CSS }
        div {
            class: "lightbox",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| lightbox.write().close(),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = NavKey::from_name(&evt.key().to_string()) {
                    evt.prevent_default();
                    lightbox.write().handle_key(key, direction);
                }
            },
            ontouchstart: move |evt: TouchEvent| {
                let x = evt.touches_changed().first().map(|t| t.client_coordinates().x);
                touch_start.set(x);
            },
            ontouchend: move |evt: TouchEvent| {
                let end = evt.touches_changed().first().map(|t| t.client_coordinates().x);
                if let (Some(start), Some(end)) = (touch_start.take(), end) {
                    lightbox.write().handle_swipe(end - start, direction);
                }
            },

            button {
                class: "lightbox_close",
                r#type: "button",
                "aria-label": "{close_label}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    lightbox.write().close();
                },
                "×"
            }
            if total > 1 {
                button {
                    class: "lightbox_nav prev",
                    r#type: "button",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        lightbox.write().prev();
                    },
                    "‹"
                }
            }
            img {
                class: "lightbox_image",
                src: "{src}",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }
            if total > 1 {
                button {
                    class: "lightbox_nav next",
                    r#type: "button",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        lightbox.write().next();
                    },
                    "›"
                }
            }
            span { class: "lightbox_counter", "{position} / {total}" }
        }
    }
}
