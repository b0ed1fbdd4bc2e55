use dioxus::prelude::*;

/// Switches between English and Arabic. Labelled with the language it switches to.
#[component]
pub fn LanguageToggle() -> Element {
    let mut store = crate::use_content();
    let next = store.read().language().other();

    rsx! {
        button {
            class: "lang_toggle",
            r#type: "button",
            lang: next.code(),
            onclick: move |_| store.write().toggle_language(),
            if next == content::Lang::Ar { "العربية" } else { "English" }
        }
    }
}
