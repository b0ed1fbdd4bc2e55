use content::{load_remote_content, ContentConfig, ContentStore, HttpSource};
use dioxus::prelude::*;

/// Provide `Signal<ContentStore>` to the component tree and hydrate it from the
/// CMS document once after mount.
#[component]
pub fn ContentProvider(children: Element) -> Element {
    let mut store = use_signal(ContentStore::new);
    use_context_provider(|| store);

    // Runs once per mount. The task is owned by this scope and dropped with it.
    use_effect(move || {
        spawn(async move {
            let config = ContentConfig::from_env();
            let source = HttpSource::new(&config);
            let result = load_remote_content(&source, &config).await;
            store.write().apply_remote(result);
        });
    });

    // Keep <html lang dir> in step with the active language.
    use_effect(move || {
        let lang = store.read().language();
        spawn(async move {
            let js = format!(
                r#"(function(){{ try {{ document.documentElement.lang = "{}"; document.documentElement.dir = "{}"; }} catch(e) {{}} return ""; }})()"#,
                lang.code(),
                lang.direction().as_str()
            );
            let _ = document::eval(&js).await;
        });
    });

    rsx! { {children} }
}

pub fn use_content() -> Signal<ContentStore> {
    if let Some(sig) = try_use_context::<Signal<ContentStore>>() {
        return sig;
    }

    // SSR or a mis-ordered provider: serve the bundled defaults instead of panicking.
    tracing::warn!("ui: missing ContentProvider context, using bundled content");
    use_signal(ContentStore::new)
}
