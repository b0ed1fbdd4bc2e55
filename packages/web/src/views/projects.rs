use dioxus::prelude::*;

/// `/projects?project=<id>` opens that project's detail in whichever dataset owns it.
#[component]
pub fn Projects(project: Option<String>) -> Element {
    let project = project.filter(|id| !id.trim().is_empty());
    rsx! { ui::ProjectsPage { project } }
}
