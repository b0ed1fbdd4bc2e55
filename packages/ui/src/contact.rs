use dioxus::prelude::*;

const OFFICE_EMAIL: &str = "info@nebras-bim.com";
const OFFICE_PHONE: &str = "+970 599 250 094";

const SUBJECT_KEYS: [&str; 3] = [
    "contact.subjects.inquiry",
    "contact.subjects.careers",
    "contact.subjects.partnership",
];

/// Builds the `mailto:` link the contact form hands to the mail client.
pub fn mailto_link(to: &str, subject: &str, name: &str, email: &str, message: &str) -> String {
    let body = format!("{message}\n\n{name} <{email}>");
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject.trim()),
        urlencoding::encode(body.trim())
    )
}

#[component]
pub fn ContactPage() -> Element {
    let store = crate::use_content();
    let c = store.read();

    let subjects: Vec<String> = SUBJECT_KEYS.iter().map(|k| c.t(k)).collect();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(|| 0usize);
    let mut message = use_signal(String::new);

    let chosen = subjects.get(subject()).cloned().unwrap_or_default();
    let href = mailto_link(OFFICE_EMAIL, &chosen, &name(), &email(), &message());
    let phone_href = OFFICE_PHONE.replace(' ', "");

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {c.t("contact.title")} }
            }
            p { class: "hint", {c.t("contact.intro")} }

            div { class: "contact_grid",
                section { class: "panel",
                    dl { class: "detail_facts",
                        div {
                            dt { {c.t("contact.info.email")} }
                            dd { a { href: "mailto:{OFFICE_EMAIL}", "{OFFICE_EMAIL}" } }
                        }
                        div {
                            dt { {c.t("contact.info.phone")} }
                            dd { a { href: "tel:{phone_href}", dir: "ltr", "{OFFICE_PHONE}" } }
                        }
                        div {
                            dt { {c.t("contact.info.hq")} }
                            dd { {c.t("contact.info.addressValue")} }
                        }
                    }
                    h2 { {c.t("contact.locationHeading")} }
                }

                form { class: "panel contact_form", onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    label { {c.t("contact.form.name")} }
                    input {
                        value: "{name}",
                        placeholder: c.t("contact.form.namePlaceholder"),
                        oninput: move |e| name.set(e.value()),
                    }
                    label { {c.t("contact.form.email")} }
                    input {
                        r#type: "email",
                        value: "{email}",
                        placeholder: c.t("contact.form.emailPlaceholder"),
                        oninput: move |e| email.set(e.value()),
                    }
                    label { {c.t("contact.form.subject")} }
                    select {
                        onchange: move |e| subject.set(e.value().parse().unwrap_or(0)),
                        for (i, label) in subjects.iter().enumerate() {
                            option { key: "{i}", value: "{i}", selected: i == subject(), "{label}" }
                        }
                    }
                    label { {c.t("contact.form.message")} }
                    textarea {
                        value: "{message}",
                        placeholder: c.t("contact.form.messagePlaceholder"),
                        rows: 6,
                        oninput: move |e| message.set(e.value()),
                    }
                    a { class: "btn primary", href: "{href}", {c.t("contact.form.submit")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let link = mailto_link(OFFICE_EMAIL, "New Project Inquiry", "Sara", "s@x.io", "A villa & garden");
        assert_eq!(
            link,
            "mailto:info@nebras-bim.com?subject=New%20Project%20Inquiry&body=A%20villa%20%26%20garden%0A%0ASara%20%3Cs%40x.io%3E"
        );
    }

    #[test]
    fn mailto_link_handles_arabic_text() {
        let link = mailto_link(OFFICE_EMAIL, "شراكة", "", "", "");
        assert!(link.starts_with("mailto:info@nebras-bim.com?subject=%D8%B4"));
    }
}
