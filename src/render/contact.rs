use super::html::{icon, Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::{ButtonKind, ButtonSpec, Content};
use crate::page::clipboard::CopyEmailControl;
use crate::utils::email::assemble_email;

pub struct ContactSection;

fn button_text(entry: &ButtonSpec, default: &str) -> String {
    format!(" {}", entry.label.as_deref().unwrap_or(default))
}

impl Section for ContactSection {
    fn key(&self) -> SectionKey {
        SectionKey::Contact
    }

    fn render(&self, content: &Content) -> Fragment {
        let contact = &content.contact;
        let email = assemble_email(contact.email.as_ref());
        let mut controls = Vec::new();
        let mut markup = Markup::empty();

        if let Some(cta) = contact.cta.as_deref().filter(|c| !c.is_empty()) {
            markup.push(Element::new("p").class("cta").text(cta).render());
        }

        for entry in contact.active_buttons() {
            let icon_name = entry.icon.as_deref();
            let button = match entry.kind() {
                ButtonKind::CopyEmail if !email.is_empty() => {
                    let label = entry.label.as_deref().unwrap_or("Copy Email");
                    controls.push(CopyEmailControl::new(SectionKey::Contact, email.as_str(), label));
                    Element::new("button")
                        .class("btn js-copy-email")
                        .attr("type", "button")
                        .attr("data-copy-text", email.as_str())
                        .child(icon(icon_name.unwrap_or("mail")))
                        .text(button_text(entry, "Copy Email"))
                        .render()
                }
                ButtonKind::Mailto if !email.is_empty() => Element::new("a")
                    .class("btn")
                    .attr("href", format!("mailto:{}", email))
                    .child(icon(icon_name.unwrap_or("mail")))
                    .text(button_text(entry, "Email Me"))
                    .render(),
                ButtonKind::Link => {
                    let href = entry
                        .href_key
                        .as_deref()
                        .and_then(|key| contact.links.get(key))
                        .map(String::as_str)
                        .filter(|h| !h.trim().is_empty());
                    let anchor = match href {
                        Some(href) => Element::new("a").class("btn").external(href),
                        None => Element::new("a").class("btn").attr("href", "#"),
                    };
                    anchor
                        .child(icon(icon_name.unwrap_or_default()))
                        .text(button_text(entry, "Open"))
                        .render()
                }
                ButtonKind::CopyEmail | ButtonKind::Mailto => {
                    tracing::debug!("Skipping '{}' button: no usable email", entry.identifier());
                    continue;
                }
                ButtonKind::Unknown => {
                    tracing::debug!("Skipping unknown button type '{}'", entry.kind);
                    continue;
                }
            };
            markup.push(button);
        }

        Fragment { markup, controls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ContactConfig;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn contact(json: serde_json::Value) -> Content {
        Content {
            contact: serde_json::from_value::<ContactConfig>(json).unwrap(),
            ..Default::default()
        }
    }

    fn email_json() -> serde_json::Value {
        serde_json::json!({
            "local_b64": STANDARD.encode("hi"),
            "domain_b64": STANDARD.encode("jane.dev")
        })
    }

    #[test]
    fn test_all_button_types() {
        let content = contact(serde_json::json!({
            "cta": "Let's talk",
            "email": email_json(),
            "links": {"linkedin": "https://linkedin.example/jane"},
            "primary_buttons": [
                {"type": "copy-email", "label": "Copy address"},
                {"type": "mailto"},
                {"type": "link", "href_key": "linkedin", "label": "LinkedIn", "icon": "in"},
                {"type": "carrier-pigeon"}
            ]
        }));

        let fragment = ContactSection.render(&content);
        let html = fragment.markup.as_str();

        assert!(html.starts_with("<p class=\"cta\">Let&#39;s talk</p>"));
        assert!(html.contains("data-copy-text=\"hi@jane.dev\""));
        assert!(html.contains(" Copy address</button>"));
        assert!(html.contains("href=\"mailto:hi@jane.dev\""));
        assert!(html.contains(" Email Me</a>"));
        assert!(html.contains("href=\"https://linkedin.example/jane\" target=\"_blank\""));
        assert!(html.contains("<span class=\"icon in\" aria-hidden=\"true\"></span> LinkedIn"));
        assert!(!html.contains("pigeon"));

        assert_eq!(fragment.controls.len(), 1);
        assert_eq!(fragment.controls[0].original_label(), "Copy address");
        assert_eq!(fragment.controls[0].section(), SectionKey::Contact);
    }

    #[test]
    fn test_missing_email_hides_mail_buttons() {
        let content = contact(serde_json::json!({
            "email": {"local_b64": "@@@", "domain_b64": STANDARD.encode("jane.dev")},
            "primary_buttons": [{"type": "copy-email"}, {"type": "mailto"}]
        }));

        let fragment = ContactSection.render(&content);
        assert!(fragment.markup.is_empty());
        assert!(fragment.controls.is_empty());
    }

    #[test]
    fn test_unknown_link_key_falls_back_to_hash() {
        let content = contact(serde_json::json!({
            "primary_buttons": [{"type": "link", "href_key": "github"}]
        }));

        let html = ContactSection.render(&content).markup.into_string();
        assert_eq!(
            html,
            "<a class=\"btn\" href=\"#\"><span class=\"icon\" aria-hidden=\"true\"></span> Open</a>"
        );
    }

    #[test]
    fn test_enabled_list_selects_and_orders() {
        let content = contact(serde_json::json!({
            "email": email_json(),
            "enabled": ["mailto", "copy-email"],
            "primary_buttons": [
                {"type": "copy-email"},
                {"type": "link", "href_key": "x"},
                {"type": "mailto"}
            ]
        }));

        let html = ContactSection.render(&content).markup.into_string();
        assert!(!html.contains("Open"));
        assert!(html.find("mailto:").unwrap() < html.find("js-copy-email").unwrap());
    }
}
