use super::html::{chip_stack, icon, Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::{Content, NamedLink};
use crate::page::clipboard::CopyEmailControl;
use crate::utils::email::assemble_email;

pub const COPY_LABEL: &str = "Copy Email";
const MAIL_LABEL: &str = "Email Me";
const CV_LABEL: &str = "Download CV";

pub struct HeroSection;

fn cv_button(path: &str, size: Option<&str>) -> Markup {
    let label = match size.map(str::trim).filter(|s| !s.is_empty()) {
        Some(size) => format!(" {} ({})", CV_LABEL, size),
        None => format!(" {}", CV_LABEL),
    };
    Element::new("a")
        .class("btn primary")
        .external(path)
        .child(icon("download"))
        .text(label)
        .render()
}

fn copy_button(email: &str) -> Markup {
    Element::new("button")
        .class("btn js-copy-email")
        .attr("type", "button")
        .attr("data-copy-text", email)
        .child(icon("mail"))
        .text(format!(" {}", COPY_LABEL))
        .render()
}

fn mail_link(email: &str) -> Markup {
    Element::new("a")
        .class("btn")
        .attr("href", format!("mailto:{}", email))
        .child(icon("mail"))
        .text(format!(" {}", MAIL_LABEL))
        .render()
}

fn profile_link(link: &NamedLink) -> Markup {
    Element::new("a")
        .class("link")
        .external(&link.url)
        .child(icon(link.icon.as_deref().unwrap_or_default()))
        .text(format!(" {}", link.label))
        .render()
}

impl Section for HeroSection {
    fn key(&self) -> SectionKey {
        SectionKey::Hero
    }

    fn render(&self, content: &Content) -> Fragment {
        let intro = &content.intro;
        // intro 沒有 email 時退回 contact 的
        let email = assemble_email(intro.email.as_ref().or(content.contact.email.as_ref()));

        let mut buttons = Vec::new();
        if let Some(path) = intro.cv_path.as_deref().filter(|p| !p.trim().is_empty()) {
            buttons.push(cv_button(path, intro.cv_size.as_deref()));
        }
        let mut controls = Vec::new();
        if !email.is_empty() {
            buttons.push(copy_button(&email));
            buttons.push(mail_link(&email));
            controls.push(CopyEmailControl::new(SectionKey::Hero, email.as_str(), COPY_LABEL));
        }

        let mut markup = Markup::empty();
        if !intro.headline.is_empty() {
            markup.push(Element::new("h1").text(&intro.headline).render());
        }
        if let Some(subtitle) = &intro.subtitle {
            markup.push(Element::new("p").class("tagline muted").text(subtitle).render());
        }
        if let Some(summary) = &intro.summary {
            markup.push(Element::new("p").class("lead hero-lead").text(summary).render());
        }
        if !buttons.is_empty() {
            markup.push(Element::new("div").class("row mt-20").children(buttons).render());
        }
        markup.push(chip_stack(&intro.chips, "stack hero-chips"));
        if !intro.links.is_empty() {
            markup.push(
                Element::new("div")
                    .class("row hero-links")
                    .children(intro.links.iter().map(profile_link))
                    .render(),
            );
        }

        Fragment { markup, controls }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Intro, ObfuscatedEmail};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    fn email() -> ObfuscatedEmail {
        ObfuscatedEmail {
            local_b64: Some(STANDARD.encode("jane")),
            domain_b64: Some(STANDARD.encode("example.org")),
        }
    }

    #[test]
    fn test_full_hero() {
        let content = Content {
            intro: Intro {
                headline: "Jane <Doe>".to_string(),
                subtitle: Some("Platform engineer".to_string()),
                summary: Some("Builds things & ships them".to_string()),
                cv_path: Some("/assets/cv.pdf".to_string()),
                cv_size: Some("120 KB".to_string()),
                email: Some(email()),
                chips: vec!["Rust".to_string(), "K8s".to_string()],
                links: vec![NamedLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.example/jane".to_string(),
                    icon: Some("linkedin".to_string()),
                }],
            },
            ..Default::default()
        };

        let fragment = HeroSection.render(&content);
        let html = fragment.markup.as_str();

        assert!(html.starts_with("<h1>Jane &lt;Doe&gt;</h1>"));
        assert!(html.contains("<p class=\"tagline muted\">Platform engineer</p>"));
        assert!(html.contains("Builds things &amp; ships them"));
        assert!(html.contains("Download CV (120 KB)"));
        assert!(html.contains("href=\"mailto:jane@example.org\""));
        assert!(html.contains("js-copy-email"));
        assert!(html.contains("<span class=\"chip\">K8s</span>"));
        assert!(html.contains("rel=\"noopener noreferrer\""));

        assert_eq!(fragment.controls.len(), 1);
        assert_eq!(fragment.controls[0].email(), "jane@example.org");
        assert_eq!(fragment.controls[0].label(), COPY_LABEL);
    }

    #[test]
    fn test_no_mail_affordances_without_email() {
        let content = Content {
            intro: Intro {
                headline: "Jane".to_string(),
                email: Some(ObfuscatedEmail {
                    local_b64: Some(STANDARD.encode("jane")),
                    domain_b64: None,
                }),
                ..Default::default()
            },
            ..Default::default()
        };

        let fragment = HeroSection.render(&content);
        let html = fragment.markup.as_str();

        assert!(!html.contains("mailto:"));
        assert!(!html.contains("js-copy-email"));
        assert!(fragment.controls.is_empty());
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
    }

    #[test]
    fn test_email_falls_back_to_contact() {
        let mut content = Content::default();
        content.contact.email = Some(email());

        let fragment = HeroSection.render(&content);
        assert!(fragment.markup.as_str().contains("mailto:jane@example.org"));
    }
}
