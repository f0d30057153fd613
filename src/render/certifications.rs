use super::html::{Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::{Certification, Content};
use crate::utils::dates::format_date;

pub struct CertificationsSection;

fn cert_chip(cert: &Certification) -> Markup {
    let issuer = cert.issuer.as_deref().filter(|i| !i.trim().is_empty());
    let date = cert
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format_date(Some(d)));

    let details: Vec<&str> = issuer.into_iter().chain(date.as_deref()).collect();
    let aria = if details.is_empty() {
        cert.label.clone()
    } else {
        format!("{} ({})", cert.label, details.join(", "))
    };

    let mut inner = vec![Element::new("span").class("label").text(&cert.label).render()];
    if let Some(issuer) = issuer {
        inner.push(Element::new("span").class("issuer").text(issuer).render());
    }
    if let Some(date) = &date {
        inner.push(Element::new("span").class("meta").text(date).render());
    }

    // 有 URL 才做成連結，否則是靜態區塊，內容相同
    let element = match cert.link() {
        Some(url) => Element::new("a").external(url),
        None => Element::new("span"),
    };
    element
        .class("chip chip-cert")
        .attr("aria-label", aria)
        .children(inner)
        .render()
}

impl Section for CertificationsSection {
    fn key(&self) -> SectionKey {
        SectionKey::Certifications
    }

    fn render(&self, content: &Content) -> Fragment {
        Fragment::markup(Markup::concat(content.certifications.iter().map(cert_chip)))
    }
}
