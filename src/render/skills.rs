use super::html::{Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::Content;

pub struct SkillsSection;

impl Section for SkillsSection {
    fn key(&self) -> SectionKey {
        SectionKey::Skills
    }

    /// One card per group, in document key order.
    fn render(&self, content: &Content) -> Fragment {
        let cards = content.skills.iter().map(|(group, skills)| {
            Element::new("div")
                .class("card")
                .child(Element::new("h3").text(group).render())
                .child(
                    Element::new("ul")
                        .children(skills.iter().map(|s| Element::new("li").text(s).render()))
                        .render(),
                )
                .render()
        });
        Fragment::markup(Markup::concat(cards))
    }
}
