use super::html::{bullet_list, chip_stack, Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::{Content, ExperienceItem};
use crate::utils::dates::format_range;

pub struct ExperienceSection;

fn job_card(job: &ExperienceItem) -> Markup {
    let title = match job.company.as_deref().filter(|c| !c.is_empty()) {
        Some(company) => format!("{} - {}", job.role, company),
        None => job.role.clone(),
    };

    let mut meta = format_range(job.start.as_deref(), job.end.as_deref());
    if let Some(location) = job.location.as_deref().filter(|l| !l.is_empty()) {
        meta.push_str(" · ");
        meta.push_str(location);
    }

    Element::new("article")
        .class("card")
        .child(Element::new("h3").text(title).render())
        .child(Element::new("p").class("muted").text(meta).render())
        .child(Markup::concat(
            job.summary
                .as_deref()
                .map(|s| Element::new("p").text(s).render()),
        ))
        .child(bullet_list(&job.highlights))
        .child(chip_stack(&job.tags, "stack"))
        .render()
}

impl Section for ExperienceSection {
    fn key(&self) -> SectionKey {
        SectionKey::Experience
    }

    /// One card per job, in the order given.
    fn render(&self, content: &Content) -> Fragment {
        Fragment::markup(Markup::concat(content.experience.iter().map(job_card)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(role: &str, company: &str) -> ExperienceItem {
        ExperienceItem {
            role: role.to_string(),
            company: Some(company.to_string()),
            start: Some("2021-04".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_two_items_two_articles_in_order() {
        let content = Content {
            experience: vec![job("Lead <Dev>", "Acme & Co"), job("Engineer", "Initech")],
            ..Default::default()
        };

        let html = ExperienceSection.render(&content).markup.into_string();

        assert_eq!(html.matches("<article class=\"card\">").count(), 2);
        let first = html.find("Lead &lt;Dev&gt; - Acme &amp; Co").unwrap();
        let second = html.find("Engineer - Initech").unwrap();
        assert!(first < second);
        assert!(html.contains("Apr 2021 – Present"));
    }

    #[test]
    fn test_optional_parts_omitted() {
        let content = Content {
            experience: vec![ExperienceItem {
                role: "Consultant".to_string(),
                start: Some("2019-01".to_string()),
                end: Some("2020-06".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let html = ExperienceSection.render(&content).markup.into_string();

        assert_eq!(
            html,
            "<article class=\"card\"><h3>Consultant</h3>\
             <p class=\"muted\">Jan 2019 – Jun 2020</p></article>"
        );
    }

    #[test]
    fn test_full_item() {
        let content = Content {
            experience: vec![ExperienceItem {
                role: "SRE".to_string(),
                location: Some("Remote".to_string()),
                summary: Some("Kept the lights on".to_string()),
                highlights: vec!["Cut p99 by 40%".to_string()],
                tags: vec!["Go".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };

        let html = ExperienceSection.render(&content).markup.into_string();
        assert!(html.contains("Present – Present · Remote"));
        assert!(html.contains("<p>Kept the lights on</p>"));
        assert!(html.contains("<ul><li>Cut p99 by 40%</li></ul>"));
        assert!(html.contains("<div class=\"stack\"><span class=\"chip\">Go</span></div>"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(ExperienceSection.render(&Content::default()).markup.is_empty());
    }
}
