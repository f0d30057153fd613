use super::html::{chip_stack, Element, Markup};
use super::{Fragment, Section, SectionKey};
use crate::domain::model::{Content, ProjectItem};

pub struct ProjectsSection;

/// Display label for a link key; unknown keys are shown as written.
fn link_label(key: &str) -> &str {
    match key {
        "repo" | "code" | "github" => "Code",
        "demo" | "live" => "Live demo",
        "docs" => "Docs",
        other => other,
    }
}

fn project_card(project: &ProjectItem) -> Markup {
    let links = if project.links.is_empty() {
        Markup::empty()
    } else {
        Element::new("div")
            .class("row project-links")
            .children(project.links.iter().filter(|(_, url)| !url.trim().is_empty()).map(
                |(key, url)| {
                    Element::new("a")
                        .class("link")
                        .external(url)
                        .text(link_label(key))
                        .render()
                },
            ))
            .render()
    };

    Element::new("article")
        .class("card")
        .child(Element::new("h3").text(&project.name).render())
        .child(Markup::concat(
            project
                .blurb
                .as_deref()
                .map(|b| Element::new("p").class("muted").text(b).render()),
        ))
        .child(chip_stack(&project.tags, "stack"))
        .child(links)
        .render()
}

impl Section for ProjectsSection {
    fn key(&self) -> SectionKey {
        SectionKey::Projects
    }

    fn render(&self, content: &Content) -> Fragment {
        Fragment::markup(Markup::concat(content.projects.iter().map(project_card)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OrderedMap;

    #[test]
    fn test_project_card() {
        let content = Content {
            projects: vec![ProjectItem {
                name: "folio".to_string(),
                blurb: Some("Static <portfolio>".to_string()),
                tags: vec!["rust".to_string()],
                links: OrderedMap(vec![
                    ("repo".to_string(), "https://git.example/folio".to_string()),
                    ("demo".to_string(), "https://folio.example".to_string()),
                ]),
            }],
            ..Default::default()
        };

        let html = ProjectsSection.render(&content).markup.into_string();

        assert!(html.starts_with("<article class=\"card\"><h3>folio</h3>"));
        assert!(html.contains("<p class=\"muted\">Static &lt;portfolio&gt;</p>"));
        let code = html.find(">Code</a>").unwrap();
        let demo = html.find(">Live demo</a>").unwrap();
        assert!(code < demo);
    }

    #[test]
    fn test_minimal_project() {
        let content = Content {
            projects: vec![ProjectItem {
                name: "tiny".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let html = ProjectsSection.render(&content).markup.into_string();
        assert_eq!(html, "<article class=\"card\"><h3>tiny</h3></article>");
    }
}
