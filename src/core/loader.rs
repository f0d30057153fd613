use crate::domain::model::{Content, SkillsDocument};
use crate::domain::ports::ContentSource;
use crate::utils::error::{FolioError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const INTRO: &str = "intro.json";
pub const EXPERIENCE: &str = "experience.json";
pub const PROJECTS: &str = "projects.json";
pub const SKILLS: &str = "skills.json";
pub const CONTACT: &str = "contact.json";
pub const CERTIFICATIONS: &str = "certifications.json";
pub const COMBINED: &str = "content.json";

/// How the content is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ContentLayout {
    /// Six documents fetched side by side.
    #[default]
    Split,
    /// One `content.json` holding all six.
    Combined,
}

fn decode<T: DeserializeOwned + Default>(resource: &str, value: serde_json::Value) -> Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|source| FolioError::Content {
        resource: resource.to_string(),
        source,
    })
}

/// All-or-nothing loader: either every document arrives and decodes, or the
/// first failure is returned and nothing is handed to the renderers.
pub struct ContentLoader<S: ContentSource> {
    source: S,
    layout: ContentLayout,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S, layout: ContentLayout) -> Self {
        Self { source, layout }
    }

    pub async fn load(&self) -> Result<Content> {
        let content = match self.layout {
            ContentLayout::Split => self.load_split().await?,
            ContentLayout::Combined => {
                let value = self.source.fetch(COMBINED).await?;
                decode(COMBINED, value)?
            }
        };

        tracing::info!(
            "Loaded content: {} jobs, {} projects, {} skill groups, {} certifications",
            content.experience.len(),
            content.projects.len(),
            content.skills.len(),
            content.certifications.len()
        );
        Ok(content)
    }

    async fn load_split(&self) -> Result<Content> {
        let (intro, experience, projects, skills, contact, certifications) = tokio::try_join!(
            self.source.fetch(INTRO),
            self.source.fetch(EXPERIENCE),
            self.source.fetch(PROJECTS),
            self.source.fetch(SKILLS),
            self.source.fetch(CONTACT),
            self.source.fetch(CERTIFICATIONS),
        )?;

        Ok(Content {
            intro: decode(INTRO, intro)?,
            experience: decode(EXPERIENCE, experience)?,
            projects: decode(PROJECTS, projects)?,
            skills: decode::<SkillsDocument>(SKILLS, skills)?.0,
            contact: decode(CONTACT, contact)?,
            certifications: decode(CERTIFICATIONS, certifications)?,
        })
    }
}
