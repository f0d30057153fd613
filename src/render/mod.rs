//! Section renderers: pure functions from content to markup.

pub mod certifications;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod html;
pub mod projects;
pub mod skills;

use crate::domain::model::Content;
use crate::page::clipboard::CopyEmailControl;
use crate::utils::error::{FolioError, Result};
use html::Markup;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Hero,
    Experience,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl SectionKey {
    /// Render order used by the bootstrap.
    pub const ORDER: [SectionKey; 6] = [
        SectionKey::Hero,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Skills,
        SectionKey::Certifications,
        SectionKey::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Experience => "experience",
            SectionKey::Projects => "projects",
            SectionKey::Skills => "skills",
            SectionKey::Certifications => "certifications",
            SectionKey::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of one renderer: markup for its mount point plus the interactive
/// controls to attach once the markup is in place.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub markup: Markup,
    pub controls: Vec<CopyEmailControl>,
}

impl Fragment {
    pub fn markup(markup: Markup) -> Self {
        Self {
            markup,
            controls: Vec::new(),
        }
    }
}

pub trait Section: Send + Sync {
    fn key(&self) -> SectionKey;
    fn render(&self, content: &Content) -> Fragment;
}

/// The six renderers in bootstrap order.
pub fn default_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(hero::HeroSection),
        Box::new(experience::ExperienceSection),
        Box::new(projects::ProjectsSection),
        Box::new(skills::SkillsSection),
        Box::new(certifications::CertificationsSection),
        Box::new(contact::ContactSection),
    ]
}

/// Element ids of every mount point in the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mounts {
    pub hero: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
    pub certifications: String,
    pub contact: String,
    pub theme_toggle: String,
    pub year: String,
}

impl Default for Mounts {
    fn default() -> Self {
        Self {
            hero: "hero".to_string(),
            experience: "experienceGrid".to_string(),
            projects: "projectsGrid".to_string(),
            skills: "skillsGrid".to_string(),
            certifications: "certsStack".to_string(),
            contact: "contactButtons".to_string(),
            theme_toggle: "themeToggle".to_string(),
            year: "year".to_string(),
        }
    }
}

impl Mounts {
    pub fn section(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Hero => &self.hero,
            SectionKey::Experience => &self.experience,
            SectionKey::Projects => &self.projects,
            SectionKey::Skills => &self.skills,
            SectionKey::Certifications => &self.certifications,
            SectionKey::Contact => &self.contact,
        }
    }

    fn all(&self) -> [(&'static str, &str); 8] {
        [
            ("mounts.hero", &self.hero),
            ("mounts.experience", &self.experience),
            ("mounts.projects", &self.projects),
            ("mounts.skills", &self.skills),
            ("mounts.certifications", &self.certifications),
            ("mounts.contact", &self.contact),
            ("mounts.theme_toggle", &self.theme_toggle),
            ("mounts.year", &self.year),
        ]
    }

    /// Every id must be a plain identifier and no two owners may share one.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (field, id) in self.all() {
            let plain = !id.is_empty()
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'));
            if !plain {
                return Err(FolioError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: id.to_string(),
                    reason: "Mount ids may only contain letters, digits, '-', '_', ':' and '.'"
                        .to_string(),
                });
            }
            if !seen.insert(id) {
                return Err(FolioError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: id.to_string(),
                    reason: "Mount id already owned by another section".to_string(),
                });
            }
        }
        Ok(())
    }
}
