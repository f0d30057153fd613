use crate::core::loader::ContentLoader;
use crate::domain::ports::ContentSource;
use crate::page::clipboard::CopyEmailControl;
use crate::page::Page;
use crate::render::html::Markup;
use crate::render::{default_sections, Mounts, Section, SectionKey};
use crate::utils::error::{FolioError, Result};
use std::fmt;

/// Shown in the hero mount when content cannot be loaded.
pub const FALLBACK_MESSAGE: &str =
    "<p class=\"muted load-error\">Sorry, the portfolio content could not be loaded. Please try again later.</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Rendered => "rendered",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// What a successful run put on the page.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Sections whose mount point was present and filled.
    pub mounted: Vec<SectionKey>,
    /// Copy-email controls, attached after their markup was inserted.
    pub controls: Vec<CopyEmailControl>,
}

/// `Idle → Loading → Rendered | Failed`, one run per instance.
pub struct Bootstrap<S: ContentSource> {
    loader: ContentLoader<S>,
    sections: Vec<Box<dyn Section>>,
    mounts: Mounts,
    phase: Phase,
}

impl<S: ContentSource> Bootstrap<S> {
    pub fn new(loader: ContentLoader<S>, mounts: Mounts) -> Self {
        Self {
            loader,
            sections: default_sections(),
            mounts,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub async fn run(&mut self, page: &mut Page) -> Result<RenderReport> {
        if self.phase != Phase::Idle {
            return Err(FolioError::LifecycleError {
                phase: self.phase.to_string(),
            });
        }

        self.phase = Phase::Loading;
        tracing::debug!("Bootstrap phase: {}", self.phase);

        let content = match self.loader.load().await {
            Ok(content) => content,
            Err(e) => {
                self.phase = Phase::Failed;
                tracing::error!("❌ Content load failed: {}", e);
                // 只動 hero，其他 mount 保持原樣
                if !page.replace_inner(&self.mounts.hero, &Markup::trusted(FALLBACK_MESSAGE))? {
                    tracing::warn!("No hero mount '{}' for the failure message", self.mounts.hero);
                }
                return Err(e);
            }
        };

        let mut report = RenderReport::default();
        for section in &self.sections {
            let key = section.key();
            let mount = self.mounts.section(key);
            let fragment = section.render(&content);

            if page.replace_inner(mount, &fragment.markup)? {
                tracing::debug!("Rendered {} into #{}", key, mount);
                report.mounted.push(key);
                report.controls.extend(fragment.controls);
            } else {
                tracing::debug!("No mount point #{} for {}, skipping", mount, key);
            }
        }

        self.phase = Phase::Rendered;
        tracing::info!("Rendered {} of {} sections", report.mounted.len(), self.sections.len());
        Ok(report)
    }
}
