use crate::core::bootstrap::{Bootstrap, RenderReport};
use crate::core::loader::{ContentLayout, ContentLoader};
use crate::domain::ports::{ConfigProvider, ContentSource, Storage};
use crate::page::theme::ThemeMode;
use crate::page::{footer, reveal, Page};
use crate::render::Mounts;
use crate::utils::error::Result;

/// Reads the host template, prepares page behaviours, bootstraps the content
/// and writes the finished page. The page is written even when loading
/// fails, so the fallback message is what visitors see.
pub struct SiteBuilder<St: Storage, C: ConfigProvider> {
    storage: St,
    config: C,
    layout: ContentLayout,
    mounts: Mounts,
    theme: Option<ThemeMode>,
    year: Option<i32>,
}

impl<St: Storage, C: ConfigProvider> SiteBuilder<St, C> {
    pub fn new(storage: St, config: C, layout: ContentLayout, mounts: Mounts) -> Self {
        Self {
            storage,
            config,
            layout,
            mounts,
            theme: None,
            year: None,
        }
    }

    /// Bake a stored theme choice into the page.
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Fixed footer year instead of the current one.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    async fn prepare(&self) -> Result<Page> {
        let template = self.storage.read_file(self.config.template_path()).await?;
        let mut page = Page::new(String::from_utf8_lossy(&template).into_owned());

        let year = self.year.unwrap_or_else(footer::current_year);
        footer::stamp_year(&mut page, &self.mounts.year, year)?;
        reveal::settle(&mut page, self.config.reduced_motion())?;
        if let Some(theme) = self.theme {
            theme.apply(&mut page, &self.mounts.theme_toggle)?;
        }
        Ok(page)
    }

    pub async fn build<S: ContentSource>(&self, source: S) -> Result<RenderReport> {
        tracing::info!("Building page from template {}", self.config.template_path());
        let mut page = self.prepare().await?;

        let loader = ContentLoader::new(source, self.layout);
        let mut bootstrap = Bootstrap::new(loader, self.mounts.clone());
        let outcome = bootstrap.run(&mut page).await;

        tracing::debug!("Writing page ({} bytes)", page.as_str().len());
        self.storage
            .write_file(self.config.output_path(), page.as_str().as_bytes())
            .await?;
        tracing::info!("Page written to {}", self.config.output_path());

        outcome
    }
}
