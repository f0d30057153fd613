use crate::config::toml_config::SiteConfig;
use crate::core::loader::ContentLayout;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Render a static portfolio page from JSON content")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load content and write the rendered page
    Render(RenderArgs),
    /// Show or flip the stored theme
    Theme(ThemeArgs),
    /// Print the assembled contact address
    Email(SourceArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Path to folio.toml
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL the JSON documents are published under
    #[arg(long, conflicts_with = "data_dir")]
    pub base_url: Option<String>,

    /// Local directory holding the JSON documents
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long, value_enum)]
    pub layout: Option<ContentLayout>,

    /// Do not append the cache-busting timestamp
    #[arg(long)]
    pub no_cache_bust: bool,
}

impl SourceArgs {
    /// File configuration (if any) with command-line values on top.
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        if let Some(url) = &self.base_url {
            config.source.base_url = Some(url.clone());
            config.source.data_dir = None;
        }
        if let Some(dir) = &self.data_dir {
            config.source.data_dir = Some(dir.clone());
            config.source.base_url = None;
        }
        if let Some(layout) = self.layout {
            config.source.layout = layout;
        }
        if self.no_cache_bust {
            config.source.cache_bust = false;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Host HTML page containing the mount points
    #[arg(long)]
    pub template: Option<String>,

    /// Where to write the rendered page
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show reveal-on-scroll elements immediately
    #[arg(long)]
    pub reduced_motion: bool,

    /// Settings file holding the saved theme
    #[arg(long)]
    pub theme_store: Option<String>,
}

impl RenderArgs {
    pub fn resolve(&self) -> Result<SiteConfig> {
        let mut config = self.source.resolve()?;
        if let Some(template) = &self.template {
            config.page.template = template.clone();
        }
        if let Some(output) = &self.output {
            config.page.output = output.clone();
        }
        if self.reduced_motion {
            config.page.reduced_motion = true;
        }
        if let Some(store) = &self.theme_store {
            config.theme.store = Some(store.clone());
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Settings file holding the saved theme
    #[arg(long, default_value = ".folio/settings.json")]
    pub store: String,

    #[command(subcommand)]
    pub action: ThemeAction,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ThemeAction {
    Show,
    Toggle,
}
