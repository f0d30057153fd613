// Adapters layer: concrete implementations of the domain ports (http, files, settings).

pub mod http;
pub mod settings;
pub mod storage;

use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use http::HttpSource;
use std::time::Duration;
use storage::{FileSource, LocalStorage};

/// Source picked from configuration: remote base URL or local data directory.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Http(HttpSource),
    Files(FileSource<LocalStorage>),
}

impl ConfiguredSource {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        match (config.base_url(), config.data_dir()) {
            (Some(base_url), _) => {
                tracing::info!("Loading content from {}", base_url);
                Ok(Self::Http(HttpSource::new(
                    base_url,
                    Duration::from_secs(config.timeout_seconds()),
                    config.cache_bust(),
                )?))
            }
            (None, Some(dir)) => {
                tracing::info!("Loading content from directory {}", dir);
                Ok(Self::Files(FileSource::new(LocalStorage::new(dir.to_string()))))
            }
            (None, None) => Err(FolioError::MissingConfigError {
                field: "source.base_url or source.data_dir".to_string(),
            }),
        }
    }
}

#[async_trait]
impl ContentSource for ConfiguredSource {
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value> {
        match self {
            Self::Http(source) => source.fetch(resource).await,
            Self::Files(source) => source.fetch(resource).await,
        }
    }
}
