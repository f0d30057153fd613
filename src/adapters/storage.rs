use crate::domain::ports::{ContentSource, Storage};
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Content documents read from a local directory instead of the network.
#[derive(Debug, Clone)]
pub struct FileSource<S: Storage> {
    storage: S,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage> ContentSource for FileSource<S> {
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value> {
        tracing::debug!("Reading {} from disk", resource);
        let bytes = self.storage.read_file(resource).await.map_err(|e| match e {
            FolioError::IoError(source) => FolioError::Read {
                resource: resource.to_string(),
                source,
            },
            other => other,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| FolioError::Content {
            resource: resource.to_string(),
            source,
        })
    }
}
