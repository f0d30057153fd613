use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where content documents come from (HTTP, a local directory, a test double).
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one JSON document by resource name, e.g. `experience.json`.
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value>;
}

/// Single-key persistent settings, the equivalent of browser local storage.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> Option<&str>;
    fn data_dir(&self) -> Option<&str>;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn cache_bust(&self) -> bool;
    fn timeout_seconds(&self) -> u64;
    fn reduced_motion(&self) -> bool;
    fn theme_store(&self) -> Option<&str>;
}
