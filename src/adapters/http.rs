use crate::domain::ports::ContentSource;
use crate::utils::error::{FolioError, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const CACHE_BUST_PARAM: &str = "_ts";

/// Fetches content documents relative to a base URL, bypassing caches.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
    cache_bust: bool,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration, cache_bust: bool) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // join() 會把最後一段路徑換掉，所以一定要以 '/' 結尾
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FolioError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url,
            cache_bust,
        })
    }

    fn resource_url(&self, resource: &str) -> Result<Url> {
        let mut url = self.base_url.join(resource)?;
        if self.cache_bust {
            let stamp = chrono::Utc::now().timestamp_millis().to_string();
            url.query_pairs_mut().append_pair(CACHE_BUST_PARAM, &stamp);
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<serde_json::Value> {
        let url = self.resource_url(resource)?;
        tracing::debug!("Fetching {} from {}", resource, url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|source| FolioError::Fetch {
                resource: resource.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("{} answered {}", resource, status);
        if !status.is_success() {
            return Err(FolioError::FetchStatus {
                resource: resource.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| FolioError::Fetch {
            resource: resource.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| FolioError::Content {
            resource: resource.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source(server: &MockServer, cache_bust: bool) -> HttpSource {
        HttpSource::new(&server.url("/data"), Duration::from_secs(5), cache_bust).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_no_cache_headers_and_stamp() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/data/skills.json")
                .header("cache-control", "no-cache")
                .header("pragma", "no-cache")
                .query_param_exists(CACHE_BUST_PARAM);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"Languages": ["Rust"]}));
        });

        let value = source(&server, true).fetch("skills.json").await.unwrap();

        api_mock.assert();
        assert_eq!(value["Languages"][0], "Rust");
    }

    #[tokio::test]
    async fn test_fetch_without_cache_bust_has_no_query() {
        let server = MockServer::start();
        let src = source(&server, false);
        let url = src.resource_url("intro.json").unwrap();
        assert_eq!(url.query(), None);
        assert!(url.path().ends_with("/data/intro.json"));
    }

    #[tokio::test]
    async fn test_non_success_status_names_resource() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/data/projects.json");
            then.status(404);
        });

        let err = source(&server, true).fetch("projects.json").await.unwrap_err();

        api_mock.assert();
        match err {
            FolioError::FetchStatus { resource, status } => {
                assert_eq!(resource, "projects.json");
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_content_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data/intro.json");
            then.status(200).body("{not json");
        });

        let err = source(&server, false).fetch("intro.json").await.unwrap_err();
        assert!(matches!(err, FolioError::Content { ref resource, .. } if resource == "intro.json"));
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(HttpSource::new("data/", Duration::from_secs(1), true).is_err());
    }
}
