use crate::core::loader::ContentLayout;
use crate::core::ConfigProvider;
use crate::render::Mounts;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

/// `folio.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub source: SourceConfig,
    pub page: PageConfig,
    pub theme: ThemeConfig,
    pub mounts: Mounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Remote directory holding the JSON documents.
    pub base_url: Option<String>,
    /// Local directory holding the JSON documents.
    pub data_dir: Option<String>,
    pub layout: ContentLayout,
    pub cache_bust: bool,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_dir: None,
            layout: ContentLayout::default(),
            cache_bust: true,
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub template: String,
    pub output: String,
    pub reduced_motion: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            template: "index.template.html".to_string(),
            output: "dist/index.html".to_string(),
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// JSON settings file holding the `theme` key.
    pub store: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${CONTENT_URL})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        match (&self.source.base_url, &self.source.data_dir) {
            (Some(url), None) => validation::validate_url("source.base_url", url)?,
            (None, Some(dir)) => validation::validate_path("source.data_dir", dir)?,
            (Some(_), Some(_)) => {
                return Err(FolioError::ConfigError {
                    message: "Set either source.base_url or source.data_dir, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(FolioError::MissingConfigError {
                    field: "source.base_url or source.data_dir".to_string(),
                })
            }
        }

        validation::validate_positive_number(
            "source.timeout_seconds",
            self.source.timeout_seconds as usize,
            1,
        )?;
        validation::validate_path("page.template", &self.page.template)?;
        validation::validate_path("page.output", &self.page.output)?;
        if let Some(store) = &self.theme.store {
            validation::validate_path("theme.store", store)?;
        }
        self.mounts.validate()
    }
}

impl ConfigProvider for SiteConfig {
    fn base_url(&self) -> Option<&str> {
        self.source.base_url.as_deref()
    }

    fn data_dir(&self) -> Option<&str> {
        self.source.data_dir.as_deref()
    }

    fn template_path(&self) -> &str {
        &self.page.template
    }

    fn output_path(&self) -> &str {
        &self.page.output
    }

    fn cache_bust(&self) -> bool {
        self.source.cache_bust
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn reduced_motion(&self) -> bool {
        self.page.reduced_motion
    }

    fn theme_store(&self) -> Option<&str> {
        self.theme.store.as_deref()
    }
}
