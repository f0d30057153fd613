use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Failed to load {resource}: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to load {resource}: server answered {status}")]
    FetchStatus {
        resource: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read {resource}: {source}")]
    Read {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content in {resource}: {source}")]
    Content {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Pattern error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Clipboard write failed: {message}")]
    ClipboardError { message: String },

    #[error("Page already bootstrapped (phase: {phase})")]
    LifecycleError { phase: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Content,
    Configuration,
    System,
    Interaction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Fetch { .. } | FolioError::FetchStatus { .. } | FolioError::Read { .. } => {
                ErrorCategory::Source
            }
            FolioError::Content { .. } | FolioError::SerializationError(_) => {
                ErrorCategory::Content
            }
            FolioError::TomlError(_)
            | FolioError::UrlError(_)
            | FolioError::ConfigError { .. }
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FolioError::IoError(_) | FolioError::RegexError(_) | FolioError::LifecycleError { .. } => {
                ErrorCategory::System
            }
            FolioError::ClipboardError { .. } => ErrorCategory::Interaction,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Interaction => ErrorSeverity::Low,
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Content | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FolioError::Fetch { .. } => "Check the network connection and the source base URL",
            FolioError::FetchStatus { .. } => {
                "Make sure every content document is published at the source location"
            }
            FolioError::Read { .. } => "Check that the data directory holds every content document",
            FolioError::Content { .. } | FolioError::SerializationError(_) => {
                "Validate the JSON content documents"
            }
            FolioError::TomlError(_) => "Check folio.toml for syntax errors",
            FolioError::UrlError(_) => "Use an absolute http(s) URL ending with '/'",
            FolioError::ConfigError { .. }
            | FolioError::InvalidConfigValueError { .. }
            | FolioError::MissingConfigError { .. } => {
                "Review the configuration file and command-line flags"
            }
            FolioError::IoError(_) => "Check that the paths exist and are writable",
            FolioError::RegexError(_) => "Use plain identifiers for mount point ids",
            FolioError::ClipboardError { .. } => "Click the button again",
            FolioError::LifecycleError { .. } => "Create a new bootstrap for every page build",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FolioError::Fetch { resource, .. }
            | FolioError::FetchStatus { resource, .. }
            | FolioError::Read { resource, .. } => {
                format!("Could not download {}", resource)
            }
            FolioError::Content { resource, .. } => format!("{} is not valid content", resource),
            FolioError::ClipboardError { .. } => "Copy failed".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
