pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{settings::FileStore, storage::LocalStorage, ConfiguredSource};
pub use core::{bootstrap::Bootstrap, loader::ContentLoader, site::SiteBuilder};
pub use page::Page;
pub use utils::error::{FolioError, Result};
