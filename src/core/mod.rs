pub mod bootstrap;
pub mod loader;
pub mod site;

pub use crate::domain::model::Content;
pub use crate::domain::ports::{ConfigProvider, ContentSource, Storage};
pub use crate::utils::error::Result;
