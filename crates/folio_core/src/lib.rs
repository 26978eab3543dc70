pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, DEFAULT_MAX_RESULTS};
pub use error::{Error, Result};
pub use types::{Article, Category, NewsResponse, SiteDescriptor};
