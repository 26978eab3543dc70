pub mod cli;
pub mod fetch;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use cli::{handle_command, NewsArgs, NewsCommands};
pub use fetch::{Fetcher, HttpFetcher, MemoryFetcher};
pub use manager::NewsAggregator;
pub use scrapers::{Roster, SiteScraper};

pub mod prelude {
    pub use super::fetch::Fetcher;
    pub use super::manager::NewsAggregator;
    pub use folio_core::{Article, Category, Error, NewsResponse, Result};
}
