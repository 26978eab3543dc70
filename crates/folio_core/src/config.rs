use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Runtime settings shared by the server and the one-shot CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cap applied to each category after fallback substitution.
    pub max_results: usize,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves hang behavior to the HTTP client.
    pub timeout: Option<Duration>,
    /// JSON roster replacing the built-in site lists.
    pub roster: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            roster: None,
        }
    }
}
