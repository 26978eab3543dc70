use clap::Parser;
use folio_core::{Config, Result, DEFAULT_MAX_RESULTS};
use folio_scrapers::cli::{handle_command, NewsArgs, NewsCommands};
use folio_scrapers::logging::init_logging;
use folio_scrapers::NewsAggregator;
use folio_web::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number counts as seconds
        if !current_number.is_empty() {
            total_seconds += current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            has_unit = true;
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Legal and tech headline aggregator", long_about = None)]
struct Cli {
    /// Maximum articles returned per category
    #[arg(long, global = true, env = "FOLIO_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,
    /// User-Agent sent to news sites
    #[arg(long, global = true, env = "FOLIO_USER_AGENT")]
    user_agent: Option<String>,
    /// Per-request timeout (e.g. 10s, 1m30s). No timeout when omitted.
    #[arg(long, global = true, env = "FOLIO_TIMEOUT")]
    timeout: Option<HumanDuration>,
    /// JSON file replacing the built-in site roster
    #[arg(long, global = true, env = "FOLIO_ROSTER")]
    roster: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            max_results: self.max_results,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: self.timeout.as_ref().map(|t| t.0),
            roster: self.roster.clone(),
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the news API
    Serve {
        #[arg(long, env = "FOLIO_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Inspect the roster or fetch headlines once
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    let aggregator = NewsAggregator::from_config(&config)?;
    let roster = aggregator.roster();
    info!(
        "🦗 Roster loaded: {} legal and {} tech site(s)",
        roster.legal.len(),
        roster.tech.len()
    );

    match cli.command {
        Commands::Serve { addr } => folio_web::serve(addr, AppState::new(aggregator)).await?,
        Commands::News { command } => handle_command(NewsArgs { command }, &aggregator).await?,
    }

    Ok(())
}
