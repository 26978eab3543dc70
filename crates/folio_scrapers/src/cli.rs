use chrono::Utc;
use clap::{Args, Subcommand};
use folio_core::{Article, Category, Result};

use crate::manager::NewsAggregator;
use crate::scrapers::Roster;

#[derive(Args, Debug, Clone)]
pub struct NewsArgs {
    #[command(subcommand)]
    pub command: NewsCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NewsCommands {
    /// List the sites polled for each category
    List,
    /// Fetch headlines once and print them
    Fetch {
        /// Only fetch this category. Both are fetched concurrently when omitted.
        #[arg(value_enum)]
        category: Option<Category>,
        /// Print the same JSON the `/api/news` endpoint returns
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_command(args: NewsArgs, aggregator: &NewsAggregator) -> Result<()> {
    match args.command {
        NewsCommands::List => {
            print!("{}", render_roster(aggregator.roster()));
        }
        NewsCommands::Fetch { category: None, json } => {
            let news = aggregator.get_news().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&news)?);
            } else {
                for category in Category::ALL {
                    print!("{}", render_articles(category, news.get(category)));
                }
            }
        }
        NewsCommands::Fetch { category: Some(category), json } => {
            let articles = aggregator.fetch_category(category, Utc::now().date_naive()).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                print!("{}", render_articles(category, &articles));
            }
        }
    }
    Ok(())
}

fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(&format!("{}:\n", category));
        for site in roster.sites(category) {
            out.push_str(&format!(
                "  {} - {} `{}` x{}\n",
                site.source, site.url, site.selector, site.take
            ));
        }
    }
    out
}

fn render_articles(category: Category, articles: &[Article]) -> String {
    let mut out = format!("📰 {} ({})\n", category, articles.len());
    for article in articles {
        match article.published_at {
            Some(date) => out.push_str(&format!("  - {} [{}, {}]\n", article.title, article.source, date)),
            None => out.push_str(&format!("  - {} [{}]\n", article.title, article.source)),
        }
        out.push_str(&format!("    {}\n", article.url));
    }
    out
}
