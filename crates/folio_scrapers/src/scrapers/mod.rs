use chrono::NaiveDate;
use folio_core::{Article, Category, Error, Result, SiteDescriptor};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::fetch::Fetcher;
use crate::logging::Logger;

pub mod legal;
pub mod tech;

/// Extracts headlines from one site's front page.
#[derive(Debug, Clone)]
pub struct SiteScraper {
    site: SiteDescriptor,
    logger: Logger,
}

impl SiteScraper {
    pub fn new(site: SiteDescriptor) -> Self {
        let logger = Logger::new().with_prefix(&site.source);
        Self { site, logger }
    }

    /// Nests this scraper's messages under `logger`'s prefixes.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.with_prefix(&self.site.source);
        self
    }

    pub fn source(&self) -> &str {
        &self.site.source
    }

    pub fn site(&self) -> &SiteDescriptor {
        &self.site
    }

    /// Pulls up to `take` articles out of `html`.
    ///
    /// Matches without a title or a link are skipped. A selector that matches
    /// nothing at all is an error, so markup drift shows up in the logs.
    pub fn extract(&self, html: &str, date: NaiveDate) -> Result<Vec<Article>> {
        let selector = utils::parse_selector(&self.site.selector)?;
        let anchor = utils::parse_selector("a")?;
        let origin = utils::origin(&self.site.url)?;
        let document = Html::parse_document(html);

        let matches: Vec<_> = document.select(&selector).take(self.site.take).collect();
        if matches.is_empty() {
            return Err(Error::Scraping(format!(
                "no element matched selector `{}`",
                self.site.selector
            )));
        }

        let articles = matches
            .into_iter()
            .filter_map(|element| {
                let title = element.text().collect::<String>().trim().to_string();
                let href = element
                    .select(&anchor)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(str::trim)
                    .unwrap_or_default();
                if title.is_empty() || href.is_empty() {
                    return None;
                }
                let article = Article::new(title, utils::absolutize(href, &origin), &self.site.source);
                Some(if self.site.published_at {
                    article.with_published_at(date)
                } else {
                    article
                })
            })
            .collect();

        Ok(articles)
    }

    /// Fetches and extracts, absorbing every failure into an empty result.
    pub async fn scrape(&self, fetcher: &dyn Fetcher, date: NaiveDate) -> Vec<Article> {
        let html = match fetcher.fetch(&self.site.url).await {
            Ok(html) => html,
            Err(e) => {
                self.logger.error(&format!("failed to fetch {}: {}", self.site.url, e));
                return Vec::new();
            }
        };

        match self.extract(&html, date) {
            Ok(articles) => {
                self.logger.debug(&format!("extracted {} article(s)", articles.len()));
                articles
            }
            Err(e) => {
                self.logger.error(&format!("failed to extract from {}: {}", self.site.url, e));
                Vec::new()
            }
        }
    }
}

/// The sites polled for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub legal: Vec<SiteDescriptor>,
    #[serde(default)]
    pub tech: Vec<SiteDescriptor>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            legal: legal::sites(),
            tech: tech::sites(),
        }
    }
}

impl Roster {
    pub fn sites(&self, category: Category) -> &[SiteDescriptor] {
        match category {
            Category::Legal => &self.legal,
            Category::Tech => &self.tech,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<()> {
        for site in self.legal.iter().chain(&self.tech) {
            if site.take == 0 {
                return Err(Error::Config(format!("{}: take must be at least 1", site.source)));
            }
            utils::origin(&site.url).map_err(|e| Error::Config(format!("{}: {}", site.source, e)))?;
            utils::parse_selector(&site.selector)
                .map_err(|e| Error::Config(format!("{}: {}", site.source, e)))?;
        }
        Ok(())
    }
}

/// Placeholder articles used when a category extracts nothing.
pub fn fallback(category: Category, date: NaiveDate) -> Vec<Article> {
    match category {
        Category::Legal => legal::fallback(date),
        Category::Tech => tech::fallback(date),
    }
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use super::*;
    use url::Url;

    pub fn parse_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Scraping(format!("Invalid selector `{}`: {}", selector, e)))
    }

    /// `scheme://host[:port]` of `url`.
    pub fn origin(url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))?;
        let origin = parsed.origin();
        if !origin.is_tuple() {
            return Err(Error::InvalidUrl(format!("{}: no host origin", url)));
        }
        Ok(origin.ascii_serialization())
    }

    pub fn absolutize(href: &str, origin: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", origin, href)
        } else {
            format!("{}/{}", origin, href)
        }
    }
}
