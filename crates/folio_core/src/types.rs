use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A headline scraped from (or standing in for) an external site.
///
/// Articles live for one aggregation call only; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: source.into(),
            published_at: None,
            description: None,
        }
    }

    pub fn with_published_at(mut self, date: NaiveDate) -> Self {
        self.published_at = Some(date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Legal,
    Tech,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Legal, Category::Tech];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Legal => "legal",
            Category::Tech => "tech",
        }
    }

    /// Whether only the first article per source label is kept.
    pub fn dedup_by_source(&self) -> bool {
        matches!(self, Category::Tech)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One external site and how to pull headlines out of its front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    /// Label attached to every article from this site.
    pub source: String,
    /// Page to fetch. Relative links resolve against its origin.
    pub url: String,
    /// CSS selector for the headline element; the link is its first `<a href>`.
    pub selector: String,
    /// How many matches to take, in document order.
    #[serde(default = "default_take")]
    pub take: usize,
    /// Stamp extracted articles with the date of the call.
    #[serde(default)]
    pub published_at: bool,
}

fn default_take() -> usize {
    1
}

impl SiteDescriptor {
    pub fn new(source: impl Into<String>, url: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
            selector: selector.into(),
            take: default_take(),
            published_at: false,
        }
    }

    pub fn take(mut self, take: usize) -> Self {
        self.take = take;
        self
    }

    pub fn with_published_at(mut self) -> Self {
        self.published_at = true;
        self
    }
}

/// Body of a successful `GET /api/news`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub legal: Vec<Article>,
    pub tech: Vec<Article>,
}

impl NewsResponse {
    pub fn get(&self, category: Category) -> &[Article] {
        match category {
            Category::Legal => &self.legal,
            Category::Tech => &self.tech,
        }
    }
}
