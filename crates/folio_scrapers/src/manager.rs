use chrono::{NaiveDate, Utc};
use folio_core::{Article, Category, Config, Error, NewsResponse, Result, DEFAULT_MAX_RESULTS};
use std::sync::Arc;

use crate::fetch::{Fetcher, HttpFetcher};
use crate::logging::Logger;
use crate::scrapers::{self, Roster, SiteScraper};

/// Builds the legal and tech headline lists from the configured roster.
///
/// Stateless between calls: every call fetches every site again.
#[derive(Clone)]
pub struct NewsAggregator {
    fetcher: Arc<dyn Fetcher>,
    roster: Arc<Roster>,
    max_results: usize,
}

impl NewsAggregator {
    pub fn new(fetcher: Arc<dyn Fetcher>, roster: Roster) -> Self {
        Self {
            fetcher,
            roster: Arc::new(roster),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// HTTP-backed aggregator, reading the roster file if one is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let roster = match &config.roster {
            Some(path) => Roster::load(path)?,
            None => Roster::default(),
        };
        let fetcher = Arc::new(HttpFetcher::new(config)?);
        Ok(Self::new(fetcher, roster).with_max_results(config.max_results))
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Polls each site of `category` in turn.
    ///
    /// Site failures contribute nothing. If nothing at all was extracted the
    /// category's fallback list is used instead. Never fails.
    pub async fn fetch_category(&self, category: Category, date: NaiveDate) -> Vec<Article> {
        let logger = Logger::new().with_prefix(category.name());
        let mut articles: Vec<Article> = Vec::new();

        for site in self.roster.sites(category) {
            let scraper = SiteScraper::new(site.clone()).with_logger(logger.clone());
            for article in scraper.scrape(self.fetcher.as_ref(), date).await {
                if category.dedup_by_source() && articles.iter().any(|a| a.source == article.source) {
                    continue;
                }
                articles.push(article);
            }
        }

        if articles.is_empty() {
            logger.warn("no headlines extracted, using fallback articles");
            articles = scrapers::fallback(category, date);
        } else {
            logger.info(&format!("collected {} article(s)", articles.len()));
        }

        articles.truncate(self.max_results);
        articles
    }

    pub async fn get_news(&self) -> Result<NewsResponse> {
        self.get_news_on(Utc::now().date_naive()).await
    }

    /// Runs both categories concurrently, stamping dated articles with `date`.
    pub async fn get_news_on(&self, date: NaiveDate) -> Result<NewsResponse> {
        let legal = tokio::spawn({
            let this = self.clone();
            async move { this.fetch_category(Category::Legal, date).await }
        });
        let tech = tokio::spawn({
            let this = self.clone();
            async move { this.fetch_category(Category::Tech, date).await }
        });

        let (legal, tech) = tokio::try_join!(legal, tech)
            .map_err(|e| Error::Aggregation(format!("category task failed: {}", e)))?;

        Ok(NewsResponse { legal, tech })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MemoryFetcher;
    use crate::scrapers::{legal, tech};
    use async_trait::async_trait;
    use folio_core::SiteDescriptor;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 2).unwrap()
    }

    fn headline(tag: &str, href: &str, title: &str) -> String {
        format!(r#"<html><body><{tag}><a href="{href}">{title}</a></{tag}></body></html>"#)
    }

    fn roster(legal: Vec<SiteDescriptor>, tech: Vec<SiteDescriptor>) -> Roster {
        Roster { legal, tech }
    }

    #[tokio::test]
    async fn test_failed_site_contributes_nothing() {
        let fetcher = MemoryFetcher::new().with_page("https://sitea.tld/", headline("h2", "/bar", "Foo"));
        let aggregator = NewsAggregator::new(
            Arc::new(fetcher.clone()),
            roster(
                vec![
                    SiteDescriptor::new("SiteA", "https://sitea.tld/", "h2"),
                    SiteDescriptor::new("SiteB", "https://siteb.tld/", "h2"),
                ],
                vec![],
            ),
        );

        let articles = aggregator.fetch_category(Category::Legal, date()).await;
        assert_eq!(articles, vec![Article::new("Foo", "https://sitea.tld/bar", "SiteA")]);
        assert_eq!(
            fetcher.requests().await,
            vec!["https://sitea.tld/".to_string(), "https://siteb.tld/".to_string()]
        );
    }

    #[tokio::test]
    async fn test_all_sites_failing_uses_fallback() {
        let aggregator = NewsAggregator::new(Arc::new(MemoryFetcher::new()), Roster::default());

        let legal_articles = aggregator.fetch_category(Category::Legal, date()).await;
        assert_eq!(legal_articles, legal::fallback(date()));
        assert_eq!(legal_articles[0].title, "AI in Legal Practice: Transforming Document Review and Case Analysis");
        assert_eq!(legal_articles[2].url, "https://www.law360.com/articles/legal-tech-startups");

        let tech_articles = aggregator.fetch_category(Category::Tech, date()).await;
        assert_eq!(tech_articles, tech::fallback(date()));
    }

    #[tokio::test]
    async fn test_legal_results_are_capped() {
        let law360 = r#"
            <div class="article-title"><a href="/articles/1">L1</a></div>
            <div class="article-title"><a href="/articles/2">L2</a></div>
            <div class="article-title"><a href="/articles/3">L3</a></div>
            <div class="article-title"><a href="/articles/4">L4</a></div>
        "#;
        let abc = r#"
            <div class="ContentRoll__Headline"><a href="/Technology/wireStory/a">A1</a></div>
            <div class="ContentRoll__Headline"><a href="https://abcnews.go.com/b">A2</a></div>
            <div class="ContentRoll__Headline"><a href="/c">A3</a></div>
        "#;
        let fetcher = MemoryFetcher::new()
            .with_page("https://www.law360.com/", law360)
            .with_page("https://abcnews.go.com/Technology", abc)
            .with_page("https://www.forbes.com/technology/", headline("h3", "/f", "F1"));
        let aggregator = NewsAggregator::new(Arc::new(fetcher.clone()), Roster::default());

        let articles = aggregator.fetch_category(Category::Legal, date()).await;
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["L1", "L2", "L3", "A1", "A2"]);
        assert_eq!(articles[3].url, "https://abcnews.go.com/Technology/wireStory/a");
        assert_eq!(articles[0].published_at, Some(date()));
        assert_eq!(articles[3].published_at, None);
        // Forbes was still polled even though its article was cut by the cap.
        assert_eq!(fetcher.requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_tech_keeps_first_article_per_source() {
        let fetcher = MemoryFetcher::new()
            .with_page("https://one.tld/", headline("h2", "/1", "First"))
            .with_page("https://two.tld/", headline("h2", "/2", "Second"))
            .with_page("https://three.tld/", headline("h2", "/3", "Third"));
        let aggregator = NewsAggregator::new(
            Arc::new(fetcher),
            roster(
                vec![],
                vec![
                    SiteDescriptor::new("Same", "https://one.tld/", "h2"),
                    SiteDescriptor::new("Same", "https://two.tld/", "h2"),
                    SiteDescriptor::new("Other", "https://three.tld/", "h2"),
                ],
            ),
        );

        let articles = aggregator.fetch_category(Category::Tech, date()).await;
        assert_eq!(
            articles,
            vec![
                Article::new("First", "https://one.tld/1", "Same"),
                Article::new("Third", "https://three.tld/3", "Other"),
            ]
        );
    }

    #[tokio::test]
    async fn test_legal_does_not_dedup_by_source() {
        let fetcher = MemoryFetcher::new()
            .with_page("https://one.tld/", headline("h2", "/1", "First"))
            .with_page("https://two.tld/", headline("h2", "/2", "Second"));
        let aggregator = NewsAggregator::new(
            Arc::new(fetcher),
            roster(
                vec![
                    SiteDescriptor::new("Same", "https://one.tld/", "h2"),
                    SiteDescriptor::new("Same", "https://two.tld/", "h2"),
                ],
                vec![],
            ),
        );

        assert_eq!(aggregator.fetch_category(Category::Legal, date()).await.len(), 2);
    }

    #[tokio::test]
    async fn test_tech_results_are_capped() {
        let mut fetcher = MemoryFetcher::new();
        for site in tech::sites() {
            let page = headline(&site.selector, "/story", &format!("{} story", site.source));
            fetcher = fetcher.with_page(site.url, page);
        }
        let aggregator = NewsAggregator::new(Arc::new(fetcher), Roster::default());

        let articles = aggregator.fetch_category(Category::Tech, date()).await;
        let sources: Vec<_> = articles.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(sources, vec!["Ars Technica", "The Verge", "Wired", "VentureBeat", "TechCrunch"]);
        assert_eq!(articles[4].url, "https://techcrunch.com/story");
        assert_eq!(articles[4].published_at, None);
    }

    #[tokio::test]
    async fn test_custom_max_results() {
        let aggregator =
            NewsAggregator::new(Arc::new(MemoryFetcher::new()), Roster::default()).with_max_results(2);
        assert_eq!(aggregator.fetch_category(Category::Legal, date()).await.len(), 2);
    }

    #[tokio::test]
    async fn test_get_news_runs_both_categories() {
        let fetcher = MemoryFetcher::new().with_page("https://www.wired.com/", headline("h3", "/story/x", "Wired X"));
        let aggregator = NewsAggregator::new(Arc::new(fetcher), Roster::default());

        let news = aggregator.get_news_on(date()).await.unwrap();
        assert_eq!(news.legal, legal::fallback(date()));
        assert_eq!(news.tech, vec![Article::new("Wired X", "https://www.wired.com/story/x", "Wired")]);
    }

    #[tokio::test]
    async fn test_get_news_stamps_today() {
        let aggregator = NewsAggregator::new(Arc::new(MemoryFetcher::new()), Roster::default());

        let before = Utc::now().date_naive();
        let news = aggregator.get_news().await.unwrap();
        let after = Utc::now().date_naive();

        for article in news.legal.iter().chain(&news.tech) {
            let stamped = article.published_at.unwrap();
            assert!(stamped == before || stamped == after);
        }
    }

    struct PanickingFetcher;

    #[async_trait]
    impl Fetcher for PanickingFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            panic!("fetcher bug");
        }
    }

    #[tokio::test]
    async fn test_task_panic_is_an_aggregation_error() {
        let aggregator = NewsAggregator::new(Arc::new(PanickingFetcher), Roster::default());

        let result = aggregator.get_news_on(date()).await;
        assert!(matches!(result, Err(Error::Aggregation(_))));
    }

    #[test]
    fn test_from_config_missing_roster_file() {
        let config = Config {
            roster: Some("/nonexistent/folio-roster.json".into()),
            ..Config::default()
        };
        assert!(matches!(NewsAggregator::from_config(&config), Err(Error::Io(_))));
    }
}
