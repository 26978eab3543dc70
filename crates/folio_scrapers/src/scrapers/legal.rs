use chrono::NaiveDate;
use folio_core::{Article, SiteDescriptor};

pub const LAW360: &str = "Law360";

/// Legal-industry sources, polled in this order.
pub fn sites() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor::new(LAW360, "https://www.law360.com/", ".article-title")
            .take(3)
            .with_published_at(),
        SiteDescriptor::new("ABC News", "https://abcnews.go.com/Technology", ".ContentRoll__Headline").take(2),
        SiteDescriptor::new("Forbes", "https://www.forbes.com/technology/", "h3"),
    ]
}

pub fn fallback(date: NaiveDate) -> Vec<Article> {
    vec![
        Article::new(
            "AI in Legal Practice: Transforming Document Review and Case Analysis",
            "https://www.law360.com/articles/ai-legal-practice",
            LAW360,
        )
        .with_published_at(date)
        .with_description(
            "How artificial intelligence is revolutionizing legal document review and case analysis processes.",
        ),
        Article::new(
            "Cybersecurity Regulations Impacting Law Firms in 2024",
            "https://www.law360.com/articles/cybersecurity-law-firms",
            LAW360,
        )
        .with_published_at(date)
        .with_description("New cybersecurity requirements and their implications for legal practice."),
        Article::new(
            "Legal Tech Startups: Innovation in the Legal Industry",
            "https://www.law360.com/articles/legal-tech-startups",
            LAW360,
        )
        .with_published_at(date)
        .with_description(
            "Emerging legal technology companies and their impact on traditional legal services.",
        ),
    ]
}
