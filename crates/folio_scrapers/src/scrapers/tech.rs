use chrono::NaiveDate;
use folio_core::{Article, SiteDescriptor};

pub const TECHCRUNCH: &str = "TechCrunch";

/// Technology sources. Only the first headline per source is kept.
pub fn sites() -> Vec<SiteDescriptor> {
    vec![
        SiteDescriptor::new("Ars Technica", "https://arstechnica.com/", "h2"),
        SiteDescriptor::new("The Verge", "https://www.theverge.com/", "h2"),
        SiteDescriptor::new("Wired", "https://www.wired.com/", "h3"),
        SiteDescriptor::new("VentureBeat", "https://venturebeat.com/", "h2"),
        SiteDescriptor::new(TECHCRUNCH, "https://techcrunch.com/", "h2"),
        SiteDescriptor::new("CNET", "https://www.cnet.com/", "h3"),
        SiteDescriptor::new("Engadget", "https://www.engadget.com/", "h2"),
        SiteDescriptor::new("Mashable", "https://mashable.com/tech", "h2"),
    ]
}

pub fn fallback(date: NaiveDate) -> Vec<Article> {
    vec![
        Article::new(
            "The Future of AI in Software Development",
            "https://techcrunch.com/ai-software-development",
            TECHCRUNCH,
        )
        .with_published_at(date)
        .with_description("How AI is transforming the software development lifecycle and coding practices."),
        Article::new(
            "Cybersecurity Trends: Protecting Digital Assets in 2024",
            "https://techcrunch.com/cybersecurity-trends-2024",
            TECHCRUNCH,
        )
        .with_published_at(date)
        .with_description("Latest developments in cybersecurity and threat protection strategies."),
        Article::new(
            "Cloud Computing: The Backbone of Modern Applications",
            "https://techcrunch.com/cloud-computing-modern-apps",
            TECHCRUNCH,
        )
        .with_published_at(date)
        .with_description(
            "How cloud infrastructure is enabling scalable and efficient application development.",
        ),
    ]
}
