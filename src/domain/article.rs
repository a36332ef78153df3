use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when the API exposes no contributor for an article.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// One piece of editorial content as returned by the search API.
///
/// Values are built once by the parser and never modified afterwards;
/// the accessors hand out borrowed views only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    title: String,
    category: String,
    published_at: String,
    thumbnail_url: Option<String>,
    article_url: String,
    author: String,
    body_text: Option<String>,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        published_at: impl Into<String>,
        article_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            published_at: published_at.into(),
            thumbnail_url: None,
            article_url: article_url.into(),
            author: UNKNOWN_AUTHOR.to_string(),
            body_text: None,
        }
    }

    pub fn with_thumbnail_url(mut self, thumbnail_url: Option<String>) -> Self {
        self.thumbnail_url = thumbnail_url;
        self
    }

    /// Set the contributor name. Blank names resolve to [`UNKNOWN_AUTHOR`].
    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = match author {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_AUTHOR.to_string(),
        };
        self
    }

    pub fn with_body_text(mut self, body_text: Option<String>) -> Self {
        self.body_text = body_text;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Section name the article was filed under.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Publication timestamp exactly as received.
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    /// Canonical link used when opening the article.
    pub fn article_url(&self) -> &str {
        &self.article_url
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body_text(&self) -> Option<&str> {
        self.body_text.as_deref()
    }

    /// Publication timestamp parsed as RFC 3339, if it parses.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
