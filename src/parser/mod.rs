use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::Article;

/// Why a response body could not be turned into articles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("response body is empty")]
    EmptyPayload,

    #[error("response has no results array: {0}")]
    MalformedEnvelope(String),

    #[error("response is not valid JSON: {0}")]
    Syntax(String),
}

/// Reason a single result was dropped from an otherwise usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("result is not an object")]
    NotAnObject,

    #[error("missing or non-string field `{0}`")]
    MissingField(&'static str),

    #[error("missing or non-object `fields`")]
    MissingFields,
}

/// Maps search API responses onto [`Article`]s.
#[derive(Debug, Clone, Default)]
pub struct ResponseParser;

impl ResponseParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse `response.results` in input order.
    ///
    /// A result lacking a required field is skipped with a warning; the
    /// remaining results are still returned.
    pub fn parse(&self, body: &str) -> Result<Vec<Article>, ParseError> {
        if body.trim().is_empty() {
            return Err(ParseError::EmptyPayload);
        }

        let root: Value =
            serde_json::from_str(body).map_err(|e| ParseError::Syntax(e.to_string()))?;

        let results = root
            .get("response")
            .ok_or_else(|| ParseError::MalformedEnvelope("missing `response`".into()))?
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| ParseError::MalformedEnvelope("missing `response.results`".into()))?;

        let mut articles = Vec::with_capacity(results.len());
        for (index, result) in results.iter().enumerate() {
            match parse_result(result) {
                Ok(article) => articles.push(article),
                Err(reason) => warn!("Skipping result {}: {}", index, reason),
            }
        }

        debug!(
            "Parsed {} of {} results",
            articles.len(),
            results.len()
        );

        Ok(articles)
    }
}

fn parse_result(result: &Value) -> Result<Article, SkipReason> {
    let result = result.as_object().ok_or(SkipReason::NotAnObject)?;

    let title = required_str(result, "webTitle")?;
    let category = required_str(result, "sectionName")?;
    let published = required_str(result, "webPublicationDate")?;

    let fields = result
        .get("fields")
        .and_then(Value::as_object)
        .ok_or(SkipReason::MissingFields)?;
    let short_url = required_str(fields, "shortUrl")?;

    Ok(Article::new(title, category, published, short_url)
        .with_thumbnail_url(optional_str(fields, "thumbnail"))
        .with_body_text(optional_str(fields, "bodyText"))
        .with_author(contributor(result.get("tags"))))
}

/// Contributor name from the tag list.
///
/// Every tag is visited and a later titled tag replaces an earlier one, so
/// the last tag carrying a `webTitle` wins.
fn contributor(tags: Option<&Value>) -> Option<String> {
    tags.and_then(Value::as_array)?
        .iter()
        .filter_map(|tag| tag.get("webTitle").and_then(Value::as_str))
        .filter(|name| !name.trim().is_empty())
        .last()
        .map(String::from)
}

fn required_str(object: &Map<String, Value>, key: &'static str) -> Result<String, SkipReason> {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or(SkipReason::MissingField(key))
}

fn optional_str(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}
