//! Request URL construction for the search endpoint.

use url::Url;

use crate::app::Result;
use crate::config::ApiConfig;
use crate::domain::QueryConfig;

const API_KEY_PARAM: &str = "api-key";

/// Turns a [`QueryConfig`] into a fully-qualified search URL.
///
/// Parameters are always appended in the same order: `section`, `q`,
/// `order-by`, `show-tags`, `show-fields`, `api-key`.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: Url,
    api_key: String,
    show_fields: String,
    show_tags: String,
}

impl RequestBuilder {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let defaults = ApiConfig::default();
        Ok(Self {
            base: Url::parse(base_url)?,
            api_key: api_key.into(),
            show_fields: defaults.show_fields,
            show_tags: defaults.show_tags,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Ok(Self {
            base: Url::parse(&api.base_url)?,
            api_key: api.api_key.clone(),
            show_fields: api.show_fields.clone(),
            show_tags: api.show_tags.clone(),
        })
    }

    pub fn build(&self, config: &QueryConfig) -> String {
        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();

            if !config.is_recent() {
                query.append_pair("section", &config.category);
            }

            match config.active_search() {
                Some(text) => {
                    query.append_pair("q", text);
                    query.append_pair("order-by", "relevance");
                }
                None => {
                    query.append_pair("order-by", "newest");
                }
            }

            query
                .append_pair("show-tags", &self.show_tags)
                .append_pair("show-fields", &self.show_fields)
                .append_pair(API_KEY_PARAM, &self.api_key);
        }
        url.into()
    }
}

/// Copy of `url` with the API key value masked, for logs and diagnostics.
pub fn redact(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    if pairs.is_empty() {
        return parsed.into();
    }

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}
