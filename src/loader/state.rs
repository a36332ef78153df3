use std::fmt;
use std::sync::Arc;

use crate::domain::Article;
use crate::fetcher::FetchError;
use crate::parser::ParseError;

/// Event that starts a new run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    InitialMount,
    CategoryChanged(String),
    SearchSubmitted(String),
    PullToRefresh,
    ConnectivityRestored,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::InitialMount => write!(f, "initial mount"),
            Trigger::CategoryChanged(category) => write!(f, "category changed to {}", category),
            Trigger::SearchSubmitted(text) => write!(f, "search for {:?}", text),
            Trigger::PullToRefresh => write!(f, "refresh"),
            Trigger::ConnectivityRestored => write!(f, "connectivity restored"),
        }
    }
}

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Success(Arc<[Article]>),
    EmptyResult,
    NetworkUnavailable,
    FetchFailed(FetchError),
    ParseFailed(ParseError),
}

impl LoadResult {
    /// Fold a parse outcome into a result. An empty body or an empty list
    /// counts as "nothing found", not as a failure.
    pub fn from_parsed(parsed: Result<Vec<Article>, ParseError>) -> Self {
        match parsed {
            Ok(articles) if articles.is_empty() => LoadResult::EmptyResult,
            Ok(articles) => LoadResult::Success(articles.into()),
            Err(ParseError::EmptyPayload) => LoadResult::EmptyResult,
            Err(e) => LoadResult::ParseFailed(e),
        }
    }

    pub fn state(&self) -> LoadState {
        match self {
            LoadResult::Success(_) => LoadState::Loaded,
            LoadResult::EmptyResult => LoadState::Empty,
            LoadResult::NetworkUnavailable => LoadState::NetworkError,
            LoadResult::FetchFailed(_) => LoadState::FetchError,
            LoadResult::ParseFailed(_) => LoadState::ParseError,
        }
    }

    pub fn articles(&self) -> Option<&[Article]> {
        match self {
            LoadResult::Success(articles) => Some(articles.as_ref()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Empty,
    NetworkError,
    FetchError,
    ParseError,
}

impl LoadState {
    pub fn is_settled(self) -> bool {
        !matches!(self, LoadState::Idle | LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parsed_empty_list_is_empty_result() {
        assert_eq!(LoadResult::from_parsed(Ok(Vec::new())), LoadResult::EmptyResult);
    }

    #[test]
    fn test_from_parsed_empty_payload_is_empty_result() {
        assert_eq!(
            LoadResult::from_parsed(Err(ParseError::EmptyPayload)),
            LoadResult::EmptyResult
        );
    }

    #[test]
    fn test_from_parsed_syntax_is_parse_failed() {
        let result = LoadResult::from_parsed(Err(ParseError::Syntax("eof".into())));
        assert_eq!(result.state(), LoadState::ParseError);
        assert_eq!(result.articles(), None);
    }

    #[test]
    fn test_from_parsed_success_keeps_order() {
        let articles = vec![
            Article::new("a", "s", "d", "u1"),
            Article::new("b", "s", "d", "u2"),
        ];
        let result = LoadResult::from_parsed(Ok(articles.clone()));
        assert_eq!(result.state(), LoadState::Loaded);
        assert_eq!(result.articles(), Some(articles.as_slice()));
    }

    #[test]
    fn test_settled_states() {
        assert!(!LoadState::Idle.is_settled());
        assert!(!LoadState::Loading.is_settled());
        assert!(LoadState::Loaded.is_settled());
        assert!(LoadState::NetworkError.is_settled());
    }
}
