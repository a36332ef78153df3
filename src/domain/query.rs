/// Category value meaning "no section filter, latest across all sections".
pub const RECENT: &str = "recent";

/// Inputs for a single request, captured by value when a run is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub category: String,
    pub search_text: Option<String>,
}

impl QueryConfig {
    pub fn new(category: impl Into<String>, search_text: Option<String>) -> Self {
        Self {
            category: category.into(),
            search_text,
        }
    }

    pub fn recent() -> Self {
        Self::new(RECENT, None)
    }

    pub fn is_recent(&self) -> bool {
        self.category == RECENT
    }

    /// Search text, if present and non-empty.
    pub fn active_search(&self) -> Option<&str> {
        self.search_text.as_deref().filter(|text| !text.is_empty())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::recent()
    }
}
