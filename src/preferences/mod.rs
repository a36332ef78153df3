use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use crate::config::is_known_section;
use crate::domain::RECENT;

/// Read access to the user's feed preferences.
pub trait PreferenceStore {
    /// Currently selected category, `recent` for no section filter.
    fn category(&self) -> String;
}

/// In-memory preferences, seeded from configuration at startup.
#[derive(Debug)]
pub struct SettingsStore {
    category: RwLock<String>,
}

impl SettingsStore {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: RwLock::new(category.into()),
        }
    }

    /// Replace the selected category. Returns `true` if the value changed,
    /// which is when callers should fire a category-changed trigger.
    pub fn set_category(&self, category: &str) -> bool {
        if !is_known_section(category) {
            warn!("Category {:?} is not a known section", category);
        }

        let mut current = self
            .category
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if *current == category {
            return false;
        }

        info!("Category changed from {} to {}", current, category);
        *current = category.to_string();
        true
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(RECENT)
    }
}

impl PreferenceStore for SettingsStore {
    fn category(&self) -> String {
        self.category
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_recent() {
        assert_eq!(SettingsStore::default().category(), "recent");
    }

    #[test]
    fn test_set_category_reports_change() {
        let store = SettingsStore::default();
        assert!(store.set_category("sport"));
        assert_eq!(store.category(), "sport");
        assert!(!store.set_category("sport"));
    }

    #[test]
    fn test_unknown_category_is_stored_verbatim() {
        let store = SettingsStore::default();
        assert!(store.set_category("Made Up"));
        assert_eq!(store.category(), "Made Up");
    }
}
