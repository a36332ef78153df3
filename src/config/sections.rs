//! Categories the feed can be filtered by.

use crate::domain::query::RECENT;

/// Selectable categories: `recent` plus the API's section identifiers.
pub const SECTIONS: &[&str] = &[
    RECENT,
    "world",
    "uk-news",
    "us-news",
    "politics",
    "business",
    "money",
    "technology",
    "science",
    "environment",
    "education",
    "society",
    "sport",
    "football",
    "culture",
    "books",
    "music",
    "film",
    "stage",
    "artanddesign",
    "lifeandstyle",
    "fashion",
    "food",
    "travel",
    "commentisfree",
    "media",
    "law",
    "global-development",
];

pub fn is_known_section(category: &str) -> bool {
    SECTIONS.contains(&category)
}
