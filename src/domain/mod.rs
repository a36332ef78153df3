pub mod article;
pub mod query;

pub use article::{Article, UNKNOWN_AUTHOR};
pub use query::{QueryConfig, RECENT};
