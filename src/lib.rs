//! # newsfeed
//!
//! A terminal news reader backed by a JSON search API.
//!
//! ## Architecture
//!
//! Every load runs the same pipeline:
//!
//! ```text
//! Trigger → LoadController → RequestBuilder → Fetcher → ResponseParser → LoadListener
//! ```
//!
//! - [`request`]: builds the search URL from category and search text
//! - [`fetcher`]: one GET with connect/read timeouts
//! - [`parser`]: tolerant JSON to [`Article`](domain::Article) mapping
//! - [`loader`]: state machine with supersession of stale runs
//!
//! ## Quick Start
//!
//! ```bash
//! # Latest articles
//! newsfeed fetch
//!
//! # Search within a section
//! newsfeed --category technology fetch --search "rust"
//!
//! # Interactive shell
//! newsfeed shell
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the request
/// builder, fetcher, connectivity flag and preferences.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch [--search <text>] [--json]` - Load once and print
/// - `url [--search <text>]` - Show the request URL
/// - `sections` - List known categories
/// - `shell` - Interactive shell
pub mod cli;

/// Configuration file handling.
///
/// Loads from `~/.config/newsfeed/config.toml`.
pub mod config;

/// Network reachability as seen by the loader.
pub mod connectivity;

/// Interactive line-based shell and text rendering.
pub mod console;

/// Core domain models.
///
/// - [`Article`](domain::Article): one content item
/// - [`QueryConfig`](domain::QueryConfig): inputs for one request
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for fetching a URL
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Load lifecycle controller.
pub mod loader;

/// Search API response parsing.
pub mod parser;

/// User preferences consumed by the loader.
pub mod preferences;

/// Search request URL construction.
pub mod request;
