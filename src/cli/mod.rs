pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::Result;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "newsfeed")]
#[command(about = "Browse the latest news from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API key, overriding the configuration file
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Category to load, overriding the configuration file
    #[arg(long, global = true)]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed once and print it
    Fetch {
        /// Search for articles matching this text instead of the latest ones
        #[arg(short, long)]
        search: Option<String>,

        /// Print articles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the request URL for the current settings
    Url {
        /// Search text to include
        #[arg(short, long)]
        search: Option<String>,

        /// Print the API key instead of masking it
        #[arg(long)]
        show_key: bool,
    },
    /// List the known categories
    Sections,
    /// Interactive shell with refresh, search and category switching
    Shell,
}

impl Cli {
    /// Configuration from `--config` or the default location, with flag overrides applied.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(api_key) = &self.api_key {
            config.api.api_key = api_key.clone();
        }
        if let Some(category) = &self.category {
            config.feed.category = category.clone();
        }

        Ok(config)
    }
}
