use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsfeed::app::AppContext;
use newsfeed::cli::{commands, Cli, Commands};
use newsfeed::preferences::PreferenceStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Fetch { search, json } => {
            commands::fetch(&ctx, search, json).await?;
        }
        Commands::Url { search, show_key } => {
            commands::show_url(&ctx, search, show_key);
        }
        Commands::Sections => {
            commands::list_sections(&ctx.preferences.category());
        }
        Commands::Shell => {
            newsfeed::console::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
