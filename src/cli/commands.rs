use std::sync::Arc;

use crate::app::{AppContext, NewsfeedError, Result};
use crate::config::SECTIONS;
use crate::console::render;
use crate::domain::QueryConfig;
use crate::loader::{ChannelListener, LoadEvent, LoadResult, Trigger};
use crate::preferences::PreferenceStore;
use crate::request::redact;

/// Run the pipeline once and print what it produced.
pub async fn fetch(ctx: &AppContext, search: Option<String>, json: bool) -> Result<()> {
    let result = load_once(ctx, search).await?;

    if json {
        let articles = result.articles().unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(articles)?);
        if let Some(message) = render::status_message(&result) {
            eprintln!("{}", message);
        }
    } else {
        render::print_result(&result);
    }

    Ok(())
}

/// Trigger a single run and wait for its outcome.
pub async fn load_once(ctx: &AppContext, search: Option<String>) -> Result<LoadResult> {
    let (listener, mut events) = ChannelListener::new();
    let controller = ctx.controller(Arc::new(listener));

    let trigger = match search {
        Some(text) => Trigger::SearchSubmitted(text),
        None => Trigger::InitialMount,
    };

    if let Some(run) = controller.trigger(trigger) {
        run.await
            .map_err(|e| NewsfeedError::Other(format!("Load task failed: {}", e)))?;
    }

    // The run has settled, so every event it produced is already queued.
    let mut outcome = None;
    while let Ok(event) = events.try_recv() {
        if let LoadEvent::Finished(_, _, result) = event {
            outcome = Some(result);
        }
    }

    outcome.ok_or_else(|| NewsfeedError::Other("Load finished without a result".into()))
}

pub fn show_url(ctx: &AppContext, search: Option<String>, show_key: bool) {
    let config = QueryConfig::new(ctx.preferences.category(), search);
    let url = ctx.requests.build(&config);

    if show_key {
        println!("{}", url);
    } else {
        println!("{}", redact(&url));
    }
}

pub fn list_sections(current: &str) {
    for section in SECTIONS {
        let marker = if *section == current { "*" } else { " " };
        println!("{} {}", marker, section);
    }
}
