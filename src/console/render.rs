//! Plain-text rendering of articles and load outcomes.

use chrono::{DateTime, Utc};

use crate::domain::Article;
use crate::loader::{LoadEvent, LoadResult, LoadState};

pub const NO_INTERNET: &str = "No internet connection.";
pub const NO_ARTICLES: &str = "No articles found.";

/// Longest body excerpt shown under a headline, in characters.
pub const EXCERPT_CHARS: usize = 160;

/// User-facing text for results that have no list to show.
pub fn status_message(result: &LoadResult) -> Option<&'static str> {
    match result {
        LoadResult::Success(_) => None,
        LoadResult::EmptyResult | LoadResult::ParseFailed(_) => Some(NO_ARTICLES),
        LoadResult::NetworkUnavailable | LoadResult::FetchFailed(_) => Some(NO_INTERNET),
    }
}

pub fn state_label(state: LoadState) -> &'static str {
    match state {
        LoadState::Idle => "idle",
        LoadState::Loading => "loading",
        LoadState::Loaded => "loaded",
        LoadState::Empty => "empty",
        LoadState::NetworkError => "offline",
        LoadState::FetchError => "fetch failed",
        LoadState::ParseError => "bad response",
    }
}

/// How long before `now` the article was published.
///
/// Under a minute (or in the future) is "Just now"; after a week the date
/// is shown instead. An unparseable timestamp is "N/A".
pub fn format_age(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(published) = published else {
        return "N/A".to_string();
    };

    let age = now.signed_duration_since(published);
    if age.num_minutes() < 1 {
        "Just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{} min. ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{} hr. ago", age.num_hours())
    } else if age.num_days() == 1 {
        "Yesterday".to_string()
    } else if age.num_days() < 7 {
        format!("{} days ago", age.num_days())
    } else {
        published.format("%b %-d, %Y").to_string()
    }
}

/// Body text with whitespace collapsed, cut to `max_chars` with an ellipsis.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }

    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Numbered entry, 1-based, as used by `open <n>`.
pub fn format_article(number: usize, article: &Article, now: DateTime<Utc>) -> String {
    let mut text = format!(
        "{:>3}. {}\n     {} | {} | {}",
        number,
        article.title(),
        article.category(),
        article.author(),
        format_age(article.published_at_utc(), now)
    );

    if let Some(body) = article.body_text().map(|b| excerpt(b, EXCERPT_CHARS)) {
        if !body.is_empty() {
            text.push_str("\n     ");
            text.push_str(&body);
        }
    }

    text.push_str("\n     ");
    text.push_str(article.article_url());

    if let Some(thumbnail) = article.thumbnail_url().filter(|t| !t.is_empty()) {
        text.push_str("\n     thumbnail: ");
        text.push_str(thumbnail);
    }

    text
}

pub fn render_articles(articles: &[Article], now: DateTime<Utc>) -> String {
    if articles.is_empty() {
        return NO_ARTICLES.to_string();
    }

    articles
        .iter()
        .enumerate()
        .map(|(index, article)| format_article(index + 1, article, now))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_result(result: &LoadResult, now: DateTime<Utc>) -> String {
    match result {
        LoadResult::Success(articles) => render_articles(articles, now),
        other => status_message(other).unwrap_or_default().to_string(),
    }
}

/// Text for one load event. `refreshing` is whether a refresh is still
/// waiting for its busy indicator to end; any settled run ends it.
pub fn render_event(event: &LoadEvent, refreshing: bool, now: DateTime<Utc>) -> String {
    match event {
        LoadEvent::Started(_, trigger) => format!("Loading ({})...", trigger),
        LoadEvent::Finished(_, _, result) if refreshing => {
            format!("Refreshed.\n{}", render_result(result, now))
        }
        LoadEvent::Finished(_, _, result) => render_result(result, now),
    }
}

pub fn print_articles(articles: &[Article]) {
    println!("{}", render_articles(articles, Utc::now()));
}

pub fn print_result(result: &LoadResult) {
    println!("{}", render_result(result, Utc::now()));
}

pub fn print_help() {
    println!(
        "Commands:\n  \
         refresh            reload the default feed (clears the search)\n  \
         search <text>      search articles by relevance\n  \
         category <name>    switch category (`recent` for all sections)\n  \
         offline | online   simulate losing or regaining the network\n  \
         open <n>           open article n in the browser\n  \
         show               print the current list\n  \
         help               show this help\n  \
         quit               exit"
    );
}
