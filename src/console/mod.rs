pub mod event;
pub mod render;

use std::sync::Arc;

use chrono::Utc;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::app::{AppContext, Result};
use crate::loader::{ChannelListener, LoadController, LoadEvent, Trigger};

use self::event::Command;

/// Interactive loop: reads commands from stdin and prints results as runs settle.
pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let (listener, mut events) = ChannelListener::new();
    let controller = ctx.controller(Arc::new(listener));
    let mut shell = Shell::new(&ctx, &controller);
    let mut lines = BufReader::new(io::stdin()).lines();

    render::print_help();
    fire(&controller, Trigger::InitialMount);

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                if let Some(text) = shell.handle_event(&event) {
                    println!("{}", text);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if !shell.handle_command(Command::from(line.as_str())) {
                    break;
                }
            }
        }
    }

    Ok(())
}

struct Shell<'a> {
    ctx: &'a AppContext,
    controller: &'a LoadController,
    /// A refresh was requested and no run has settled since.
    refreshing: bool,
}

impl<'a> Shell<'a> {
    fn new(ctx: &'a AppContext, controller: &'a LoadController) -> Self {
        Self {
            ctx,
            controller,
            refreshing: false,
        }
    }

    /// Text to print for `event`, or `None` when a newer run has overtaken it.
    fn handle_event(&mut self, event: &LoadEvent) -> Option<String> {
        if event.is_stale(self.controller.current_run()) {
            debug!("Ignoring outcome of overtaken run {}", event.run());
            return None;
        }

        let text = render::render_event(event, self.refreshing, Utc::now());
        if matches!(event, LoadEvent::Finished(..)) {
            self.refreshing = false;
        }
        Some(text)
    }

    /// Returns `false` when the shell should exit.
    fn handle_command(&mut self, command: Command) -> bool {
        let controller = self.controller;
        match command {
            Command::Quit => return false,
            Command::Refresh => {
                self.refreshing = true;
                fire(controller, Trigger::PullToRefresh);
            }
            Command::Search(text) => fire(controller, Trigger::SearchSubmitted(text)),
            Command::Category(name) => {
                if self.ctx.preferences.set_category(&name) {
                    fire(controller, Trigger::CategoryChanged(name));
                } else {
                    println!("Already showing {}", name);
                }
            }
            Command::Offline => {
                self.ctx.connectivity.set_connected(false);
                println!("Network marked offline.");
            }
            Command::Online => {
                if self.ctx.connectivity.set_connected(true) {
                    fire(controller, Trigger::ConnectivityRestored);
                } else {
                    println!("Network is already online.");
                }
            }
            Command::Open(number) => open_article(controller, number),
            Command::Show => {
                let state = controller.state();
                if state.is_settled() {
                    println!("State: {}", render::state_label(state));
                } else {
                    println!(
                        "State: {} (showing the previous list)",
                        render::state_label(state)
                    );
                }
                if let Some(text) = controller.search_text() {
                    println!("Search: {}", text);
                }
                render::print_articles(&controller.displayed());
            }
            Command::Help => render::print_help(),
            Command::Unknown(line) => println!("Unknown command: {}. Type `help`.", line),
            Command::None => {}
        }
        true
    }
}

/// Start a run without waiting for it; its outcome arrives as an event.
fn fire(controller: &LoadController, trigger: Trigger) {
    if controller.trigger(trigger).is_none() {
        debug!("Run not started; network unavailable");
    }
}

fn open_article(controller: &LoadController, number: usize) {
    let displayed = controller.displayed();
    let Some(article) = displayed.get(number - 1) else {
        println!("No article {}", number);
        return;
    };

    if let Err(e) = open::that(article.article_url()) {
        println!("Failed to open browser: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::config::Config;
    use crate::fetcher::{FetchError, Fetcher};
    use crate::loader::LoadResult;

    struct EmptyFetcher;

    #[async_trait]
    impl Fetcher for EmptyFetcher {
        async fn fetch(&self, _url: &str) -> std::result::Result<String, FetchError> {
            Ok(r#"{"response":{"results":[]}}"#.to_string())
        }
    }

    fn finished(run: u64, trigger: Trigger) -> LoadEvent {
        LoadEvent::Finished(run, trigger, LoadResult::EmptyResult)
    }

    #[tokio::test]
    async fn test_refresh_ends_when_any_run_settles() {
        let ctx = AppContext::with_fetcher(Config::default(), Arc::new(EmptyFetcher)).unwrap();
        let (listener, _events) = ChannelListener::new();
        let controller = ctx.controller(Arc::new(listener));
        let mut shell = Shell::new(&ctx, &controller);

        assert!(shell.handle_command(Command::Refresh));
        assert!(shell.handle_command(Command::Search("rust".into())));
        assert_eq!(controller.current_run(), 2);

        let search = finished(2, Trigger::SearchSubmitted("rust".into()));
        assert_eq!(
            shell.handle_event(&search).as_deref(),
            Some("Refreshed.\nNo articles found.")
        );
        assert_eq!(
            shell.handle_event(&search).as_deref(),
            Some("No articles found.")
        );
    }

    #[tokio::test]
    async fn test_overtaken_outcome_is_not_shown() {
        let ctx = AppContext::with_fetcher(Config::default(), Arc::new(EmptyFetcher)).unwrap();
        let (listener, _events) = ChannelListener::new();
        let controller = ctx.controller(Arc::new(listener));
        let mut shell = Shell::new(&ctx, &controller);

        assert!(shell.handle_command(Command::Refresh));
        assert!(shell.handle_command(Command::Refresh));

        assert_eq!(shell.handle_event(&finished(1, Trigger::PullToRefresh)), None);
        assert!(shell.refreshing);
        assert_eq!(
            shell.handle_event(&LoadEvent::Started(2, Trigger::PullToRefresh)).as_deref(),
            Some("Loading (refresh)...")
        );
        assert!(shell.handle_event(&finished(2, Trigger::PullToRefresh)).is_some());
        assert!(!shell.refreshing);
    }

    #[tokio::test]
    async fn test_quit_stops_the_shell() {
        let ctx = AppContext::with_fetcher(Config::default(), Arc::new(EmptyFetcher)).unwrap();
        let (listener, _events) = ChannelListener::new();
        let controller = ctx.controller(Arc::new(listener));
        let mut shell = Shell::new(&ctx, &controller);

        assert!(!shell.handle_command(Command::Quit));
        assert!(shell.handle_command(Command::None));
    }
}
