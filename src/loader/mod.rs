//! Load lifecycle: triggers in, one current run at a time, results out.
//!
//! ```text
//! Trigger → connectivity check → RequestBuilder → Fetcher → ResponseParser → LoadListener
//! ```
//!
//! Every accepted trigger starts a new run tagged with the next sequence
//! number. Runs are never aborted; when one settles its result is applied
//! only if its number is still the latest, otherwise it is dropped.
//! Listener callbacks carry that number and run outside the controller's
//! lock.

pub mod listener;
pub mod state;

pub use listener::{ChannelListener, LoadEvent, LoadListener};
pub use state::{LoadResult, LoadState, Trigger};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::connectivity::ConnectivityObserver;
use crate::domain::{Article, QueryConfig};
use crate::fetcher::Fetcher;
use crate::parser::ResponseParser;
use crate::preferences::PreferenceStore;
use crate::request::{redact, RequestBuilder};

#[derive(Clone)]
pub struct LoadController {
    inner: Arc<Inner>,
}

struct Inner {
    requests: RequestBuilder,
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    parser: ResponseParser,
    connectivity: Arc<dyn ConnectivityObserver + Send + Sync>,
    preferences: Arc<dyn PreferenceStore + Send + Sync>,
    listener: Arc<dyn LoadListener + Send + Sync>,
    session: Mutex<Session>,
}

struct Session {
    current_run: u64,
    search_text: Option<String>,
    state: LoadState,
    displayed: Arc<[Article]>,
}

impl LoadController {
    pub fn new(
        requests: RequestBuilder,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        connectivity: Arc<dyn ConnectivityObserver + Send + Sync>,
        preferences: Arc<dyn PreferenceStore + Send + Sync>,
        listener: Arc<dyn LoadListener + Send + Sync>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                requests,
                fetcher,
                parser: ResponseParser::new(),
                connectivity,
                preferences,
                listener,
                session: Mutex::new(Session {
                    current_run: 0,
                    search_text: None,
                    state: LoadState::Idle,
                    displayed: Arc::from(Vec::<Article>::new()),
                }),
            }),
        }
    }

    /// Start a run for `trigger`, superseding any run still in flight.
    ///
    /// Returns the spawned run, or `None` when the network is unavailable;
    /// in that case no request is built and in-flight runs are left alone.
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self, trigger: Trigger) -> Option<JoinHandle<()>> {
        let (run, config) = {
            let mut session = self.inner.lock();

            match &trigger {
                Trigger::SearchSubmitted(text) => session.search_text = Some(text.clone()),
                Trigger::PullToRefresh | Trigger::CategoryChanged(_) => session.search_text = None,
                Trigger::InitialMount | Trigger::ConnectivityRestored => {}
            }

            if !self.inner.connectivity.is_connected() {
                warn!("No network connection; not loading ({})", trigger);
                session.state = LoadState::NetworkError;
                session.displayed = Arc::from(Vec::<Article>::new());
                (session.current_run, None)
            } else {
                let category = match &trigger {
                    Trigger::CategoryChanged(category) => category.clone(),
                    _ => self.inner.preferences.category(),
                };
                session.current_run += 1;
                session.state = LoadState::Loading;
                (
                    session.current_run,
                    Some(QueryConfig::new(category, session.search_text.clone())),
                )
            }
        };

        // The session lock is released; listeners may call back in.
        let Some(config) = config else {
            self.inner
                .listener
                .loading_finished(run, &trigger, &LoadResult::NetworkUnavailable);
            return None;
        };

        self.inner.listener.loading_started(run, &trigger);

        debug!("Run {} started ({})", run, trigger);
        let inner = Arc::clone(&self.inner);
        Some(tokio::spawn(async move {
            inner.execute(run, trigger, config).await;
        }))
    }

    pub fn state(&self) -> LoadState {
        self.inner.lock().state
    }

    /// Articles currently on screen.
    pub fn displayed(&self) -> Arc<[Article]> {
        Arc::clone(&self.inner.lock().displayed)
    }

    /// Search text carried into the next run that does not clear it.
    pub fn search_text(&self) -> Option<String> {
        self.inner.lock().search_text.clone()
    }

    /// Sequence number of the most recently started run; 0 before the first.
    pub fn current_run(&self) -> u64 {
        self.inner.lock().current_run
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn execute(&self, run: u64, trigger: Trigger, config: QueryConfig) {
        let url = self.requests.build(&config);
        debug!("Run {} requesting {}", run, redact(&url));

        let result = match self.fetcher.fetch(&url).await {
            Ok(body) => LoadResult::from_parsed(self.parser.parse(&body)),
            Err(e) => LoadResult::FetchFailed(e),
        };

        self.settle(run, &trigger, result);
    }

    fn settle(&self, run: u64, trigger: &Trigger, result: LoadResult) {
        {
            let mut session = self.lock();

            if run != session.current_run {
                debug!(
                    "Discarding result of run {}; run {} is current",
                    run, session.current_run
                );
                return;
            }

            match &result {
                LoadResult::Success(articles) => {
                    info!("Run {} loaded {} articles", run, articles.len());
                    session.displayed = Arc::clone(articles);
                }
                LoadResult::EmptyResult | LoadResult::NetworkUnavailable => {
                    info!("Run {} found no articles", run);
                    session.displayed = Arc::from(Vec::<Article>::new());
                }
                // A failed re-fetch leaves the previous list on screen.
                LoadResult::FetchFailed(e) => error!("Run {} failed to fetch: {}", run, e),
                LoadResult::ParseFailed(e) => warn!("Run {} got an unusable response: {}", run, e),
            }

            session.state = result.state();
        }

        self.listener.loading_finished(run, trigger, &result);
    }
}
