use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::connectivity::ManualConnectivity;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::loader::{LoadController, LoadListener};
use crate::preferences::SettingsStore;
use crate::request::RequestBuilder;

pub struct AppContext {
    pub config: Config,
    pub requests: RequestBuilder,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub connectivity: Arc<ManualConnectivity>,
    pub preferences: Arc<SettingsStore>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_config(&config.http)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Build a context around an existing fetcher instead of the HTTP one.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let requests = RequestBuilder::from_config(&config.api)?;
        let connectivity = Arc::new(ManualConnectivity::default());
        let preferences = Arc::new(SettingsStore::new(config.feed.category.clone()));

        Ok(Self {
            config,
            requests,
            fetcher,
            connectivity,
            preferences,
        })
    }

    /// A controller wired to this context's collaborators.
    pub fn controller(&self, listener: Arc<dyn LoadListener + Send + Sync>) -> LoadController {
        LoadController::new(
            self.requests.clone(),
            self.fetcher.clone(),
            self.connectivity.clone(),
            self.preferences.clone(),
            listener,
        )
    }
}
