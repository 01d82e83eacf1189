//! API state management for the REST server.

use std::sync::Arc;

use crate::config::Config;
use crate::notify::{self, Notifier};
use crate::store::{JsonFileStore, SubmissionStore};

/// Shared state for the REST API.
///
/// The store and notifier are trait objects so tests can substitute
/// instrumented fakes; each request borrows them immutably.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn SubmissionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub config: Arc<Config>,
}

impl ApiState {
    /// Create production state from config: JSON file store under the data
    /// directory, webhook notifier resolved from config/environment.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_path()));
        let notifier = notify::from_config(&config.notifications);

        Self {
            store,
            notifier,
            config: Arc::new(config),
        }
    }

    /// Build state around explicit adapters (used by tests).
    pub fn with_adapters(
        config: Config,
        store: Arc<dyn SubmissionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            notifier,
            config: Arc::new(config),
        }
    }
}
