//! Application state shared across handlers.

use std::sync::Arc;

use superadmin_core::{Customer, Shop};

use crate::backend::{BackendClient, BackendError};
use crate::config::AdminConfig;
use crate::services::SubmissionTracker;
use crate::sources::{DataSource, Sources};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
    sources: Sources,
    submissions: SubmissionTracker,
}

impl AppState {
    /// Build state from configuration, using the data source it selects.
    ///
    /// # Errors
    ///
    /// Returns error if the backend HTTP client fails to build.
    pub fn new(config: AdminConfig) -> Result<Self, BackendError> {
        let backend = BackendClient::new(&config.backend)?;
        let sources = Sources::build(config.data_source, &backend);
        Ok(Self::with_sources(config, backend, sources))
    }

    /// Build state with explicit data sources.
    #[must_use]
    pub fn with_sources(config: AdminConfig, backend: BackendClient, sources: Sources) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                sources,
                submissions: SubmissionTracker::new(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Source for the customers screen.
    #[must_use]
    pub fn customer_source(&self) -> &dyn DataSource<Customer> {
        self.inner.sources.customers.as_ref()
    }

    /// Source for the shops screen.
    #[must_use]
    pub fn shop_source(&self) -> &dyn DataSource<Shop> {
        self.inner.sources.shops.as_ref()
    }

    /// In-flight add-customer submissions.
    #[must_use]
    pub fn submissions(&self) -> &SubmissionTracker {
        &self.inner.submissions
    }
}
