//! HTTP client for the external customer/shop backend.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use superadmin_core::{Customer, NewCustomer, Shop};
use tracing::instrument;

use super::BackendError;
use crate::config::BackendConfig;

/// Backend API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Submit a new customer (`POST /customer`).
    ///
    /// Any 2xx status counts as success; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if no response arrived and
    /// [`BackendError::Rejected`] for a non-2xx status.
    #[instrument(skip(self, customer), fields(email = %customer.email))]
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<(), BackendError> {
        let url = format!("{}/customer", self.inner.base_url);
        let response = self.inner.client.post(&url).json(customer).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        tracing::warn!(status = status.as_u16(), "Backend rejected new customer");
        Err(BackendError::Rejected {
            status: status.as_u16(),
        })
    }

    /// Fetch every customer (`GET /getAllCustomers`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a customer array.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, BackendError> {
        self.get("/getAllCustomers").await
    }

    /// Fetch every shop (`GET /getAllShops`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a shop array.
    pub async fn list_shops(&self) -> Result<Vec<Shop>, BackendError> {
        self.get("/getAllShops").await
    }

    /// Execute a GET request against the backend.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle a response and parse its JSON body.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| BackendError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(BackendError::Rejected {
            status: status.as_u16(),
        })
    }
}
