//! Records fetched from the external backend.

use async_trait::async_trait;
use superadmin_core::{Customer, Shop};

use super::DataSource;
use crate::backend::{BackendClient, BackendError};

/// Loads a collection through [`BackendClient`].
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: BackendClient,
}

impl RemoteSource {
    /// Source backed by `client`; the collection type picks the endpoint.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource<Customer> for RemoteSource {
    async fn load(&self) -> Result<Vec<Customer>, BackendError> {
        self.client.list_customers().await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[async_trait]
impl DataSource<Shop> for RemoteSource {
    async fn load(&self) -> Result<Vec<Shop>, BackendError> {
        self.client.list_shops().await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
