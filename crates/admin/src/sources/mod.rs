//! Record sources for the list screens.
//!
//! A [`DataSource`] produces the initial contents of a screen's record store.
//! Which implementation is used is decided once, from
//! [`AdminConfig::data_source`](crate::config::AdminConfig::data_source).

mod fixture;
mod remote;

pub use fixture::{FixtureSource, fixture_customers, fixture_shops};
pub use remote::RemoteSource;

use std::sync::Arc;

use async_trait::async_trait;
use superadmin_core::{Customer, Shop, ShopType};

use crate::backend::{BackendClient, BackendError};
use crate::components::data_table::FilterOption;
use crate::config::DataSourceKind;

/// Provider of the initial records for one collection.
#[async_trait]
pub trait DataSource<T>: Send + Sync {
    /// Load the full collection.
    ///
    /// # Errors
    ///
    /// Returns error if a remote load fails; fixture loads never fail.
    async fn load(&self) -> Result<Vec<T>, BackendError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Customer and shop sources for one configuration.
#[derive(Clone)]
pub struct Sources {
    pub customers: Arc<dyn DataSource<Customer>>,
    pub shops: Arc<dyn DataSource<Shop>>,
}

impl Sources {
    /// Build the sources selected by `kind`.
    #[must_use]
    pub fn build(kind: DataSourceKind, backend: &BackendClient) -> Self {
        match kind {
            DataSourceKind::Fixture => Self {
                customers: Arc::new(FixtureSource::new(fixture_customers())),
                shops: Arc::new(FixtureSource::new(fixture_shops())),
            },
            DataSourceKind::Remote => Self {
                customers: Arc::new(RemoteSource::new(backend.clone())),
                shops: Arc::new(RemoteSource::new(backend.clone())),
            },
        }
    }
}

/// Shop types present in `shops` that no category filter option selects.
///
/// Returned in first-seen order without duplicates. Shops of these types can
/// only be found through the search box.
#[must_use]
pub fn missing_categories(shops: &[Shop], categories: &[FilterOption]) -> Vec<ShopType> {
    let mut missing = Vec::new();
    for shop in shops {
        let covered = categories
            .iter()
            .any(|option| option.value == shop.shop_type.as_str());
        if !covered && !missing.contains(&shop.shop_type) {
            missing.push(shop.shop_type.clone());
        }
    }
    missing
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{AdminConfig, BackendConfig};

    #[test]
    fn test_default_categories_miss_electronics() {
        let config = AdminConfig::from_lookup(|_| None).unwrap();
        let missing = missing_categories(&fixture_shops(), &config.shop_categories);
        assert_eq!(missing, vec![ShopType::Electronics]);
    }

    #[test]
    fn test_full_categories_miss_nothing() {
        let categories: Vec<FilterOption> = ShopType::ALL
            .iter()
            .map(|t| FilterOption::new(t.as_str(), t.as_str()))
            .collect();
        assert!(missing_categories(&fixture_shops(), &categories).is_empty());
    }

    #[tokio::test]
    async fn test_build_fixture_sources() {
        let backend = BackendClient::new(&BackendConfig {
            base_url: "http://localhost:3000".to_string(),
        })
        .unwrap();
        let sources = Sources::build(DataSourceKind::Fixture, &backend);

        assert_eq!(sources.customers.name(), "fixture");
        assert_eq!(sources.customers.load().await.unwrap().len(), 8);
        assert_eq!(sources.shops.load().await.unwrap().len(), 6);
    }

    #[test]
    fn test_build_remote_sources() {
        let backend = BackendClient::new(&BackendConfig {
            base_url: "http://localhost:3000".to_string(),
        })
        .unwrap();
        let sources = Sources::build(DataSourceKind::Remote, &backend);
        assert_eq!(sources.customers.name(), "remote");
        assert_eq!(sources.shops.name(), "remote");
    }
}
