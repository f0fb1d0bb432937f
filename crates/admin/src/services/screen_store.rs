//! Session-scoped record stores.
//!
//! Each browser session owns one [`RecordStore`] per list screen. The first
//! request that needs a store loads it from the configured data source and
//! saves it to the session; later requests read and write the saved copy, so
//! local deletes survive page changes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use superadmin_core::{Customer, Record, RecordStore, Shop};
use tower_sessions::Session;

use crate::error::AppError;
use crate::sources::DataSource;

/// A record type with its own screen store in the session.
pub trait ScreenRecord: Record + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Session key of the store.
    const SESSION_KEY: &'static str;
    /// Plural noun for logs.
    const COLLECTION: &'static str;
}

impl ScreenRecord for Customer {
    const SESSION_KEY: &'static str = "customers_store";
    const COLLECTION: &'static str = "customers";
}

impl ScreenRecord for Shop {
    const SESSION_KEY: &'static str = "shops_store";
    const COLLECTION: &'static str = "shops";
}

/// Get this session's store for `T`, loading it from `source` on first use.
///
/// A failed load is not saved, so the next request tries again.
///
/// # Errors
///
/// Returns [`AppError::Session`] if the session cannot be read or written,
/// or [`AppError::Backend`] if the source fails.
pub async fn mount<T: ScreenRecord>(
    session: &Session,
    source: &dyn DataSource<T>,
) -> Result<RecordStore<T>, AppError> {
    if let Some(store) = session.get::<RecordStore<T>>(T::SESSION_KEY).await? {
        return Ok(store);
    }

    let records = source.load().await?;
    let mut store = RecordStore::new();
    let dropped = store.load(records);
    if dropped > 0 {
        tracing::warn!(
            collection = T::COLLECTION,
            dropped,
            "Dropped records with duplicate ids"
        );
    }

    session.insert(T::SESSION_KEY, &store).await?;
    tracing::info!(
        collection = T::COLLECTION,
        source = source.name(),
        records = store.len(),
        "Record store mounted"
    );

    Ok(store)
}

/// Write `store` back to the session.
///
/// # Errors
///
/// Returns [`AppError::Session`] if the session cannot be written.
pub async fn save<T: ScreenRecord>(
    session: &Session,
    store: &RecordStore<T>,
) -> Result<(), AppError> {
    session.insert(T::SESSION_KEY, store).await?;
    Ok(())
}

/// Remove the record with `id` from this session's store.
///
/// Returns the removed record; an unknown id changes nothing.
///
/// # Errors
///
/// Returns error if the store cannot be mounted or saved.
pub async fn remove<T: ScreenRecord>(
    session: &Session,
    source: &dyn DataSource<T>,
    id: T::Id,
) -> Result<Option<T>, AppError> {
    let mut store = mount(session, source).await?;
    let removed = store.remove(id);
    if removed.is_some() {
        save(session, &store).await?;
    }
    Ok(removed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use superadmin_core::CustomerId;
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::backend::BackendError;
    use crate::sources::fixture_customers;

    /// Source that counts loads and can be told to fail.
    struct CountingSource {
        loads: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl DataSource<Customer> for CountingSource {
        async fn load(&self) -> Result<Vec<Customer>, BackendError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(BackendError::Rejected { status: 503 })
            } else {
                Ok(fixture_customers())
            }
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_mount_loads_once_per_session() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        };
        let session = session();

        let first = mount::<Customer>(&session, &source).await.unwrap();
        let second = mount::<Customer>(&session, &source).await.unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: true,
        };
        let session = session();

        assert!(matches!(
            mount::<Customer>(&session, &source).await,
            Err(AppError::Backend(_))
        ));
        assert!(mount::<Customer>(&session, &source).await.is_err());
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_remove_persists_in_session() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        };
        let session = session();

        let removed = remove::<Customer>(&session, &source, CustomerId::new(2)).await.unwrap();
        assert_eq!(removed.unwrap().name, "Jane Smith");

        let store = mount::<Customer>(&session, &source).await.unwrap();
        assert_eq!(store.len(), 7);
        assert!(store.get(CustomerId::new(2)).is_none());

        let missing = remove::<Customer>(&session, &source, CustomerId::new(99)).await.unwrap();
        assert!(missing.is_none());
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let source = CountingSource {
            loads: AtomicUsize::new(0),
            fail: false,
        };
        let a = session();
        let b = session();

        remove::<Customer>(&a, &source, CustomerId::new(1)).await.unwrap();
        assert_eq!(mount::<Customer>(&b, &source).await.unwrap().len(), 8);
    }
}
