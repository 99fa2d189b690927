//! Destination store contract and the in-memory implementation.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::{Destination, Temperature};

/// Storage outcomes and faults surfaced by destination stores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("destination '{name}' already exists")]
    Conflict { name: String },

    #[error("destination '{name}' not found")]
    NotFound { name: String },

    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store query error: {0}")]
    Query(String),
}

/// Keyed destination storage with a uniqueness constraint on the name.
///
/// `insert` is atomic with its existence check: of two racing inserts with
/// the same name, exactly one succeeds and the other observes `Conflict`.
pub trait DestinationStore: Send + Sync {
    fn insert<'a>(
        &'a self,
        destination: Destination,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>>;

    fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Destination>, StoreError>> + Send + 'a>>;

    fn update_temperature<'a>(
        &'a self,
        name: &'a str,
        temperature: Temperature,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>>;

    fn delete<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>>;

    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Destination>, StoreError>> + Send + 'a>>;
}

/// Deterministic in-memory store for offline tests and demos.
///
/// A single lock over an insertion-ordered vector; check-then-insert runs
/// under the lock, which keeps the uniqueness invariant under concurrency.
#[derive(Debug, Default)]
pub struct InMemoryDestinationStore {
    records: Mutex<Vec<Destination>>,
}

impl InMemoryDestinationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DestinationStore for InMemoryDestinationStore {
    fn insert<'a>(
        &'a self,
        destination: Destination,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            if records.iter().any(|r| r.name == destination.name) {
                return Err(StoreError::Conflict {
                    name: destination.name.to_string(),
                });
            }
            records.push(destination.clone());
            Ok(destination)
        })
    }

    fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Destination>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let records = self.records.lock().await;
            Ok(records.iter().find(|r| r.name.as_str() == name).cloned())
        })
    }

    fn update_temperature<'a>(
        &'a self,
        name: &'a str,
        temperature: Temperature,
    ) -> Pin<Box<dyn Future<Output = Result<Destination, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            let record = records
                .iter_mut()
                .find(|r| r.name.as_str() == name)
                .ok_or_else(|| StoreError::NotFound {
                    name: name.to_string(),
                })?;
            record.temperature = temperature;
            Ok(record.clone())
        })
    }

    fn delete<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            let position = records
                .iter()
                .position(|r| r.name.as_str() == name)
                .ok_or_else(|| StoreError::NotFound {
                    name: name.to_string(),
                })?;
            records.remove(position);
            Ok(())
        })
    }

    fn list_all<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Destination>, StoreError>> + Send + 'a>> {
        Box::pin(async move {
            let records = self.records.lock().await;
            Ok(records.clone())
        })
    }
}
