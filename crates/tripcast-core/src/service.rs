//! Destination service: request-level validation and orchestration.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Destination, DestinationName, Temperature};
use crate::error::ServiceError;
use crate::store::DestinationStore;
use crate::verdict::{classify, VerdictReport};
use crate::weather::WeatherSource;

/// Orchestrates the destination store and the weather source.
///
/// The only component the HTTP layer talks to. All operations are keyed by
/// name; record ids never appear in inputs.
pub struct DestinationService {
    store: Arc<dyn DestinationStore>,
    weather: Arc<dyn WeatherSource>,
}

impl DestinationService {
    pub fn new(store: Arc<dyn DestinationStore>, weather: Arc<dyn WeatherSource>) -> Self {
        Self { store, weather }
    }

    /// Create a destination with a fresh id. One store write; the store's
    /// uniqueness constraint decides conflicts atomically.
    pub async fn create(&self, name: &str, temperature: f64) -> Result<Destination, ServiceError> {
        let name = DestinationName::parse(name)?;
        let temperature = Temperature::new(temperature)?;

        let destination = Destination::create(name, temperature);
        debug!(id = %destination.id, name = %destination.name, "creating destination");

        let stored = self.store.insert(destination).await?;
        info!(id = %stored.id, name = %stored.name, "destination created");
        Ok(stored)
    }

    /// Pure read; absence is `NotFound`.
    pub async fn get_by_name(&self, name: &str) -> Result<Destination, ServiceError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                name: name.to_string(),
            })
    }

    pub async fn list_all(&self) -> Result<Vec<Destination>, ServiceError> {
        let destinations = self.store.list_all().await?;
        debug!(count = destinations.len(), "listed destinations");
        Ok(destinations)
    }

    /// Replace the stored ideal temperature; id and name stay untouched.
    pub async fn update_temperature(
        &self,
        name: &str,
        new_temperature: f64,
    ) -> Result<Destination, ServiceError> {
        let temperature = Temperature::new(new_temperature)?;

        let updated = self.store.update_temperature(name, temperature).await?;
        info!(name = %updated.name, temperature = %updated.temperature, "destination temperature updated");
        Ok(updated)
    }

    /// Remove the record permanently.
    pub async fn delete(&self, name: &str) -> Result<(), ServiceError> {
        self.store.delete(name).await?;
        info!(name, "destination deleted");
        Ok(())
    }

    /// Fetch the current temperature for a stored destination and classify
    /// it against the ideal. The lookup fails before any weather call when
    /// the destination is unknown.
    pub async fn verdict(&self, name: &str) -> Result<VerdictReport, ServiceError> {
        let destination =
            self.store
                .find_by_name(name)
                .await?
                .ok_or_else(|| ServiceError::NotFound {
                    name: name.to_string(),
                })?;

        debug!(name = %destination.name, "fetching current temperature");
        let current = self
            .weather
            .current_temperature(destination.name.as_str())
            .await?;
        let current = Temperature::new(current)?;

        let verdict = classify(destination.temperature, current);
        info!(name = %destination.name, verdict = %verdict, "verdict computed");

        Ok(VerdictReport {
            name: destination.name,
            current_temperature: current,
            ideal_temperature: destination.temperature,
            verdict,
        })
    }
}
