use sqlx::FromRow;

use tripcast_core::{Destination, DestinationName, StoreError, Temperature};

/// Raw `destinations` row as stored.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct DestinationRow {
    pub id: String,
    pub name: String,
    pub temperature: f64,
}

impl DestinationRow {
    /// Rows are written through the validated domain types, so a failure
    /// here means the table was modified out of band.
    pub(crate) fn into_domain(self) -> Result<Destination, StoreError> {
        let name = DestinationName::parse(&self.name)
            .map_err(|e| StoreError::Query(format!("invalid stored destination name: {e}")))?;
        let temperature = Temperature::new(self.temperature)
            .map_err(|e| StoreError::Query(format!("invalid stored temperature: {e}")))?;

        Ok(Destination {
            id: self.id,
            name,
            temperature,
        })
    }
}
