use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DestinationName, Temperature};

/// A catalogued destination: a named record carrying its ideal temperature.
///
/// The id is assigned once at creation and never reused; the name is the
/// external lookup key; only the temperature is mutable, and only through the
/// explicit update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: DestinationName,
    pub temperature: Temperature,
}

impl Destination {
    /// Build a destination with a freshly generated id (32-char hex, no hyphens).
    pub fn create(name: DestinationName, temperature: Temperature) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name,
            temperature,
        }
    }

    /// Copy of this record with the temperature replaced; id and name untouched.
    pub fn with_temperature(&self, temperature: Temperature) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            temperature,
        }
    }
}
