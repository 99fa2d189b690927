use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MAX_NAME_LEN: usize = 70;

/// Case-sensitive destination name, the external lookup key.
///
/// Stored exactly as given: no trimming, no case folding. Two names that
/// differ only in case are two different destinations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationName(String);

impl DestinationName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let len = input.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DestinationName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DestinationName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for DestinationName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DestinationName> for String {
    fn from(value: DestinationName) -> Self {
        value.0
    }
}
