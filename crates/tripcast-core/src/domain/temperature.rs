use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Finite temperature value in degrees Celsius.
///
/// NaN and the infinities are rejected at construction: verdict ordering is
/// only defined over finite values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteTemperature);
        }
        Ok(Self(value))
    }

    /// Coerce a decimal string (`"21.5"`) into a temperature.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::TemperatureNotNumeric {
                value: input.to_string(),
            })?;
        Self::new(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Temperature> for f64 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_values_including_negatives() {
        assert_eq!(Temperature::new(20.0).expect("valid").value(), 20.0);
        assert_eq!(Temperature::new(-40.5).expect("valid").value(), -40.5);
        assert_eq!(Temperature::new(0.0).expect("valid").value(), 0.0);
    }

    #[test]
    fn rejects_nan_and_infinities() {
        assert_eq!(
            Temperature::new(f64::NAN).unwrap_err(),
            ValidationError::NonFiniteTemperature
        );
        assert_eq!(
            Temperature::new(f64::INFINITY).unwrap_err(),
            ValidationError::NonFiniteTemperature
        );
        assert_eq!(
            Temperature::new(f64::NEG_INFINITY).unwrap_err(),
            ValidationError::NonFiniteTemperature
        );
    }

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(Temperature::parse("21.5").expect("valid").value(), 21.5);
        assert_eq!(Temperature::parse(" -3 ").expect("valid").value(), -3.0);
    }

    #[test]
    fn parse_rejects_non_numeric_strings() {
        let err = Temperature::parse("warm").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TemperatureNotNumeric {
                value: String::from("warm")
            }
        );
    }

    #[test]
    fn parse_rejects_nan_spelled_out() {
        // str::parse::<f64> accepts "NaN"; the finiteness check must not.
        assert_eq!(
            Temperature::parse("NaN").unwrap_err(),
            ValidationError::NonFiniteTemperature
        );
    }

    #[test]
    fn serde_round_trips_as_a_plain_number() {
        let temperature = Temperature::new(19.5).expect("valid");
        let json = serde_json::to_string(&temperature).expect("serialize");
        assert_eq!(json, "19.5");

        let back: Temperature = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, temperature);
    }
}
