//! Pure verdict classification, no I/O.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::{DestinationName, Temperature};

/// Three-way classification of a current temperature against a stored ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Perfect,
    TooHot,
    TooCold,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::TooHot => "too_hot",
            Self::TooCold => "too_cold",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a freshly fetched current temperature against the stored ideal.
///
/// Exact equality means `Perfect`; no tolerance band is applied.
pub fn classify(ideal: Temperature, current: Temperature) -> Verdict {
    if current.value() > ideal.value() {
        Verdict::TooHot
    } else if current.value() < ideal.value() {
        Verdict::TooCold
    } else {
        Verdict::Perfect
    }
}

/// Result bundle for a verdict query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictReport {
    pub name: DestinationName,
    pub current_temperature: Temperature,
    pub ideal_temperature: Temperature,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: f64) -> Temperature {
        Temperature::new(value).expect("finite")
    }

    #[test]
    fn equal_temperatures_are_perfect() {
        for value in [-40.0, 0.0, 19.5, 35.0] {
            assert_eq!(classify(t(value), t(value)), Verdict::Perfect);
        }
    }

    #[test]
    fn warmer_than_ideal_is_too_hot() {
        for value in [-40.0, 0.0, 19.5, 35.0] {
            assert_eq!(classify(t(value), t(value + 1.0)), Verdict::TooHot);
        }
    }

    #[test]
    fn colder_than_ideal_is_too_cold() {
        for value in [-40.0, 0.0, 19.5, 35.0] {
            assert_eq!(classify(t(value), t(value - 1.0)), Verdict::TooCold);
        }
    }

    #[test]
    fn fractional_differences_still_classify() {
        assert_eq!(classify(t(20.0), t(20.1)), Verdict::TooHot);
        assert_eq!(classify(t(20.0), t(19.9)), Verdict::TooCold);
    }

    #[test]
    fn verdict_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Verdict::TooHot).expect("serialize"),
            "\"too_hot\""
        );
        assert_eq!(Verdict::TooCold.as_str(), "too_cold");
    }
}
