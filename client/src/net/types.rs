//! Wire DTOs for the admin surcharge API.
//!
//! DESIGN
//! ======
//! Field names and enum spellings match the server's JSON so the same
//! payloads round-trip between `GET` responses and `POST`/`PATCH` bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// How a surcharge amount is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurchargeType {
    /// Flat amount added to the rate.
    #[default]
    Amount,
    /// Percentage of the rate.
    Percentage,
}

impl SurchargeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "AMOUNT",
            Self::Percentage => "PERCENTAGE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "AMOUNT" => Some(Self::Amount),
            "PERCENTAGE" => Some(Self::Percentage),
            _ => None,
        }
    }
}

/// A surcharge as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub surcharge_type: SurchargeType,
    pub active: bool,
    #[serde(default)]
    pub carriers: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

/// Body for create and update requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurchargeInput {
    pub name: String,
    pub amount: f64,
    pub surcharge_type: SurchargeType,
    pub active: bool,
    pub carriers: Vec<String>,
    pub services: Vec<String>,
}

/// Accept amounts encoded as JSON numbers or numeric strings (decimal
/// fields are often serialized as strings).
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let amount = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(amount) if amount.is_finite() => Ok(amount),
        _ => Err(D::Error::custom("expected numeric amount")),
    }
}
