use std::str::FromStr;

use num::BigUint;
use serde::{Deserialize, Deserializer, Serializer};

use super::PrimitiveError;

/// An unbounded, non-negative amount of lovelace or of a named asset.
pub type Quantity = BigUint;

pub fn parse_quantity(s: &str) -> Result<Quantity, PrimitiveError> {
    let s = s.trim().replace('_', "");
    BigUint::from_str(&s).map_err(|_| PrimitiveError::InvalidQuantity(s))
}

/// JSON quantities are accepted either as numbers or as decimal strings, since amounts
/// above `u64::MAX` can't be represented as plain JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum QuantityRepr {
    Number(u64),
    Text(String),
}

impl TryFrom<QuantityRepr> for Quantity {
    type Error = PrimitiveError;

    fn try_from(repr: QuantityRepr) -> Result<Self, Self::Error> {
        match repr {
            QuantityRepr::Number(n) => Ok(BigUint::from(n)),
            QuantityRepr::Text(s) => parse_quantity(&s),
        }
    }
}

/// `#[serde(with = "...")]` helpers for a single [`Quantity`] field.
pub mod serde_quantity {
    use super::*;

    pub fn serialize<S: Serializer>(quantity: &Quantity, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(quantity)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Quantity, D::Error> {
        QuantityRepr::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}
