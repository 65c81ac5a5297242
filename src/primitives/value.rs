use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::quantity::serde_quantity;
use super::{AssetId, Assets, Quantity};

/// An amount of lovelace together with any number of named assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    #[serde(with = "serde_quantity")]
    pub lovelace: Quantity,
    #[serde(default, skip_serializing_if = "Assets::is_empty")]
    pub assets: Assets,
}

impl Value {
    pub fn new(lovelace: impl Into<Quantity>) -> Self {
        Self {
            lovelace: lovelace.into(),
            assets: Assets::default(),
        }
    }

    pub fn with_assets(mut self, assets: Assets) -> Self {
        self.assets += &assets;
        self
    }

    pub fn with_asset(mut self, asset: AssetId, quantity: impl Into<Quantity>) -> Self {
        self.assets.add_asset(asset, quantity.into());
        self
    }

    /// Whether `self` holds at least as much lovelace and at least as much of every asset
    /// as `target`.
    pub fn covers(&self, target: &Value) -> bool {
        self.lovelace >= target.lovelace && target.assets.contained_within(&self.assets)
    }
}

impl AddAssign<&Value> for Value {
    fn add_assign(&mut self, other: &Value) {
        self.lovelace += &other.lovelace;
        self.assets += &other.assets;
    }
}

impl Add for Value {
    type Output = Value;

    fn add(mut self, other: Value) -> Value {
        self += &other;
        self
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.fold(Value::default(), |mut acc, value| {
            acc += value;
            acc
        })
    }
}
