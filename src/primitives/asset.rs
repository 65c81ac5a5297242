use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use num::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quantity::QuantityRepr;
use super::{Hash, PrimitiveError, Quantity};

pub type PolicyId = Hash<28>;

/// Maximum length of an asset name accepted by the ledger.
pub const MAX_ASSET_NAME_LEN: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetName(Vec<u8>);

impl AssetName {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, PrimitiveError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_ASSET_NAME_LEN {
            return Err(PrimitiveError::AssetNameTooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        let bytes = hex::decode(s).map_err(|_| PrimitiveError::InvalidAssetName(s.to_string()))?;
        Self::new(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// A named asset: a minting policy together with a token name under that policy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId {
    pub policy: PolicyId,
    pub name: AssetName,
}

impl AssetId {
    pub fn new(policy: PolicyId, name: AssetName) -> Self {
        Self { policy, name }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.policy, self.name)
    }
}

/// Parses `<policy hex>.<name hex>`. A bare policy id stands for the empty token name.
impl FromStr for AssetId {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (policy, name) = s.split_once('.').unwrap_or((s, ""));
        let policy = PolicyId::from_str(policy)
            .map_err(|_| PrimitiveError::InvalidPolicyId(policy.to_string()))?;
        Ok(Self::new(policy, AssetName::from_hex(name)?))
    }
}

impl Serialize for AssetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A bundle of named assets. Zero quantities are never stored, so a missing entry and a
/// zero entry are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets(BTreeMap<AssetId, Quantity>);

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_asset(&mut self, asset: AssetId, quantity: Quantity) {
        if quantity.is_zero() {
            return;
        }
        *self.0.entry(asset).or_default() += quantity;
    }

    pub fn with_asset(mut self, asset: AssetId, quantity: impl Into<Quantity>) -> Self {
        self.add_asset(asset, quantity.into());
        self
    }

    pub fn get(&self, asset: &AssetId) -> Option<&Quantity> {
        self.0.get(asset)
    }

    pub fn quantity_of(&self, asset: &AssetId) -> Quantity {
        self.get(asset).cloned().unwrap_or_default()
    }

    pub fn remove(&mut self, asset: &AssetId) -> Option<Quantity> {
        self.0.remove(asset)
    }

    /// Iterates in ascending [`AssetId`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &Quantity)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &AssetId> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every asset in `self` is held in at least the same quantity by `other`.
    pub fn contained_within(&self, other: &Self) -> bool {
        self.iter()
            .all(|(asset, quantity)| other.get(asset).is_some_and(|held| held >= quantity))
    }
}

impl AddAssign<&Assets> for Assets {
    fn add_assign(&mut self, other: &Assets) {
        for (asset, quantity) in other.iter() {
            self.add_asset(asset.clone(), quantity.clone());
        }
    }
}

impl Add for Assets {
    type Output = Assets;

    fn add(mut self, other: Assets) -> Assets {
        self += &other;
        self
    }
}

impl Sum for Assets {
    fn sum<I: Iterator<Item = Assets>>(iter: I) -> Self {
        iter.fold(Assets::default(), Add::add)
    }
}

impl<'a> Sum<&'a Assets> for Assets {
    fn sum<I: Iterator<Item = &'a Assets>>(iter: I) -> Self {
        iter.fold(Assets::default(), |mut acc, assets| {
            acc += assets;
            acc
        })
    }
}

impl FromIterator<(AssetId, Quantity)> for Assets {
    fn from_iter<I: IntoIterator<Item = (AssetId, Quantity)>>(iter: I) -> Self {
        let mut assets = Assets::default();
        for (asset, quantity) in iter {
            assets.add_asset(asset, quantity);
        }
        assets
    }
}

impl Serialize for Assets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.iter()
                .map(|(asset, quantity)| (asset.to_string(), quantity.to_string())),
        )
    }
}

impl<'de> Deserialize<'de> for Assets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<AssetId, QuantityRepr>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(asset, quantity)| -> Result<_, PrimitiveError> {
                Ok((asset, Quantity::try_from(quantity)?))
            })
            .collect::<Result<Assets, PrimitiveError>>()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: &str = "16aa5486dab6527c4697387736ae449411c03dcd20a3950453e6779c";

    fn penguin(n: u32) -> AssetId {
        let policy = PolicyId::from_str(POLICY).unwrap();
        AssetId::new(policy, AssetName::new(format!("PodgyPenguin{n}")).unwrap())
    }

    #[test]
    fn asset_id_text_form() {
        let asset = penguin(1041);
        let parsed: AssetId = asset.to_string().parse().unwrap();
        assert_eq!(parsed, asset);

        let bare: AssetId = POLICY.parse().unwrap();
        assert!(bare.name.as_bytes().is_empty());
    }

    #[test]
    fn asset_id_rejects_bad_policy() {
        assert!(matches!(
            "abcd.00".parse::<AssetId>(),
            Err(PrimitiveError::InvalidPolicyId(_))
        ));
    }

    #[test]
    fn asset_name_too_long() {
        assert_eq!(
            AssetName::new(vec![0u8; 33]),
            Err(PrimitiveError::AssetNameTooLong(33))
        );
    }

    #[test]
    fn zero_quantities_are_not_stored() {
        let assets = Assets::new().with_asset(penguin(1), 0u32);
        assert!(assets.is_empty());
        assert_eq!(assets.quantity_of(&penguin(1)), Quantity::zero());
    }

    #[test]
    fn addition_merges_entries() {
        let a = Assets::new()
            .with_asset(penguin(1), 2u32)
            .with_asset(penguin(2), 1u32);
        let b = Assets::new().with_asset(penguin(1), 3u32);

        let sum = a + b;
        assert_eq!(sum.quantity_of(&penguin(1)), Quantity::from(5u32));
        assert_eq!(sum.quantity_of(&penguin(2)), Quantity::from(1u32));
    }

    #[test]
    fn contained_within() {
        let small = Assets::new().with_asset(penguin(1), 1u32);
        let big = Assets::new()
            .with_asset(penguin(1), 2u32)
            .with_asset(penguin(2), 1u32);

        assert!(small.contained_within(&big));
        assert!(!big.contained_within(&small));
        assert!(Assets::new().contained_within(&small));
    }
}
