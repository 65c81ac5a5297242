use crate::primitives::{AssetId, Quantity};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The candidates hold less of a required asset than the target asks for
    #[error("{asset} ({required}) - not found in UTxO set")]
    InsufficientAsset { asset: AssetId, required: Quantity },
    /// After covering every asset, the remaining candidates can't make up the lovelace
    /// shortfall. `remaining` is what is still missing once all of them were taken.
    #[error("not enough lovelace to cover target - ({remaining})")]
    InsufficientLovelace { remaining: Quantity },
}

impl SelectionError {
    /// Stable numeric code, `1` for a missing asset and `2` for missing lovelace.
    pub fn code(&self) -> u8 {
        match self {
            SelectionError::InsufficientAsset { .. } => 1,
            SelectionError::InsufficientLovelace { .. } => 2,
        }
    }
}
