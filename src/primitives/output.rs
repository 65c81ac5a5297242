use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PrimitiveError, TxHash, Value};

/// Points at an output of a transaction. This is the identity of an [`Output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputRef {
    pub hash: TxHash,
    pub index: u64,
}

impl OutputRef {
    pub fn new(hash: TxHash, index: u64) -> Self {
        Self { hash, index }
    }
}

impl fmt::Display for OutputRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.hash, self.index)
    }
}

impl FromStr for OutputRef {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PrimitiveError::InvalidOutputRef(s.to_string());
        let (hash, index) = s.split_once('#').ok_or_else(invalid)?;
        Ok(Self {
            hash: TxHash::from_str(hash).map_err(|_| invalid())?,
            index: index.parse().map_err(|_| invalid())?,
        })
    }
}

/// An unspent output available for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOutput", into = "RawOutput")]
pub struct Output {
    pub reference: OutputRef,
    pub value: Value,
}

impl Output {
    pub fn new(reference: OutputRef, value: Value) -> Self {
        Self { reference, value }
    }
}

/// Wallet file representation of an [`Output`].
#[derive(Serialize, Deserialize)]
struct RawOutput {
    tx_hash: String,
    index: u64,
    value: Value,
}

impl TryFrom<RawOutput> for Output {
    type Error = PrimitiveError;

    fn try_from(raw: RawOutput) -> Result<Self, Self::Error> {
        let hash = TxHash::from_str(&raw.tx_hash)
            .map_err(|_| PrimitiveError::InvalidOutputRef(raw.tx_hash.clone()))?;
        Ok(Self::new(OutputRef::new(hash, raw.index), raw.value))
    }
}

impl From<Output> for RawOutput {
    fn from(output: Output) -> Self {
        Self {
            tx_hash: output.reference.hash.to_string(),
            index: output.reference.index,
            value: output.value,
        }
    }
}
