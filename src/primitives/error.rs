#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// Asset name is too long, it must be 32 bytes or less
    #[error("Asset name must be 32 bytes or less, got {0} bytes")]
    AssetNameTooLong(usize),
    /// Policy id is not 28 hex-encoded bytes
    #[error("Invalid policy id: {0}")]
    InvalidPolicyId(String),
    /// Asset name is not valid hex
    #[error("Invalid asset name: {0}")]
    InvalidAssetName(String),
    /// Output reference is not of the form `<tx hash>#<index>`
    #[error("Invalid output reference: {0}")]
    InvalidOutputRef(String),
    /// Quantity is not a non-negative decimal integer
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
