pub use pallas::crypto::hash::Hash;

mod asset;
mod error;
mod output;
mod quantity;
mod value;

pub use asset::*;
pub use error::*;
pub use output::*;
pub use quantity::{Quantity, parse_quantity, serde_quantity};
pub use value::*;

pub type TxHash = Hash<32>;
