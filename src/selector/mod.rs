//! Coin selection: picking which outputs to spend so that their combined value covers a
//! target value.

use crate::primitives::{Output, Value};

mod error;
mod largest_first;
mod selection;

pub use error::SelectionError;
pub use largest_first::LargestFirst;
pub use selection::Selection;


pub trait Selector {
    /// Selects outputs from `candidates` whose combined value covers `target`.
    ///
    /// Implementations must not keep state between calls.
    fn select<'a>(
        &self,
        candidates: &'a [Output],
        target: &Value,
    ) -> Result<Selection<'a>, SelectionError>;
}

/// Selects with the default [`LargestFirst`] strategy.
#[tracing::instrument(skip_all, fields(candidates = candidates.len(), assets = target.assets.len()))]
pub fn select<'a>(candidates: &'a [Output], target: &Value) -> Result<Selection<'a>, SelectionError> {
    LargestFirst.select(candidates, target)
}
