use num::Zero;
use tracing::{debug, trace};

use super::{Selection, SelectionError, Selector};
use crate::primitives::{AssetId, Output, Quantity, Value};

/// Largest-first selection, assets before lovelace.
///
/// Every asset of the target is covered in turn by taking the outputs holding the most of
/// it, then the lovelace still missing is made up from the untouched outputs holding the
/// most lovelace. Outputs picked for one asset count towards every later asset.
///
/// This is greedy on purpose: it commits to the first prefix crossing each threshold and
/// makes no attempt at minimising inputs or change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirst;

impl Selector for LargestFirst {
    fn select<'a>(
        &self,
        candidates: &'a [Output],
        target: &Value,
    ) -> Result<Selection<'a>, SelectionError> {
        let mut selection = Selection::new();

        for (asset, required) in target.assets.iter() {
            if required.is_zero() {
                continue;
            }
            cover_asset(candidates, &mut selection, asset, required)?;
        }

        top_up_lovelace(candidates, &mut selection, &target.lovelace)?;

        Ok(selection)
    }
}

fn cover_asset<'a>(
    candidates: &'a [Output],
    selection: &mut Selection<'a>,
    asset: &AssetId,
    required: &Quantity,
) -> Result<(), SelectionError> {
    let held = |output: &Output| output.value.assets.get(asset).cloned().unwrap_or_default();

    let mut holders = candidates
        .iter()
        .filter(|&output| !held(output).is_zero())
        .collect::<Vec<_>>();
    // Stable, so equal holdings keep their candidate order
    holders.sort_by(|a, b| b.value.assets.get(asset).cmp(&a.value.assets.get(asset)));

    let mut covered = selection.iter().map(held).sum::<Quantity>();
    for output in holders {
        if selection.insert(output) {
            trace!(output = %output.reference, %asset, "selected output");
            covered += held(output);
        }
        if covered >= *required {
            debug!(%asset, %required, %covered, "asset covered");
            return Ok(());
        }
    }

    Err(SelectionError::InsufficientAsset {
        asset: asset.clone(),
        required: required.clone(),
    })
}

fn top_up_lovelace<'a>(
    candidates: &'a [Output],
    selection: &mut Selection<'a>,
    target: &Quantity,
) -> Result<(), SelectionError> {
    let selected = selection
        .iter()
        .map(|output| &output.value.lovelace)
        .sum::<Quantity>();
    if selected >= *target {
        return Ok(());
    }

    let mut remaining = target - &selected;
    debug!(%remaining, "topping up lovelace");

    let mut unselected = candidates
        .iter()
        .filter(|output| !selection.contains(&output.reference))
        .collect::<Vec<_>>();
    unselected.sort_by(|a, b| b.value.lovelace.cmp(&a.value.lovelace));

    for output in unselected {
        if !selection.insert(output) {
            continue;
        }
        trace!(output = %output.reference, lovelace = %output.value.lovelace, "selected output");
        if output.value.lovelace >= remaining {
            debug!("lovelace covered");
            return Ok(());
        }
        remaining -= &output.value.lovelace;
    }

    Err(SelectionError::InsufficientLovelace { remaining })
}
