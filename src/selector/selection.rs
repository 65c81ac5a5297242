use std::collections::HashSet;

use crate::primitives::{Output, OutputRef, Value};

/// Outputs picked by a selector, in the order they were picked. An output is never
/// held twice.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    outputs: Vec<&'a Output>,
    seen: HashSet<OutputRef>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the output was already selected.
    pub(crate) fn insert(&mut self, output: &'a Output) -> bool {
        if !self.seen.insert(output.reference) {
            return false;
        }
        self.outputs.push(output);
        true
    }

    pub fn contains(&self, reference: &OutputRef) -> bool {
        self.seen.contains(reference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Output> + '_ {
        self.outputs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn total_value(&self) -> Value {
        self.iter().map(|output| &output.value).sum()
    }

    pub fn covers(&self, target: &Value) -> bool {
        self.total_value().covers(target)
    }

    pub fn references(&self) -> Vec<OutputRef> {
        self.iter().map(|output| output.reference).collect()
    }

    pub fn into_outputs(self) -> Vec<&'a Output> {
        self.outputs
    }
}
