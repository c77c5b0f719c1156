//! Key-level diff: which leaf keys exist on only one side.

use lkdiff_types::KeySet;
use tracing::debug;

/// The keys exclusive to each of two flattened documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Keys in the first set and absent from the second.
    pub only_in_first: KeySet,
    /// Keys in the second set and absent from the first.
    pub only_in_second: KeySet,
}

impl KeyDiff {
    /// Create an empty key diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if neither side has exclusive keys.
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    /// Total number of exclusive keys on both sides.
    pub fn len(&self) -> usize {
        self.only_in_first.len() + self.only_in_second.len()
    }
}

/// Compute `first − second` and `second − first`.
pub fn diff_key_sets(first: &KeySet, second: &KeySet) -> KeyDiff {
    let diff = KeyDiff {
        only_in_first: first.difference(second),
        only_in_second: second.difference(first),
    };
    debug!(
        only_in_first = diff.only_in_first.len(),
        only_in_second = diff.only_in_second.len(),
        "key sets compared"
    );
    diff
}
