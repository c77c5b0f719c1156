//! Flattening: turn a nested mapping into the set of its leaf-key paths.
//!
//! Every value that is not itself a mapping is a leaf, including arrays, which
//! are never decomposed. A nested mapping with no entries yields no keys at
//! all, not a key for its own name.

use lkdiff_types::{KeySet, LocaleDocument};
use serde_json::{Map, Value};
use tracing::debug;

/// Flatten a whole document from its root.
pub fn flatten_document(doc: &LocaleDocument) -> KeySet {
    let keys = flatten(doc.entries(), "");
    debug!(name = %doc.name().display(), keys = keys.len(), "document flattened");
    keys
}

/// Collect the dot-joined path of every leaf under `map`, each prefixed with
/// `prefix`.
///
/// `prefix` is either empty or ends with `.`. Nested mappings are walked with
/// an explicit work list, so depth is bounded by memory rather than the call
/// stack.
pub fn flatten(map: &Map<String, Value>, prefix: &str) -> KeySet {
    let mut keys = KeySet::new();
    let mut pending = vec![(map, prefix.to_owned())];
    while let Some((map, prefix)) = pending.pop() {
        for (key, value) in map {
            match value {
                Value::Object(inner) => pending.push((inner, format!("{prefix}{key}."))),
                _ => {
                    keys.insert(format!("{prefix}{key}"));
                }
            }
        }
    }
    keys
}
