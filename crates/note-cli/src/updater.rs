//! Field updaters
//!
//! The tool's one extension point: a pure function from the parsed
//! front-matter mapping to its replacement. Updaters must leave keys they
//! do not target untouched and in their original order, so repeated runs
//! converge instead of drifting.

use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Identity updater that logs the mapping it saw.
pub fn inspect(mapping: &Mapping) -> Mapping {
    debug!(front_matter = ?mapping, "inspected");
    mapping.clone()
}

/// Build an updater that fills in `key` with `value` when the field is
/// missing, null, or an empty string, leaving every other field in place.
pub fn ensure_field(key: String, value: Value) -> impl Fn(&Mapping) -> Mapping {
    move |mapping| {
        let mut updated = mapping.clone();
        let needs_default = match updated.get(key.as_str()) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if needs_default {
            updated.insert(Value::String(key.clone()), value.clone());
        }
        updated
    }
}
