//! Chunk filtering.
//!
//! Upstream sends arbitrary JSON items; only non-empty strings are
//! embeddable. Everything else is dropped silently rather than rejected, so
//! noisy input never fails a run.

use serde_json::Value;

/// Keep the items that are non-empty strings, in input order.
pub fn filter_chunks(items: &[Value]) -> Vec<&str> {
    items
        .iter()
        .filter_map(|item| item.as_str())
        .filter(|text| !text.is_empty())
        .collect()
}
