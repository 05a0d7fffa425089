//! Inventory snapshot — the aggregate listing sent to the model as context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate inventory as returned by the backend's `/history` endpoint:
/// category name (`dispositivos`, `cenas`, `acoesCena`, `grupos`, …) to the
/// ordered items of that category.
///
/// Items keep their raw backend shape. The snapshot exists to be forwarded to
/// the model verbatim; resolution never reads it and instead re-fetches the
/// kind's dedicated collection, whose item shape differs from this one.
///
/// A snapshot is immutable once fetched and scoped to a single request; it is
/// never cached across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot(BTreeMap<String, Vec<Value>>);

impl InventorySnapshot {
    #[must_use]
    pub fn new(categories: BTreeMap<String, Vec<Value>>) -> Self {
        Self(categories)
    }

    /// Category names present in the snapshot.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Total number of items across all categories, for logging.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Whether the snapshot lists nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}
