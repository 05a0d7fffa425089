//! Entity — one resolvable record from a per-kind backend collection.

use serde_json::Value;

use crate::id::BackendId;
use crate::kind::EntityKind;

/// A controllable entity as listed by its kind's collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Backend identifier, read from the kind's id field.
    pub id: BackendId,
    /// Human name the user refers to.
    pub name: String,
    /// Kind of the collection this entity was listed in.
    pub kind: EntityKind,
}

impl Entity {
    /// Build an entity from a raw collection item.
    ///
    /// Items carry `nome` plus the kind's identifier field
    /// (`idDispositivo`, `idCena`, …). An item missing either field can never
    /// be resolved by name, so it yields `None` and is skipped by callers.
    #[must_use]
    pub fn from_listing(kind: EntityKind, item: &Value) -> Option<Self> {
        let name = item.get("nome")?.as_str()?.to_string();
        let id = BackendId::from_json(item.get(kind.id_field())?)?;
        Some(Self { id, name, kind })
    }
}
