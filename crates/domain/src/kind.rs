//! Entity kinds — the closed set of controllable categories.
//!
//! The wire vocabulary (tags, collection paths, identifier fields) belongs to
//! the device backend and is shared verbatim with the model, so it is pinned
//! here rather than spread across adapters.

use crate::action::Action;

/// Kind of a controllable entity.
///
/// On the wire a kind appears only as its [`wire_tag`](Self::wire_tag); the
/// enum itself never crosses a JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A single device (lamp, plug, …).
    Device,
    /// A scene grouping device states.
    Scene,
    /// A runnable action attached to a scene.
    SceneAction,
    /// A group of devices driven together.
    Group,
}

impl EntityKind {
    /// All kinds, in backend listing order.
    pub const ALL: [Self; 4] = [Self::Device, Self::Scene, Self::SceneAction, Self::Group];

    /// Tag used for this kind on the wire, both in model replies and in
    /// aggregate snapshot items.
    #[must_use]
    pub fn wire_tag(self) -> &'static str {
        match self {
            Self::Device => "Dispositivo",
            Self::Scene => "Cena",
            Self::SceneAction => "AcaoCena",
            Self::Group => "Grupo",
        }
    }

    /// Parse a wire tag. Exact and case-sensitive; anything else is `None`.
    #[must_use]
    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire_tag() == tag)
    }

    /// Path segment of the backend collection listing this kind.
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Device => "dispositivos",
            Self::Scene => "cenas",
            Self::SceneAction => "acaocenas",
            Self::Group => "grupos",
        }
    }

    /// JSON field holding the identifier in this kind's collection items.
    #[must_use]
    pub fn id_field(self) -> &'static str {
        match self {
            Self::Device => "idDispositivo",
            Self::Scene => "idCena",
            Self::SceneAction => "idAcao",
            Self::Group => "idGrupo",
        }
    }

    /// Whether `action` is in this kind's allowed set.
    ///
    /// Devices, scenes, and groups can be turned on and off; scene actions
    /// can only be executed.
    #[must_use]
    pub fn allows(self, action: Action) -> bool {
        matches!(
            (self, action),
            (Self::Device | Self::Scene | Self::Group, Action::TurnOn | Action::TurnOff)
                | (Self::SceneAction, Action::Execute)
        )
    }

    /// Lowercase human label, used in user-facing messages and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Scene => "scene",
            Self::SceneAction => "scene action",
            Self::Group => "group",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
