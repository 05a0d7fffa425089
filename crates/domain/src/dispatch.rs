//! Dispatch routes — the HTTP call a validated command turns into.

use crate::action::Action;
use crate::id::BackendId;
use crate::kind::EntityKind;

/// HTTP method of a dispatch route.
///
/// Kept as a domain enum so the method table lives next to the rest of the
/// wire vocabulary; adapters map it to their HTTP library's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMethod {
    Put,
    Post,
}

impl std::fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Put => f.write_str("PUT"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// One action call against the backend: method plus path relative to the
/// backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRoute {
    pub method: DispatchMethod,
    pub path: String,
}

impl DispatchRoute {
    /// Build the route for an already-validated `(kind, action)` pair.
    ///
    /// The backend triggers groups with POST and everything else with PUT;
    /// the exhaustive match keeps that asymmetry visible here instead of
    /// buried in an adapter.
    #[must_use]
    pub fn new(kind: EntityKind, action: Action, id: &BackendId) -> Self {
        let method = match kind {
            EntityKind::Device | EntityKind::Scene | EntityKind::SceneAction => DispatchMethod::Put,
            EntityKind::Group => DispatchMethod::Post,
        };
        Self {
            method,
            path: format!("/{}/{}/{}", kind.collection_path(), id, action.wire_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_put_to_device_route() {
        let route = DispatchRoute::new(EntityKind::Device, Action::TurnOn, &BackendId::from("7"));
        assert_eq!(route.method, DispatchMethod::Put);
        assert_eq!(route.path, "/dispositivos/7/ligar");
    }

    #[test]
    fn should_post_to_group_route() {
        let route = DispatchRoute::new(EntityKind::Group, Action::TurnOn, &BackendId::from("7"));
        assert_eq!(route.method, DispatchMethod::Post);
        assert_eq!(route.path, "/grupos/7/ligar");
    }

    #[test]
    fn should_put_scene_turn_off_route() {
        let route = DispatchRoute::new(EntityKind::Scene, Action::TurnOff, &BackendId::from("2"));
        assert_eq!(route.method, DispatchMethod::Put);
        assert_eq!(route.path, "/cenas/2/desligar");
    }

    #[test]
    fn should_put_scene_action_execute_route() {
        let route =
            DispatchRoute::new(EntityKind::SceneAction, Action::Execute, &BackendId::from("3"));
        assert_eq!(route.method, DispatchMethod::Put);
        assert_eq!(route.path, "/acaocenas/3/executar");
    }

    #[test]
    fn should_display_methods_as_http_verbs() {
        assert_eq!(DispatchMethod::Put.to_string(), "PUT");
        assert_eq!(DispatchMethod::Post.to_string(), "POST");
    }
}
