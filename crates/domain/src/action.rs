//! Actions — what a voice command asks the backend to do.

/// Action requested on an entity.
///
/// The wire never carries this enum directly: it is parsed from the intent's
/// lowercased action string and written back out via [`wire_name`](Self::wire_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnOn,
    TurnOff,
    Execute,
}

impl Action {
    /// Name of this action on the wire, used as the final URL segment of a
    /// dispatch route.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::TurnOn => "ligar",
            Self::TurnOff => "desligar",
            Self::Execute => "executar",
        }
    }

    /// Parse an already-lowercased intent action string.
    ///
    /// Intent extraction lowercases the model's action before it gets here,
    /// so matching is exact.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "ligar" => Some(Self::TurnOn),
            "desligar" => Some(Self::TurnOff),
            "executar" => Some(Self::Execute),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_wire_name() {
        assert_eq!(Action::from_wire("ligar"), Some(Action::TurnOn));
        assert_eq!(Action::from_wire("desligar"), Some(Action::TurnOff));
        assert_eq!(Action::from_wire("executar"), Some(Action::Execute));
    }

    #[test]
    fn should_reject_unknown_action() {
        assert_eq!(Action::from_wire("abrir"), None);
        assert_eq!(Action::from_wire(""), None);
    }

    #[test]
    fn should_reject_uppercase_action() {
        // Lowercasing happens during intent extraction, not here.
        assert_eq!(Action::from_wire("LIGAR"), None);
    }

    #[test]
    fn should_display_wire_name() {
        assert_eq!(Action::TurnOn.to_string(), "ligar");
        assert_eq!(Action::Execute.to_string(), "executar");
    }
}
