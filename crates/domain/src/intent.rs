//! Intent extraction — from a free-text model reply to a structured command.
//!
//! The model is instructed to answer with a single JSON object
//! `{"entidade": ..., "nome": ..., "acao": ...}` and nothing else, but real
//! replies come wrapped in prose or markdown fences often enough that the
//! extractor scans for the object instead of trusting the whole reply.

use serde_json::Value;

use crate::kind::EntityKind;

/// Failure to get a JSON object out of a model reply.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The reply contains no `{ ... }` span at all.
    #[error("no JSON object in model reply")]
    NoJsonFound,
    /// The candidate span is not valid JSON.
    #[error("model reply JSON is malformed")]
    MalformedJson(#[source] serde_json::Error),
}

/// Structured command extracted from a model reply.
///
/// Every field is optional: the model answers an all-null object when the
/// voice command matches nothing, and partial replies are treated the same
/// way downstream. Only a fully populated intent converts into a
/// [`VoiceCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Intent {
    /// Parsed `entidade` tag; `None` for null, missing, non-string, or
    /// unknown tags.
    pub kind: Option<EntityKind>,
    /// `nome`, kept exactly as the model wrote it.
    pub name: Option<String>,
    /// `acao`, lowercased. Validated against the kind's allowed set at
    /// dispatch time, not here.
    pub action: Option<String>,
}

impl Intent {
    /// Whether the model explicitly answered the all-null "no match" object.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind.is_none() && self.name.is_none() && self.action.is_none()
    }

    /// Convert into a complete command, or `None` when any field is missing.
    #[must_use]
    pub fn into_command(self) -> Option<VoiceCommand> {
        Some(VoiceCommand {
            kind: self.kind?,
            name: self.name?,
            action: self.action?,
        })
    }
}

/// A complete, resolvable voice command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCommand {
    pub kind: EntityKind,
    pub name: String,
    /// Lowercased action string, still unvalidated.
    pub action: String,
}

/// Extract an [`Intent`] from a raw model reply.
///
/// The candidate span runs from the first `{` to the last `}`, which strips
/// surrounding prose and markdown fences. The greedy span is deliberate: a
/// reply containing two JSON objects produces an unparseable span and is
/// reported as malformed rather than half-read.
///
/// # Errors
///
/// [`ExtractError::NoJsonFound`] when no span exists,
/// [`ExtractError::MalformedJson`] when the span does not parse.
pub fn extract_intent(reply: &str) -> Result<Intent, ExtractError> {
    let start = reply.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = reply
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or(ExtractError::NoJsonFound)?;
    let value: Value =
        serde_json::from_str(&reply[start..=end]).map_err(ExtractError::MalformedJson)?;

    Ok(Intent {
        kind: value
            .get("entidade")
            .and_then(Value::as_str)
            .and_then(EntityKind::from_wire_tag),
        name: value
            .get("nome")
            .and_then(Value::as_str)
            .map(|name| name.to_string()),
        action: value
            .get("acao")
            .and_then(Value::as_str)
            .map(|action| action.to_lowercase()),
    })
}
