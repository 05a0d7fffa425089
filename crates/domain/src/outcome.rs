//! Relay outcomes — every way a pipeline run can terminate.
//!
//! Each outcome renders to exactly one user-facing message. Backend bodies
//! pass through verbatim so the backend's own wording (including its
//! validation complaints) reaches the user; everything else gets a fixed
//! sentence. Outcomes are ordinary values: reaching one of the failure
//! variants is a normal end of a run, not an error to propagate.

use crate::kind::EntityKind;

/// Terminal outcome of one relay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// The backend performed the action; its response body, verbatim.
    Dispatched { body: String },
    /// The backend refused the action with a 4xx; its body, verbatim.
    Refused { body: String },
    /// The model found nothing actionable (all-null or incomplete intent).
    NothingMatched,
    /// No entity with the requested name exists in its kind's collection.
    EntityNotFound { name: String },
    /// The requested action is outside the kind's allowed set.
    ActionNotAllowed { kind: EntityKind },
    /// The model reply contained no JSON object.
    ReplyMissingJson,
    /// The model reply contained JSON that did not parse.
    ReplyMalformed,
    /// The aggregate inventory could not be fetched.
    InventoryUnavailable,
    /// The model collaborator failed.
    ModelFailure { detail: String },
    /// The per-kind listing failed while resolving the entity.
    ResolutionFailed { kind: EntityKind },
    /// The action call completed with an unexpected (non-2xx, non-4xx)
    /// status.
    DispatchHttpError { status: u16, body: String },
    /// The action call failed at transport level.
    DispatchFailed,
}

impl RelayOutcome {
    /// The user-facing message for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Dispatched { body } | Self::Refused { body } => body.clone(),
            Self::NothingMatched => {
                "Could not carry out the request. Please try again.".to_string()
            }
            Self::EntityNotFound { name } => {
                format!("No item named '{name}' was found.")
            }
            Self::ActionNotAllowed { kind } => {
                format!("Action not recognized for {}s.", kind.label())
            }
            Self::ReplyMissingJson => {
                "Could not identify a request in the assistant reply.".to_string()
            }
            Self::ReplyMalformed => {
                "The assistant reply was not in a valid format.".to_string()
            }
            Self::InventoryUnavailable => {
                "Could not fetch the list of controllable items.".to_string()
            }
            Self::ModelFailure { detail } => {
                format!("Failed to process the voice command: {detail}")
            }
            Self::ResolutionFailed { kind } => {
                format!("Failed to fetch the {} list.", kind.label())
            }
            Self::DispatchHttpError { status, body } => {
                format!("Unexpected backend error: {status} - {body}")
            }
            Self::DispatchFailed => "Failed to execute the action.".to_string(),
        }
    }

    /// Short stable name for logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Dispatched { .. } => "dispatched",
            Self::Refused { .. } => "refused",
            Self::NothingMatched => "nothing_matched",
            Self::EntityNotFound { .. } => "entity_not_found",
            Self::ActionNotAllowed { .. } => "action_not_allowed",
            Self::ReplyMissingJson => "reply_missing_json",
            Self::ReplyMalformed => "reply_malformed",
            Self::InventoryUnavailable => "inventory_unavailable",
            Self::ModelFailure { .. } => "model_failure",
            Self::ResolutionFailed { .. } => "resolution_failed",
            Self::DispatchHttpError { .. } => "dispatch_http_error",
            Self::DispatchFailed => "dispatch_failed",
        }
    }
}
