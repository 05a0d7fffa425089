//! Error conventions for the voxrelay workspace.
//!
//! One central error enum crosses the port boundaries. Adapters box their
//! library errors (reqwest, axum, …) into the matching variant so this crate
//! never names an IO framework.

use crate::kind::EntityKind;

/// Boxed source error for variants fed by adapter libraries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Central error type crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum VoxRelayError {
    /// An outbound backend call failed before an HTTP status was received
    /// (connect error, timeout, interrupted body read).
    #[error("backend unreachable")]
    BackendUnreachable(#[source] BoxError),

    /// The backend answered with a non-success status outside the
    /// 4xx passthrough handled by dispatch.
    #[error("backend returned HTTP {status}")]
    BackendStatus {
        /// Status code of the completed exchange.
        status: u16,
        /// Response body, read best-effort.
        body: String,
    },

    /// The backend payload could not be decoded into the expected shape.
    #[error("backend payload could not be decoded")]
    BackendDecode(#[source] BoxError),

    /// The model collaborator failed (upload, generation, or an unreadable
    /// response).
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// The requested action is outside the kind's allowed set. Raised before
    /// any network call is made.
    #[error("action {action:?} is not allowed for {kind}")]
    ActionNotAllowed {
        /// Kind the command targeted.
        kind: EntityKind,
        /// Raw (already lowercased) action string from the intent.
        action: String,
    },

    /// Unrecoverable internal failure. The HTTP edge maps this, and only
    /// this, to a 500.
    #[error("internal error")]
    Internal(#[source] BoxError),
}
