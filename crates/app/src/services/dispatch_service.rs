//! Dispatch service — validates a command and executes its route.

use voxrelay_domain::action::Action;
use voxrelay_domain::dispatch::DispatchRoute;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::id::BackendId;
use voxrelay_domain::kind::EntityKind;

use crate::ports::CommandGateway;

/// Interpreted result of one executed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// 2xx — the backend performed the action.
    Completed { body: String },
    /// 4xx — the backend refused; the body carries its own message and is
    /// surfaced to the user verbatim.
    Refused { status: u16, body: String },
}

/// Application service executing validated actions against the backend.
pub struct DispatchService<G> {
    gateway: G,
}

impl<G: CommandGateway> DispatchService<G> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validate `(kind, action)` and execute the resulting route.
    ///
    /// Validation happens before any network call: an action outside the
    /// kind's allowed set never reaches the gateway.
    ///
    /// # Errors
    ///
    /// [`VoxRelayError::ActionNotAllowed`] for an invalid pair,
    /// [`VoxRelayError::BackendStatus`] for a completed non-2xx/non-4xx
    /// exchange, and transport errors propagated from the gateway.
    #[tracing::instrument(skip(self))]
    pub async fn dispatch(
        &self,
        kind: EntityKind,
        action: &str,
        id: &BackendId,
    ) -> Result<DispatchOutcome, VoxRelayError> {
        let parsed = Action::from_wire(action).filter(|parsed| kind.allows(*parsed)).ok_or_else(
            || VoxRelayError::ActionNotAllowed {
                kind,
                action: action.to_string(),
            },
        )?;

        let route = DispatchRoute::new(kind, parsed, id);
        tracing::debug!(method = %route.method, path = %route.path, "executing action");
        let reply = self.gateway.execute(&route).await?;

        if reply.is_success() {
            Ok(DispatchOutcome::Completed { body: reply.body })
        } else if reply.is_client_error() {
            tracing::warn!(status = reply.status, "backend refused the action");
            Ok(DispatchOutcome::Refused {
                status: reply.status,
                body: reply.body,
            })
        } else {
            Err(VoxRelayError::BackendStatus {
                status: reply.status,
                body: reply.body,
            })
        }
    }
}
