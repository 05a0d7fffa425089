//! Device-backend ports — inventory reads and action execution.

use std::future::Future;

use voxrelay_domain::dispatch::DispatchRoute;
use voxrelay_domain::entity::Entity;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::inventory::InventorySnapshot;
use voxrelay_domain::kind::EntityKind;

/// Raw result of one completed action call.
///
/// Status interpretation (success, 4xx passthrough, unexpected error) is the
/// dispatch service's job; the gateway only reports what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    /// HTTP status code of the exchange.
    pub status: u16,
    /// Response body, read as text.
    pub body: String,
}

impl BackendReply {
    /// Whether the exchange completed with a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the exchange completed with a 4xx status.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

/// Read access to the backend's inventory.
pub trait InventorySource {
    /// Fetch the aggregate snapshot used as model context.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures from the backend call.
    fn fetch_snapshot(&self)
    -> impl Future<Output = Result<InventorySnapshot, VoxRelayError>> + Send;

    /// List one kind's dedicated collection, freshly fetched.
    ///
    /// Items that cannot be read as entities are skipped; resolution treats
    /// them as unmatchable.
    ///
    /// # Errors
    ///
    /// Transport, status, or decode failures from the backend call.
    fn list_kind(
        &self,
        kind: EntityKind,
    ) -> impl Future<Output = Result<Vec<Entity>, VoxRelayError>> + Send;
}

/// Executes validated action routes against the backend.
pub trait CommandGateway {
    /// Perform one action call.
    ///
    /// A completed exchange is `Ok` regardless of status.
    ///
    /// # Errors
    ///
    /// [`VoxRelayError::BackendUnreachable`] when no HTTP status was
    /// obtained (connect failure, timeout, interrupted body).
    fn execute(
        &self,
        route: &DispatchRoute,
    ) -> impl Future<Output = Result<BackendReply, VoxRelayError>> + Send;
}
