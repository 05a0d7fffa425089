//! Model-collaborator port.

use std::future::Future;

use voxrelay_domain::audio::AudioClip;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::inventory::InventorySnapshot;

/// The generative-model collaborator that turns a voice clip plus inventory
/// context into a text reply.
///
/// The reply is free text; reading an intent out of it is the caller's job.
pub trait CommandInterpreter {
    /// Submit the snapshot and audio to the model and return its raw reply.
    ///
    /// # Errors
    ///
    /// [`VoxRelayError::ModelInvocation`] for any collaborator failure:
    /// upload, generation, or an unreadable response.
    fn interpret(
        &self,
        snapshot: &InventorySnapshot,
        audio: AudioClip,
    ) -> impl Future<Output = Result<String, VoxRelayError>> + Send;
}
