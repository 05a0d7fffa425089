//! Driving port — the use-case the inbound HTTP adapter invokes.

use std::future::Future;

use voxrelay_domain::audio::AudioClip;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::outcome::RelayOutcome;

/// Runs the whole relay pipeline for one uploaded voice clip.
pub trait VoicePipeline {
    /// Process a clip to a terminal outcome.
    ///
    /// Ordinary failures (unreachable backend, unusable model reply, unknown
    /// entity, …) are `Ok` outcomes carrying their user-facing message.
    ///
    /// # Errors
    ///
    /// Reserved for the internal-error class, which the HTTP edge maps to a
    /// 500 instead of a message.
    fn process(
        &self,
        audio: AudioClip,
    ) -> impl Future<Output = Result<RelayOutcome, VoxRelayError>> + Send;
}
