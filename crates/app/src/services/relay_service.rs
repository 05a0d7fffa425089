//! Relay service — the pipeline orchestrator.
//!
//! Sequences inventory fetch, model invocation, intent extraction, entity
//! resolution, and action dispatch. Every stage failure folds into a terminal
//! [`RelayOutcome`]; the error channel of [`VoicePipeline::process`] stays
//! reserved for the internal class.

use voxrelay_domain::audio::AudioClip;
use voxrelay_domain::error::VoxRelayError;
use voxrelay_domain::intent::{ExtractError, extract_intent};
use voxrelay_domain::outcome::RelayOutcome;

use crate::ports::{CommandGateway, CommandInterpreter, InventorySource, VoicePipeline};
use crate::services::dispatch_service::{DispatchOutcome, DispatchService};
use crate::services::resolver_service::ResolverService;

/// Application service running the whole relay pipeline.
///
/// `inventory` serves the aggregate snapshot; the resolver holds its own
/// source for the per-kind listings (in production both are clones of the
/// same backend client).
pub struct RelayService<I, G, M> {
    inventory: I,
    interpreter: M,
    resolver: ResolverService<I>,
    dispatcher: DispatchService<G>,
}

impl<I, G, M> RelayService<I, G, M>
where
    I: InventorySource,
    G: CommandGateway,
    M: CommandInterpreter,
{
    /// Wire the pipeline from its stages.
    pub fn new(
        inventory: I,
        interpreter: M,
        resolver: ResolverService<I>,
        dispatcher: DispatchService<G>,
    ) -> Self {
        Self {
            inventory,
            interpreter,
            resolver,
            dispatcher,
        }
    }
}

impl<I, G, M> VoicePipeline for RelayService<I, G, M>
where
    I: InventorySource + Send + Sync,
    G: CommandGateway + Send + Sync,
    M: CommandInterpreter + Send + Sync,
{
    #[tracing::instrument(skip_all, fields(audio_bytes = audio.len()))]
    async fn process(&self, audio: AudioClip) -> Result<RelayOutcome, VoxRelayError> {
        let snapshot = match self.inventory.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "inventory fetch failed");
                return Ok(RelayOutcome::InventoryUnavailable);
            }
        };
        tracing::debug!(entities = snapshot.entity_count(), "inventory snapshot fetched");

        let reply = match self.interpreter.interpret(&snapshot, audio).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "model invocation failed");
                return Ok(RelayOutcome::ModelFailure {
                    detail: err.to_string(),
                });
            }
        };
        tracing::debug!(reply = %reply, "model reply received");

        let intent = match extract_intent(&reply) {
            Ok(intent) => intent,
            Err(err @ ExtractError::NoJsonFound) => {
                tracing::warn!(error = %err, "model reply unusable");
                return Ok(RelayOutcome::ReplyMissingJson);
            }
            Err(err @ ExtractError::MalformedJson(_)) => {
                tracing::warn!(error = %err, "model reply unusable");
                return Ok(RelayOutcome::ReplyMalformed);
            }
        };

        if intent.is_null() {
            tracing::debug!("model answered the explicit no-match object");
            return Ok(RelayOutcome::NothingMatched);
        }
        let Some(command) = intent.into_command() else {
            tracing::debug!("intent incomplete, nothing to dispatch");
            return Ok(RelayOutcome::NothingMatched);
        };
        tracing::info!(
            kind = %command.kind,
            name = %command.name,
            action = %command.action,
            "voice command recognized"
        );

        let id = match self.resolver.resolve(command.kind, &command.name).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                return Ok(RelayOutcome::EntityNotFound { name: command.name });
            }
            Err(err) => {
                tracing::warn!(error = %err, "entity resolution failed");
                return Ok(RelayOutcome::ResolutionFailed { kind: command.kind });
            }
        };

        let outcome = match self
            .dispatcher
            .dispatch(command.kind, &command.action, &id)
            .await
        {
            Ok(DispatchOutcome::Completed { body }) => RelayOutcome::Dispatched { body },
            Ok(DispatchOutcome::Refused { body, .. }) => RelayOutcome::Refused { body },
            Err(VoxRelayError::ActionNotAllowed { kind, .. }) => {
                RelayOutcome::ActionNotAllowed { kind }
            }
            Err(VoxRelayError::BackendStatus { status, body }) => {
                RelayOutcome::DispatchHttpError { status, body }
            }
            Err(err @ VoxRelayError::Internal(_)) => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, "action dispatch failed");
                RelayOutcome::DispatchFailed
            }
        };
        tracing::info!(outcome = outcome.kind_name(), "relay run finished");
        Ok(outcome)
    }
}
