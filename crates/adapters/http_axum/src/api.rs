//! Handler for the voice-command upload endpoint.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use voxrelay_app::ports::VoicePipeline;
use voxrelay_domain::audio::AudioClip;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body carrying the user-facing message.
#[derive(Serialize)]
pub struct ReplyBody {
    pub text: String,
}

/// Possible responses from the process endpoint.
pub enum ProcessResponse {
    Ok(Json<ReplyBody>),
}

impl IntoResponse for ProcessResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /process-audio`
///
/// Expects a multipart form with an `audio_file` field. Every terminal
/// pipeline outcome comes back as `200` with its message; only the
/// reserved internal channel surfaces as `500`.
pub async fn process_audio<P>(
    State(state): State<AppState<P>>,
    mut multipart: Multipart,
) -> Result<ProcessResponse, ApiError>
where
    P: VoicePipeline + Send + Sync + 'static,
{
    let mut clip = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("audio_file") {
            continue;
        }
        let unnamed = field.file_name().is_none_or(str::is_empty);
        let mime = field.content_type().map(|mime| mime.to_string());
        let bytes = field.bytes().await?;
        if unnamed || bytes.is_empty() {
            return Err(ApiError::EmptyAudio);
        }
        clip = Some(AudioClip::new(bytes.to_vec(), mime));
        break;
    }
    let clip = clip.ok_or(ApiError::MissingAudio)?;

    let outcome = state
        .pipeline
        .process(clip)
        .await
        .map_err(ApiError::Pipeline)?;
    Ok(ProcessResponse::Ok(Json(ReplyBody {
        text: outcome.message(),
    })))
}
