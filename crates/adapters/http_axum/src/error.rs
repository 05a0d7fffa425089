use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use voxrelay_domain::error::VoxRelayError;

/// Failure surface of the HTTP layer.
///
/// Upload problems are the caller's fault and come back as `400` with the
/// user-facing message in the body. [`ApiError::Pipeline`] is the reserved
/// internal channel and maps to `500` with a generic body.
#[derive(Debug)]
pub enum ApiError {
    /// The form did not carry an `audio_file` field at all.
    MissingAudio,
    /// The field was present but had no filename or no bytes.
    EmptyAudio,
    /// The multipart stream itself could not be decoded.
    BadUpload(MultipartError),
    /// The pipeline raised an internal error.
    Pipeline(VoxRelayError),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::BadUpload(err)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAudio => (StatusCode::BAD_REQUEST, "No audio file was sent".to_string()),
            Self::EmptyAudio => (
                StatusCode::BAD_REQUEST,
                "No audio file was selected".to_string(),
            ),
            Self::BadUpload(err) => {
                tracing::warn!(error = %err, "rejecting unreadable multipart upload");
                (StatusCode::BAD_REQUEST, "No audio file was sent".to_string())
            }
            Self::Pipeline(err) => {
                // Debug keeps the boxed source visible; Display is just
                // "internal error".
                tracing::error!(error = ?err, "voice pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
