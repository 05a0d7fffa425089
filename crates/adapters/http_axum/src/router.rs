//! Axum router assembly.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use voxrelay_app::ports::VoicePipeline;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the health probe and the voice-command upload endpoint. The
/// recording front-end is served from another origin, so CORS is left
/// permissive. A [`TraceLayer`] logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<P>(state: AppState<P>) -> Router
where
    P: VoicePipeline + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/process-audio", post(crate::api::process_audio::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health_check() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}
