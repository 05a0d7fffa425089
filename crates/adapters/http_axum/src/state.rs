//! Shared application state for axum handlers.

use std::sync::Arc;

use voxrelay_app::ports::VoicePipeline;

/// Application state shared across all axum handlers.
///
/// Generic over the pipeline implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so the pipeline itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<P> {
    /// The relay pipeline handling uploaded voice commands.
    pub pipeline: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

impl<P: VoicePipeline> AppState<P> {
    /// Create a new application state owning the pipeline.
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` pipeline.
    ///
    /// Use this when the pipeline needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arc(pipeline: Arc<P>) -> Self {
        Self { pipeline }
    }
}
