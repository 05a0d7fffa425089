//! # voxrelay-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the inbound HTTP surface: `GET /health` and
//!   `POST /process-audio` (multipart upload).
//! - Decode the multipart form, pull out the `audio_file` field and hand
//!   it to the [`VoicePipeline`] port as an [`AudioClip`].
//! - Translate pipeline outcomes and failures into HTTP responses.
//!
//! ## Dependency rule
//! Depends on `voxrelay-app` (ports) and `voxrelay-domain`. It must not
//! know which concrete backend or model adapter sits behind the pipeline.
//!
//! [`VoicePipeline`]: voxrelay_app::ports::VoicePipeline
//! [`AudioClip`]: voxrelay_domain::audio::AudioClip

pub mod api;
pub mod error;
pub mod router;
pub mod state;
