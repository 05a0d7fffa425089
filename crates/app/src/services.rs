//! Application services — the relay pipeline, stage by stage.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod dispatch_service;
pub mod relay_service;
pub mod resolver_service;
