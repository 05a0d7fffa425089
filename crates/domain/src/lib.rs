//! # voxrelay-domain
//!
//! Pure domain model for the voxrelay voice-command relay.
//!
//! ## Responsibilities
//! - Foundational types: backend identifiers, error conventions
//! - Define **entity kinds** (devices, scenes, scene actions, groups) and the
//!   wire vocabulary shared by the device backend and the model
//! - Define **actions** (turn on, turn off, execute) and which kinds allow them
//! - Extract a structured **intent** from a free-text model reply
//! - Build **dispatch routes** (method + path) for validated commands
//! - Enumerate every terminal **outcome** of a relay run and render its
//!   user-facing message
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod action;
pub mod audio;
pub mod dispatch;
pub mod entity;
pub mod intent;
pub mod inventory;
pub mod kind;
pub mod outcome;
