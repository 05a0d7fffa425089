//! # voxrelay-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `InventorySource` — aggregate snapshot + per-kind collection listings
//!   - `CommandGateway` — execute one action call against the device backend
//!   - `CommandInterpreter` — turn a snapshot plus audio into a model reply
//! - Define the **driving/inbound port**:
//!   - `VoicePipeline` — run the whole relay pipeline for one uploaded clip
//! - Implement the pipeline as services:
//!   - `ResolverService` — name → backend identifier, against a fresh listing
//!   - `DispatchService` — validate an action and execute its route
//!   - `RelayService` — orchestrate fetch → interpret → extract → resolve →
//!     dispatch, folding every stage failure into a terminal outcome
//!
//! ## Dependency rule
//! Depends on `voxrelay-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
