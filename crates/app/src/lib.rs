//! # facehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `FaceApi` — typed remote operations against the vision service
//!   - `Camera` — image bytes for a named camera source
//!   - `StatePresenter` — rendering of entity snapshots
//! - Define the **command surface**: an explicit [`command::Command`]
//!   enumeration with validated payload fields
//! - Provide the [`face_service::FaceService`] use-case object: the sole
//!   owner of the mirrored store and the group-entity handles
//!
//! ## Dependency rule
//! Depends on `facehub-domain` only (plus `futures` for the full-sync
//! join). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod command;
pub mod face_service;
pub mod ports;
