//! # facehub-adapter-http-axum
//!
//! HTTP presentation adapter — the rendered side of the face integration.
//!
//! ## Responsibilities
//! - Hold the [`registry::EntityRegistry`], the presenter implementation
//!   the face service renders entity snapshots into
//! - Serve the rendered snapshots over JSON REST
//! - Accept commands and dispatch them fire-and-forget into the face
//!   service (`202 Accepted` regardless of remote outcome)
//!
//! ## Dependency rule
//! Depends on `facehub-app` and `facehub-domain`. Never on other adapters.

pub mod api;
pub mod error;
pub mod registry;
pub mod router;
pub mod state;
