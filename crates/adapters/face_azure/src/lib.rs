//! # facehub-adapter-face-azure
//!
//! Azure Face API adapter — implements the face-api port over the cloud
//! REST endpoints (`/face/v1.0` wire format).
//!
//! ## How it works
//!
//! A stateless request pipeline resolves the regional origin once, then
//! issues authenticated calls per operation. Every failure mode —
//! connection failure, timeout expiry, non-success status, malformed
//! body — is normalized into the single `ServiceError` kind; the cases
//! are distinguishable only by message text.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `facehub-app` and `facehub-domain`.

mod api;
mod client;
mod config;

pub use client::{AzureFaceClient, CONNECT_MESSAGE, MALFORMED_MESSAGE, Payload, TIMEOUT_MESSAGE};
pub use config::FaceApiConfig;
