//! # facehub-domain
//!
//! Pure domain model for the facehub face-recognition integration.
//!
//! ## Responsibilities
//! - Foundational types: slug normalization, typed identifiers
//!   (slug-based group ids, opaque remote person ids)
//! - Define the **mirrored store** — the local cache of remote
//!   group → person data, mutated only after confirmed remote success
//! - Define the **group entity view** — a read-only projection whose state
//!   is the person count and whose attributes are the name → id mapping
//! - Define the single-kind **service error** every operation reports
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod entity;
pub mod error;
pub mod id;
pub mod slug;
pub mod store;
