//! # facehub-adapter-camera
//!
//! Camera adapter — implements the camera port for face capture.
//!
//! Two flavors:
//! - [`HttpCamera`] — fetches still images from per-source snapshot URLs
//!   (the common case for network cameras exposing a JPEG endpoint)
//! - [`StaticCamera`] — serves fixed image files from disk, for demos and
//!   tests
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `facehub-app` and `facehub-domain`.

mod http;
mod still;

pub use http::HttpCamera;
pub use still::StaticCamera;
