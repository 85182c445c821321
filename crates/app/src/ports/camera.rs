//! Camera port — image capture for face attachment.

use std::future::Future;

use facehub_domain::error::ServiceError;

/// Provides current image bytes for a named camera source.
pub trait Camera {
    /// Fetch the current image from the named source.
    fn capture(&self, source: &str)
    -> impl Future<Output = Result<Vec<u8>, ServiceError>> + Send;
}
