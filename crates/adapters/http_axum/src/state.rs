//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use facehub_app::face_service::FaceService;
use facehub_app::ports::{Camera, FaceApi};

use crate::registry::EntityRegistry;

/// Application state shared across all axum handlers.
///
/// Generic over the face-api and camera port types to avoid dynamic
/// dispatch. The face service sits behind a mutex so dispatched commands
/// never interleave mid-operation; the registry is the read side and
/// needs no service lock. `Clone` is implemented manually so the service
/// itself does not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<A, C> {
    /// Command dispatch target.
    pub service: Arc<Mutex<FaceService<A, C, EntityRegistry>>>,
    /// Rendered entity snapshots.
    pub registry: EntityRegistry,
}

impl<A, C> Clone for AppState<A, C> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            registry: self.registry.clone(),
        }
    }
}

impl<A, C> AppState<A, C>
where
    A: FaceApi + Send + Sync + 'static,
    C: Camera + Send + Sync + 'static,
{
    /// Create state from a service and the registry it renders into.
    #[must_use]
    pub fn new(service: FaceService<A, C, EntityRegistry>, registry: EntityRegistry) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
            registry,
        }
    }
}
