//! # facehubd — facehub daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing with the configured filter
//! - Construct the face-api client, cameras and entity registry
//! - Construct the face service, injecting adapters via port traits
//! - Run the initial full sync against the remote service
//! - Build the axum router, bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use config::Config;
use facehub_adapter_camera::HttpCamera;
use facehub_adapter_face_azure::AzureFaceClient;
use facehub_adapter_http_axum::registry::EntityRegistry;
use facehub_adapter_http_axum::router;
use facehub_adapter_http_axum::state::AppState;
use facehub_app::face_service::FaceService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let client = AzureFaceClient::new(&config.face);
    let camera = HttpCamera::new(
        config.cameras.sources.clone(),
        Duration::from_secs(config.cameras.timeout_secs),
    );
    let registry = EntityRegistry::new();

    // Service
    let mut service = FaceService::new(client, camera, registry.clone());

    // Mirror the remote group/person data before serving.
    if let Err(err) = service.update_store().await {
        tracing::error!(error = %err, "can't load data from face api");
        return Err(err.into());
    }

    // HTTP
    let state = AppState::new(service, registry);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(bind_addr = %bind_addr, "facehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
