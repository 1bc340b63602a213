// src/bin/api_server.rs

use estoque::infra::{config, telemetry};
use estoque::transport;
use estoque::ProductRepository;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let addr = config::server_addr()?;

    // The collection starts empty and is gone when the process exits.
    let app_state = transport::http::AppState::new(Arc::new(ProductRepository::new()));

    let app = transport::http::create_router(app_state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on http://{}", listener.local_addr()?);
    info!("Swagger UI available at http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received, in-memory products are discarded");
        })
        .await?;

    Ok(())
}
