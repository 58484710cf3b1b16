use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use cb_api::{
    config::ApiConfig,
    metrics::{self, metrics_handler, track_metrics},
    middleware::{cors::create_cors_layer, request_id::request_id_middleware},
    router,
    state::ApiState,
    tracing::init_tracing,
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);
    let metrics_handle = metrics::init_metrics()?;

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    // Outermost layer last: CORS, then request IDs so traces carry them
    let app = router::router()
        .with_state(ApiState::new(&config))
        .merge(metrics_routes)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(create_cors_layer(&config.parsed_allowed_origins()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, env = config.env.as_str(), "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}
