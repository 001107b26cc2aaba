use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use facex_gateway::app_state::AppState;
use facex_gateway::config::AppConfig;
use facex_gateway::routes;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing facex-gateway server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!(
        "facex_uploads_total",
        "Jobs successfully submitted to FaceX, by kind"
    );
    metrics::describe_counter!(
        "facex_upload_failures_total",
        "Photo uploads rejected by FaceX, by kind"
    );
    metrics::describe_counter!(
        "facex_backend_errors_total",
        "FaceX errors and unexpected responses, by operation"
    );

    tracing::info!(
        facex_url = %config.facex_url,
        timeout_secs = config.facex_timeout_secs,
        search_timeout_secs = config.facex_search_timeout_secs,
        "Initializing FaceX client"
    );
    let state = AppState::from_config(&config).expect("Failed to initialize FaceX client");

    let app = routes::router(state, prometheus_handle, config.max_upload_bytes);

    tracing::info!("Starting facex-gateway on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
