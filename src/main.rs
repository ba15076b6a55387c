mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::from_config(&config);

    // SSR is optional: without a Leptos build the JSON API still serves.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos unavailable, serving API only");
            routes::app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        latency_ms = config.simulated_latency.as_millis(),
        seeded = config.seed_demo_data,
        "warehouse listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
