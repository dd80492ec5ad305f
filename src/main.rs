mod config;
mod routes;
mod services;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();

    if config.seed_demo {
        let seeded = services::surcharge::seed_demo(&state).await;
        tracing::info!(count = seeded.len(), "seeded demo surcharges");
    }

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR disabled; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "surcharge admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
