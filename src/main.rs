mod collect;
mod config;
mod emv;
mod errors;
mod export;
mod server;
mod session;
mod state;

use crate::collect::defaults::ParameterDefaults;
use crate::collect::ParameterCollector;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Structured logging (stderr, env-filtered)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("emv_desk starting");

    // Load config
    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    // The collector consumes the immutable default set once, up front.
    let collector = ParameterCollector::new(ParameterDefaults::default());
    let app_state = AppState::new(cfg.clone(), collector);

    let app = axum::Router::new()
        .route("/api/defaults", axum::routing::get(server::routes::get_defaults))
        .route("/api/state", axum::routing::get(server::routes::get_state))
        .route("/api/evaluate", axum::routing::post(server::routes::post_evaluate))
        .route("/api/export/csv", axum::routing::post(server::routes::export_csv))
        .route("/api/export/xlsx", axum::routing::post(server::routes::export_xlsx))
        .route("/api/counters", axum::routing::get(server::routes::get_counters))
        .route("/ws", axum::routing::get(server::ws::ws_handler))
        .fallback_service(
            tower_http::services::ServeDir::new(&cfg.dashboard_dir).fallback(
                tower_http::services::ServeFile::new(format!("{}/index.html", cfg.dashboard_dir)),
            ),
        )
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", cfg.server_port);
    tracing::info!("server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("bind error: {e}");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
