mod model;
mod server;

use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    startup::check_for_admin(&db, &config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    if config.allowed_origin == "*" {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origin = HeaderValue::from_str(&config.allowed_origin).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "ALLOWED_ORIGIN".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(layer.allow_origin(origin))
}
