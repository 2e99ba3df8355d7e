mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::jwt::JwtKeys,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::bootstrap_admin(&db, &config).await?;

    let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_expires_in_hours);

    let app = router::router()
        .with_state(AppState::new(db, jwt))
        .layer(TraceLayer::new_for_http())
        .layer(startup::cors_layer(&config));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
