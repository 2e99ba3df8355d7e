use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{config::Config, error::AppError, service::admin::AdminService};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account exists.
///
/// Public registration cannot create admins, so the first admin comes from
/// `ADMIN_EMAIL` / `ADMIN_PASSWORD`. When no admin exists and those are not set a
/// warning is logged and the server starts anyway.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the optional bootstrap credentials
///
/// # Returns
/// - `Ok(())` - An admin exists or was created, otherwise a warning was logged
/// - `Err(AppError)` - Database or hashing error while creating the admin
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let admin_service = AdminService::new(db);

    if admin_service.admin_exists().await? {
        return Ok(());
    }

    match &config.admin_bootstrap {
        Some(bootstrap) => {
            match admin_service
                .bootstrap_admin(&bootstrap.email, &bootstrap.password)
                .await?
            {
                Some(admin) => {
                    tracing::info!("Created bootstrap admin account {}", admin.email)
                }
                None => tracing::warn!(
                    "ADMIN_EMAIL {} belongs to an existing non-admin account; no admin was created",
                    bootstrap.email
                ),
            }
        }
        None => {
            tracing::warn!(
                "No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
            );
        }
    }

    Ok(())
}

/// Builds the CORS layer from the configured origins.
///
/// An empty origin list allows any origin. Origins that are not valid header values are
/// skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if config.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
