//! cms-access - Admin access-control service
//!
//! Long-running service that:
//! - Manages the role/capability catalog and protected core roles
//! - Manages user groups and their memberships
//! - Resolves role names into effective capabilities for the admin pages

use cms_access::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cms_access=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting cms-access");

    // Pool, migrations and one-time role seeding
    let state = AppState::new(&config).await?;

    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("cms-access HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
