use scoreboard::{
    build_router, AppConfig, AppState, InMemorySessionStore, PostgresSessionStore,
    SessionService, SessionStore,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoreboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(addr = %config.addr, "Starting scoreboard server");

    let store: Arc<dyn SessionStore> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            let store = PostgresSessionStore::new(pool);
            store.init_schema().await?;
            info!("Using PostgreSQL session store");
            Arc::new(store)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
    };

    // One long-lived service shared by every request
    let app_state = AppState::new(Arc::new(SessionService::new(store)));
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
