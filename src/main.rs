//! Bookshelf Server
//!
//! REST CRUD API over a book catalog backed by PostgreSQL.

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_server::{
    api,
    config::{AppConfig, StoreBackend},
    store::{DbPool, OrmBookStore, PoolConfig, SqlBookStore},
    AppState, BookStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookshelf_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.json_output() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Bookshelf Server v{}", env!("CARGO_PKG_VERSION"));

    // Build the configured store backend; startup aborts on connection failure
    let database_url = config.database.connection_url();
    let store: Arc<dyn BookStore> = match config.database.backend {
        StoreBackend::Sql => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .connect(&database_url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Connected to database (sql backend)");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database migrations completed");

            Arc::new(SqlBookStore::new(pool))
        }
        StoreBackend::Orm => {
            let pool = DbPool::new(
                PoolConfig::new(&database_url)
                    .with_max_size(config.database.max_connections)
                    .with_min_idle(Some(config.database.min_connections)),
            )
            .await
            .expect("Failed to connect to database");

            tracing::info!("Connected to database (orm backend)");

            let store = OrmBookStore::new(pool);
            store
                .ensure_schema()
                .await
                .expect("Failed to create database schema");

            tracing::info!("Database schema ensured");

            Arc::new(store)
        }
    };

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let app = create_router(state);

    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(state)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
