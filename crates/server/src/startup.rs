use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::key_value::{
    repository::{KeyValueRepository, SeaOrmKeyValueRepository},
    service::KeyValueService,
};
use service::storage::memory_kv_store::MemoryKeyValueRepository;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Select the backing store. `STORE_BACKEND=memory` runs without a database;
/// the default is the Postgres-backed repository.
async fn build_repository() -> anyhow::Result<Arc<dyn KeyValueRepository>> {
    let backend = env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".to_string());
    match backend.as_str() {
        "memory" => {
            info!(backend = "memory", "using in-memory store backend");
            Ok(MemoryKeyValueRepository::new())
        }
        "postgres" => {
            let db = match configs::load_default() {
                Ok(mut cfg) => {
                    cfg.database.normalize_from_env();
                    cfg.database.validate()?;
                    models::db::connect_with_config(&cfg.database).await?
                }
                Err(_) => models::db::connect().await?,
            };
            info!(backend = "postgres", "connected to database");
            Ok(Arc::new(SeaOrmKeyValueRepository { db }))
        }
        other => Err(anyhow::anyhow!("unknown STORE_BACKEND '{}'", other)),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let repo = build_repository().await?;
    let state = ServerState { kv: Arc::new(KeyValueService::new(repo)) };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting key-value server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
