//! kintree-server - genealogical record server over a forest of members

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kintree_server::api::{create_router, AppState};
use kintree_server::auth::TokenSigner;
use kintree_server::config::{AdminConfig, Config};
use kintree_server::forest::FamilyService;
use kintree_server::storage::{FsPhotoStore, SqliteStore};

#[derive(Parser, Debug)]
#[command(name = "kintree-server")]
#[command(about = "Genealogical record server over a forest of members")]
struct Args {
    /// Host to bind to
    #[arg(long, env = "KINTREE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "KINTREE_PORT", default_value = "3000")]
    port: u16,

    /// Path to SQLite database
    #[arg(long, env = "KINTREE_DATABASE_PATH", default_value = "./kintree.db")]
    database: String,

    /// Directory for uploaded member photos
    #[arg(long, env = "KINTREE_UPLOADS_DIR", default_value = "./uploads")]
    uploads_dir: String,

    /// Admin username for /login
    #[arg(long, env = "KINTREE_ADMIN_USERNAME", default_value = "admin")]
    admin_username: String,

    /// Admin password for /login
    #[arg(long, env = "KINTREE_ADMIN_PASSWORD", default_value = "family2026")]
    admin_password: String,

    /// Secret the token signing key is derived from
    #[arg(long, env = "KINTREE_TOKEN_SECRET", default_value = "change-me-token-secret")]
    token_secret: String,

    /// Lifetime of issued bearer tokens, in hours
    #[arg(long, env = "KINTREE_TOKEN_TTL_HOURS", default_value = "12")]
    token_ttl_hours: i64,

    /// Log level
    #[arg(long, env = "KINTREE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            database_path: self.database,
            uploads_dir: self.uploads_dir,
            log_level: self.log_level,
            token_secret: self.token_secret,
            admin: AdminConfig {
                username: self.admin_username,
                password: self.admin_password,
                token_ttl_hours: self.token_ttl_hours,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting kintree-server v{}", env!("CARGO_PKG_VERSION"));

    let store = SqliteStore::new(&config.database_path)?;
    tracing::info!(path = %config.database_path, "database ready");

    let photos = FsPhotoStore::new(&config.uploads_dir)?;

    let state = Arc::new(AppState {
        service: FamilyService::new(Arc::new(store)),
        photos: Arc::new(photos),
        tokens: TokenSigner::from_secret(&config.token_secret),
        admin: config.admin.clone(),
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
