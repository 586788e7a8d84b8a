use adote_api::{
    config::AppConfig,
    routes,
    services::{store, upload::UploadStore},
    state::AppState,
};
use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use std::{fs, io::ErrorKind, path::Path, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config + admin flags ---
    let (cfg, args) = AppConfig::from_env_and_args()?;

    tracing::info!("Starting adote-api with config: {:?}", cfg);

    // --- Ensure upload directory exists ---
    if !Path::new(&cfg.upload_dir).exists() {
        fs::create_dir_all(&cfg.upload_dir)?;
        tracing::info!("Created upload directory at {}", cfg.upload_dir);
    }

    // --- Initialize SQLite connection ---
    let db_url = &cfg.database_url;
    let db_path = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("file:");

    // SQLx will not create the database file on connect; make sure the
    // parent directory and the file itself exist first.
    if !db_path.contains(":memory:") {
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
                tracing::info!("Created missing directory {:?}", parent);
            }
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(db_path)?;
    }

    let db = Arc::new(
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await?,
    );

    // --- One-shot admin modes ---
    if args.migrate {
        store::run_migrations(&db).await?;
        tracing::info!("Database migration complete.");
    }
    if args.seed {
        store::seed_donations(&db).await?;
        tracing::info!("Sample donations inserted.");
    }
    if args.migrate || args.seed {
        return Ok(()); // exit after admin work
    }

    // --- Build router ---
    let state = AppState {
        db,
        uploads: UploadStore::new(&cfg.upload_dir),
    };
    let app = routes::routes::app(state);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
