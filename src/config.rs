use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: String,
    pub database_url: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "REST API for the adoption charity site")]
pub struct Args {
    /// Host to bind to (overrides ADOTE_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides ADOTE_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory where uploaded images are stored (overrides ADOTE_UPLOAD_DIR)
    #[arg(long)]
    pub upload_dir: Option<String>,

    /// Database URL (overrides ADOTE_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Run migrations and exit
    #[arg(long)]
    pub migrate: bool,

    /// Insert the sample donations and exit
    #[arg(long)]
    pub seed: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig plus the
    /// one-shot admin flags.
    pub fn from_env_and_args() -> Result<(Self, Args)> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("ADOTE_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("ADOTE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing ADOTE_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3001,
            Err(err) => return Err(err).context("reading ADOTE_PORT"),
        };
        let env_uploads = env::var("ADOTE_UPLOAD_DIR").unwrap_or_else(|_| "./uploads".into());
        let env_db =
            env::var("ADOTE_DATABASE_URL").unwrap_or_else(|_| "sqlite://./data/adote.db".into());

        // --- Merge ---
        let cfg = Self {
            host: args.host.clone().unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            upload_dir: args.upload_dir.clone().unwrap_or(env_uploads),
            database_url: args.database_url.clone().unwrap_or(env_db),
        };

        Ok((cfg, args))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
