use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Storefront products/users/items API")]
pub struct Args {
    /// Host to bind to (overrides STOREFRONT_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides STOREFRONT_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides STOREFRONT_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Apply the bootstrap schema and exit
    #[arg(long)]
    pub migrate: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and migrate flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        let args = Args::parse();
        let migrate = args.migrate;
        Ok((Self::merge(args)?, migrate))
    }

    /// Merge explicit arguments over the environment, then over defaults.
    pub fn merge(args: Args) -> Result<Self> {
        let env_host = env::var("STOREFRONT_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("STOREFRONT_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing STOREFRONT_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading STOREFRONT_PORT"),
        };
        let env_db = env::var("STOREFRONT_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/storefront.db".into());

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
