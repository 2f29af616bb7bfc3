use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::resumes::id::IdStrategy;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match the local development setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub id_strategy: IdStrategy,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            storage_dir: PathBuf::from(env_or("STORAGE_DIR", "stored_resumes")),
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS))?,
            id_strategy: IdStrategy::from_str(&env_or("RESUME_ID_STRATEGY", "timestamp"))?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address '{}:{}'", self.host, self.port))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated origin list. Each origin must be an http(s) URL.
fn parse_origins(raw: &str) -> Result<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    for origin in &origins {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            bail!("ALLOWED_ORIGINS entry '{origin}' must start with http:// or https://");
        }
    }
    Ok(origins)
}
