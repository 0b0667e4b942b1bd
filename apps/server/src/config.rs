use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `GYM_*` variables, loading a `.env` file first when present.
    /// `DATABASE_URL` takes precedence over `GYM_DB_PATH`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GYM_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid GYM_LISTEN_ADDR")?;
        let db_path = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("GYM_DB_PATH"))
            .unwrap_or_else(|_| DEFAULT_DB_PATH.into());
        let cors_allow = parse_origins(
            &std::env::var("GYM_CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        );
        let timeout_ms: u64 = std::env::var("GYM_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
