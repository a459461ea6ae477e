use crate::infrastructure::scraper::DEFAULT_TIMEOUT;
use analyzer_errors::AppError;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Runtime settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub check_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `DATABASE_URL` is required. `BIND_ADDR` wins over `PORT`, which binds
    /// on all interfaces.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::Internal("DATABASE_URL must be set".to_string()))?;

        let bind_addr = match (lookup("BIND_ADDR"), lookup("PORT")) {
            (Some(addr), _) => addr,
            (None, Some(port)) => format!("0.0.0.0:{}", port),
            (None, None) => DEFAULT_BIND_ADDR.to_string(),
        };
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Internal(format!("Invalid bind address {}: {}", bind_addr, e)))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                AppError::Internal(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", v))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let check_timeout = match lookup("CHECK_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| AppError::Internal(format!("Invalid CHECK_TIMEOUT_SECS: {}", v)))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            check_timeout,
        })
    }
}
