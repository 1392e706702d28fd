use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://ocat.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:3001";

/// Service settings, read from the environment at start-up.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let database_url =
            lookup("OCAT_DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_raw = lookup("OCAT_API_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid OCAT_API_BIND '{bind_raw}': {e}"))?;

        Ok(Self { database_url, bind })
    }
}
