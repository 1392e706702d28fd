use std::env;
use std::net::SocketAddr;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Web front-end settings, read from the environment at start-up.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub api_url: String,
    pub bind: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let api_url = lookup("OCAT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let bind_raw = lookup("OCAT_WEB_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid OCAT_WEB_BIND '{bind_raw}': {e}"))?;

        Ok(Self { api_url, bind })
    }
}
