use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_FILTER: &str = "info,notes=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// Reads `NOTES_ADDR`, after loading a `.env` file when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        tolerate_missing(dotenvy::dotenv()).context("failed to load .env")?;
        Self::from_addr(std::env::var("NOTES_ADDR").ok().as_deref())
    }

    pub fn from_addr(addr: Option<&str>) -> anyhow::Result<Self> {
        let raw = addr.unwrap_or(DEFAULT_ADDR);
        let addr = raw
            .parse()
            .with_context(|| format!("invalid NOTES_ADDR {raw:?}"))?;
        Ok(Self { addr })
    }
}

/// A missing `.env` is fine; a present but unreadable or malformed one is not.
fn tolerate_missing<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error),
    }
}
