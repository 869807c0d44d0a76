// Runtime configuration read from the environment.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const ADDR_VAR: &str = "POMODORO_ADDR";
pub const DATA_DIR_VAR: &str = "POMODORO_DATA_DIR";
pub const TICK_MS_VAR: &str = "POMODORO_TICK_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
    pub tick_period: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup(ADDR_VAR)
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{ADDR_VAR} is not a socket address"))?;
        let data_dir = lookup(DATA_DIR_VAR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let tick_ms = lookup(TICK_MS_VAR)
            .map(|raw| raw.parse::<u64>().with_context(|| format!("{TICK_MS_VAR} must be a number of milliseconds")))
            .transpose()?
            .unwrap_or(1_000);
        anyhow::ensure!(tick_ms > 0, "{TICK_MS_VAR} must be greater than zero");
        Ok(Self {
            addr,
            data_dir,
            tick_period: Duration::from_millis(tick_ms),
        })
    }
}
