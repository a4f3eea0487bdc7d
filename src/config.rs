use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub poll_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("DATA_DIR")
            .unwrap_or_else(|_| "data".into())
            .into();
        let poll_secs = match std::env::var("STREAM_POLL_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("STREAM_POLL_SECS must be a whole number of seconds")?,
            Err(_) => 5,
        };
        Ok(Self {
            data_dir,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }
}
