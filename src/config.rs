use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};

/// What to do with a fetch that completes after a newer one was submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every completion; whichever settles last is shown.
    #[default]
    LastSettled,
    /// Only apply the completion of the most recently submitted search.
    LatestRequest,
}

impl FromStr for StalePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-settled" => Ok(StalePolicy::LastSettled),
            "latest-request" => Ok(StalePolicy::LatestRequest),
            other => Err(anyhow!(
                "unknown STALE_POLICY {:?}, expected last-settled or latest-request",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_filter: String,
    pub stale_policy: StalePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            stale_policy: StalePolicy::default(),
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = lookup("WALLET_VIEWER_LOG") {
            config.log_file = PathBuf::from(path);
        }
        if let Some(filter) = lookup("RUST_LOG") {
            config.log_filter = filter;
        }
        if let Some(policy) = lookup("STALE_POLICY") {
            config.stale_policy = policy.parse()?;
        }

        Ok(config)
    }
}

/// Sends tracing output to the log file; stdout belongs to the terminal UI.
pub fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
