use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use dotenvy::Error as DotenvError;
use flightmock_sample::RecordMix;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_BATCH_SIZE: usize = 5;
const PORT_ENV: &str = "PORT";
const FLIGHTMOCK_PORT_ENV: &str = "FLIGHTMOCK_PORT";
const ADDR_ENV: &str = "FLIGHTMOCK_ADDR";
const BATCH_SIZE_ENV: &str = "FLIGHTMOCK_BATCH_SIZE";
const INCLUDE_ALERTS_ENV: &str = "FLIGHTMOCK_INCLUDE_ALERTS";
const INCLUDE_MESSAGES_ENV: &str = "FLIGHTMOCK_INCLUDE_MESSAGES";
const SEED_ENV: &str = "FLIGHTMOCK_SEED";

/// Configuration consumed by the runtime before spinning up Axum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Number of records returned per request.
    pub batch_size: usize,
    /// When `false`, batches contain flight records only.
    pub include_alerts: bool,
    /// Adds the human-readable `message` field to every served record.
    pub include_messages: bool,
    /// Seeds the random source for reproducible output.
    pub seed: Option<u64>,
}

impl ServiceConfig {
    /// Loads configuration from `FLIGHTMOCK_*` environment variables.
    ///
    /// Values from a local `.env` file (parsed via [`dotenvy::dotenv_override`]) override whatever is already set in
    /// the process environment, which makes local development workflows predictable.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env_overrides()?;

        let addr = env::var(ADDR_ENV)
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let bind_addr = SocketAddr::new(addr, resolve_port());

        let batch_size = env::var(BATCH_SIZE_ENV)
            .ok()
            .map(|value| parse_batch_size(&value))
            .transpose()?
            .unwrap_or(DEFAULT_BATCH_SIZE);

        let include_alerts = read_flag(INCLUDE_ALERTS_ENV)?.unwrap_or(true);
        let include_messages = read_flag(INCLUDE_MESSAGES_ENV)?.unwrap_or(false);

        let seed = env::var(SEED_ENV)
            .ok()
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value))
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            batch_size,
            include_alerts,
            include_messages,
            seed,
        })
    }

    /// Returns a builder for programmatic overrides.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    pub fn record_mix(&self) -> RecordMix {
        RecordMix::from_include_alerts(self.include_alerts)
    }
}

impl Default for ServiceConfig {
    /// Binds to `0.0.0.0:8000` and serves five mixed records per request.
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            batch_size: DEFAULT_BATCH_SIZE,
            include_alerts: true,
            include_messages: false,
            seed: None,
        }
    }
}

/// Builder type for [`ServiceConfig`].
#[derive(Default, Clone, Debug)]
pub struct ServiceConfigBuilder {
    bind_addr: Option<SocketAddr>,
    batch_size: Option<usize>,
    include_alerts: Option<bool>,
    include_messages: Option<bool>,
    seed: Option<u64>,
}

impl ServiceConfigBuilder {
    /// Sets the address for the embedded Axum listener.
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn include_alerts(mut self, include_alerts: bool) -> Self {
        self.include_alerts = Some(include_alerts);
        self
    }

    pub fn include_messages(mut self, include_messages: bool) -> Self {
        self.include_messages = Some(include_messages);
        self
    }

    /// Makes every batch reproducible from process start.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the final configuration, rejecting an empty batch size.
    pub fn try_build(self) -> Result<ServiceConfig, ConfigError> {
        if self.batch_size == Some(0) {
            return Err(ConfigError::InvalidBatchSize("0".to_owned()));
        }
        Ok(self.build())
    }

    /// Builds the final configuration without validation.
    pub fn build(self) -> ServiceConfig {
        let defaults = ServiceConfig::default();
        ServiceConfig {
            bind_addr: self.bind_addr.unwrap_or(defaults.bind_addr),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            include_alerts: self.include_alerts.unwrap_or(defaults.include_alerts),
            include_messages: self.include_messages.unwrap_or(defaults.include_messages),
            seed: self.seed,
        }
    }
}

/// Errors that can occur while building [`ServiceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid batch size (expected a positive integer): {0}")]
    InvalidBatchSize(String),
    #[error("invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
    #[error("invalid random seed: {0}")]
    InvalidSeed(String),
    #[error("failed to load .env overrides: {0}")]
    Dotenv(#[from] DotenvError),
}

fn load_env_overrides() -> Result<(), ConfigError> {
    match dotenvy::dotenv_override() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Dotenv(err)),
    }
}

fn resolve_port() -> u16 {
    env::var(PORT_ENV)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .or_else(|| {
            env::var(FLIGHTMOCK_PORT_ENV)
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
        })
        .unwrap_or(DEFAULT_PORT)
}

fn parse_batch_size(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidBatchSize(value.to_owned())),
    }
}

fn read_flag(name: &'static str) -> Result<Option<bool>, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
