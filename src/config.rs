use std::env;
use std::net::SocketAddr;

use thiserror::Error;

/// Default gRPC listen address.
pub const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime configuration for the record server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the gRPC transport binds to.
    pub grpc_addr: SocketAddr,
    /// Address for the HTTP transport; unset disables it.
    pub http_addr: Option<SocketAddr>,
    /// Start with the sample students loaded.
    pub seed: bool,
}

impl Config {
    /// Load `.env` (if present) and read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::debug!(
            grpc_addr = %config.grpc_addr,
            http_addr = ?config.http_addr,
            seed = config.seed,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let grpc_addr = match optional("STUDENTS_GRPC_ADDR") {
            Some(value) => parse_addr("STUDENTS_GRPC_ADDR", value)?,
            None => DEFAULT_GRPC_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "STUDENTS_GRPC_ADDR",
                    value: DEFAULT_GRPC_ADDR.to_string(),
                })?,
        };

        let http_addr = optional("STUDENTS_HTTP_ADDR")
            .map(|value| parse_addr("STUDENTS_HTTP_ADDR", value))
            .transpose()?;

        let seed = optional("STUDENTS_SEED")
            .map(|value| parse_bool("STUDENTS_SEED", value))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            grpc_addr,
            http_addr,
            seed,
        })
    }
}

fn parse_addr(key: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
