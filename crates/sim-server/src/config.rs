use std::{
    env,
    net::{AddrParseError, SocketAddr},
    num::ParseIntError,
};

use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

const ENV_ADDR_KEY: &str = "SIM_SERVER_ADDR";
const ENV_SEED_KEY: &str = "SIM_SEED";
const ENV_LOG_KEY: &str = "SIM_LOG";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub seed: Option<u64>,
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SIM_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("SIM_SEED must be an unsigned 64-bit integer: {0}")]
    InvalidSeed(#[source] ParseIntError),
    #[error("SIM_LOG must not be empty or whitespace")]
    InvalidLogFilter,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match read_var(ENV_ADDR_KEY)? {
            Some(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            None => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(ConfigError::InvalidListenAddr)?,
        };

        let seed = match read_var(ENV_SEED_KEY)? {
            Some(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(ConfigError::InvalidSeed)?,
            ),
            None => None,
        };

        let log_filter = match read_var(ENV_LOG_KEY)? {
            Some(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidLogFilter);
                }
                value
            }
            None => DEFAULT_LOG_FILTER.to_owned(),
        };

        Ok(Self {
            listen_addr,
            seed,
            log_filter,
        })
    }
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}
