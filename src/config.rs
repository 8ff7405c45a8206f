// src/config.rs
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "artifacts/price_model.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub msg: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.var, self.msg)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
    /// Optional; enables the "unseen category" notes on results.
    pub encoder_path: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Where `/static/main.css` and `/static/htmx.js` are read from.
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_path = get("PRICE_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let encoder_path = get("ENCODER_PATH").map(PathBuf::from);

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse().map_err(|e| ConfigError {
            var: "BIND_ADDR",
            msg: format!("'{bind_raw}': {e}"),
        })?;

        let max_workers = match get("MAX_WORKERS") {
            None => DEFAULT_MAX_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError {
                        var: "MAX_WORKERS",
                        msg: format!("'{raw}' is not a positive integer"),
                    })
                }
            },
        };

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Ok(Self {
            model_path,
            encoder_path,
            bind_addr,
            max_workers,
            static_dir,
        })
    }
}
