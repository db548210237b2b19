use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use catalog::DEFAULT_STORE_KEY;

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub store_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("SERVER_PORT", "3000"),
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379"),
            store_key: try_load("STORE_KEY", DEFAULT_STORE_KEY),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
