use std::env;

use tracing::info;

pub struct Config {
    pub search_url: String,
    pub session_path: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            search_url: try_load("SEARCH_URL", "http://127.0.0.1:3000/search"),
            session_path: try_load("SESSION_PATH", "session.json"),
        }
    }
}

fn try_load(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
