use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration. Every field can be overridden with a
/// `FITGATE_`-prefixed environment variable, e.g. `FITGATE_DATABASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub listen_addr: String,
    /// Size of the SQLite pool. One shared connection unless raised.
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:fitness_tracker.db".to_string(),
            loglevel: "info".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            max_connections: 1,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("FITGATE_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
