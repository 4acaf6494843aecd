//! Application settings, read from `settings.toml` with `SATANG_`
//! environment overrides.
//!
//! The `[database]` section selects the backend: absent or `memory`
//! keeps everything in process memory, `sqlite` makes the store durable.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite { path: String },
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Option<Database>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000_i64)?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("SATANG").separator("__"))
            .build()?
            .try_deserialize()
    }
}
