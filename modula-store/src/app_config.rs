use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Named timezone setting; absent or empty falls back to UTC downstream.
    #[serde(default)]
    pub timezone_string: Option<String>,
}

impl Config {
    /// Layered load: `config/default`, then the RUN_MODE file, then an
    /// uncommitted `config/local`, then `MODULA__`-prefixed environment
    /// variables (e.g. `MODULA__SERVER__PORT=8080`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("MODULA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
