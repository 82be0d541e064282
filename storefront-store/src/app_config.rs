use serde::Deserialize;
use std::env;
use std::time::Duration;
use storefront_core::RunMode;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub run_mode: RunMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Base URL of the items API; required in production
    pub api_base_url: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 { 10 }

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl InventoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// `STOREFRONT__APP__RUN_MODE` takes precedence over `RUN_MODE`; unset means development
pub fn resolve_run_mode(
    app_run_mode: Option<String>,
    run_mode: Option<String>,
) -> Result<RunMode, config::ConfigError> {
    match app_run_mode.or(run_mode) {
        Some(mode) => mode
            .parse()
            .map_err(|e: storefront_core::CoreError| config::ConfigError::Message(e.to_string())),
        None => Ok(RunMode::Development),
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = resolve_run_mode(
            env::var("STOREFRONT__APP__RUN_MODE").ok(),
            env::var("RUN_MODE").ok(),
        )?;
        Self::load_from("config", run_mode)
    }

    /// Layered load: `{dir}/default`, `{dir}/{run_mode}`, `{dir}/local`, then `STOREFRONT__*` env vars
    pub fn load_from(dir: &str, run_mode: RunMode) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("app.run_mode", run_mode.as_str())?
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            // Optional per-mode overrides
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg. `STOREFRONT__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize::<Self>()?.ensure_run_mode(run_mode)
    }

    /// The run mode that selected the file layer must be the one the app runs in
    fn ensure_run_mode(self, loaded: RunMode) -> Result<Self, config::ConfigError> {
        if self.app.run_mode != loaded {
            return Err(config::ConfigError::Message(format!(
                "app.run_mode is {} but the {} configuration was loaded",
                self.app.run_mode, loaded
            )));
        }
        Ok(self)
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_toml() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 3000
            "#,
        )
        .unwrap();

        assert_eq!(config.app.run_mode, RunMode::Development);
        assert_eq!(config.inventory.api_base_url, None);
        assert_eq!(config.inventory.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_production_from_toml() {
        let config = Config::from_toml(
            r#"
            [app]
            run_mode = "production"
            [server]
            port = 8080
            [inventory]
            api_base_url = "http://items.test"
            timeout_seconds = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.app.run_mode, RunMode::Production);
        assert_eq!(config.inventory.api_base_url.as_deref(), Some("http://items.test"));
        assert_eq!(config.inventory.timeout_seconds, 3);
    }

    #[test]
    fn test_unknown_run_mode_is_rejected() {
        let result = Config::from_toml(
            r#"
            [app]
            run_mode = "staging"
            [server]
            port = 3000
            [inventory]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_layered_files() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../config");

        let production = Config::load_from(dir, RunMode::Production).unwrap();
        assert_eq!(production.app.run_mode, RunMode::Production);
        assert_eq!(production.server.port, 8080);
        assert_eq!(production.inventory.timeout_seconds, 5);

        let development = Config::load_from(dir, RunMode::Development).unwrap();
        assert_eq!(development.app.run_mode, RunMode::Development);
        assert_eq!(development.server.port, 3000);
    }

    #[test]
    fn test_resolve_run_mode() {
        assert_eq!(resolve_run_mode(None, None).unwrap(), RunMode::Development);
        assert_eq!(
            resolve_run_mode(None, Some("production".to_string())).unwrap(),
            RunMode::Production
        );
        // The app-level override also picks the production file layer
        assert_eq!(
            resolve_run_mode(Some("production".to_string()), None).unwrap(),
            RunMode::Production
        );
        assert_eq!(
            resolve_run_mode(Some("Development".to_string()), Some("production".to_string())).unwrap(),
            RunMode::Development
        );
        assert!(resolve_run_mode(None, Some("staging".to_string())).is_err());
    }

    #[test]
    fn test_run_mode_mismatch_is_rejected() {
        let config = Config::from_toml(
            r#"
            [app]
            run_mode = "production"
            [server]
            port = 3000
            "#,
        )
        .unwrap();

        assert!(config.clone().ensure_run_mode(RunMode::Development).is_err());
        assert!(config.ensure_run_mode(RunMode::Production).is_ok());
    }

    #[test]
    fn test_run_mode_is_case_insensitive() {
        let config = Config::from_toml(
            r#"
            [app]
            run_mode = "Production"
            [server]
            port = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.app.run_mode, RunMode::Production);
    }
}
