use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// Remote gateway registry configuration
    pub registry: RegistryConfig,

    /// Path configuration
    pub paths: PathConfig,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct RegistryConfig {
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct PathConfig {
    pub static_dir: PathBuf,
    pub index_html: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. This is intentional as the
    /// application cannot function without valid configuration.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| {
            Self::load_internal().expect("failed to load application configuration")
        })
    }

    fn load_internal() -> Result<Self> {
        let ui = UiConfig::load()?;
        let registry = RegistryConfig::load()?;
        let paths = PathConfig::load()?;

        Ok(Self {
            ui,
            registry,
            paths,
        })
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let port = parse_port(env::var("UI_PORT").ok())?;

        Ok(Self { port })
    }
}

impl RegistryConfig {
    fn load() -> Result<Self> {
        let base_url = normalize_base_url(env::var("REGISTRY_URL").ok());

        Ok(Self { base_url })
    }
}

impl PathConfig {
    fn load() -> Result<Self> {
        let static_dir =
            PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()));
        let index_html = static_dir.join("index.html");

        Ok(Self {
            static_dir,
            index_html,
        })
    }
}

fn parse_port(value: Option<String>) -> Result<u16> {
    value
        .unwrap_or_else(|| "1977".to_string())
        .parse::<u16>()
        .context("failed to parse UI_PORT: invalid format")
}

fn normalize_base_url(value: Option<String>) -> String {
    value
        .unwrap_or_else(|| "http://localhost:8050".to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 1977);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(parse_port(Some("not-a-port".to_string())).is_err());
        assert!(parse_port(Some("99999".to_string())).is_err());
    }

    #[test]
    fn base_url_defaults_and_drops_trailing_slash() {
        assert_eq!(normalize_base_url(None), "http://localhost:8050");
        assert_eq!(
            normalize_base_url(Some("http://registry:9000/".to_string())),
            "http://registry:9000"
        );
    }
}
