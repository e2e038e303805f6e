use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use config::{Config, ConfigError};
use tracing::debug;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub geocoder: GeocoderConfig,
    pub display: DisplaySettings,
}

/// Vendor directory backend: search, suggestions and callback endpoints.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            headers: HashMap::new(),
        }
    }
}

/// Reverse geocoding service (Nominatim-compatible).
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        // Nominatim rejects requests without an identifying user agent.
        let headers = HashMap::from([(
            "user-agent".to_string(),
            concat!("vendor-directory/", env!("CARGO_PKG_VERSION")).to_string(),
        )]);

        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            headers,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub uploads_path: String,
    pub default_photo: String,
    pub phone_prefix: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            uploads_path: "/static/uploads".to_string(),
            default_photo: "default.jpg".to_string(),
            phone_prefix: "+91".to_string(),
        }
    }
}

impl Settings {
    /// Loads `config/default.{yaml,toml,json}` if present, then `APP_`
    /// environment overrides such as `APP_API__BASE_URL`.
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(config::File::with_name("config/default").required(false))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(config::File::from(path.as_ref()))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;

        debug!(
            api_base_url = %settings.api.base_url,
            geocoder_base_url = %settings.geocoder.base_url,
            api_headers = ?settings.api.headers,
            "Loaded settings"
        );

        Ok(settings)
    }
}
