use crate::domain::error::DomainError;
use std::path::PathBuf;

pub const USER_AGENT: &str = concat!("aya/", env!("CARGO_PKG_VERSION"), " (terminal weather)");

pub const DEFAULT_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1";
pub const DEFAULT_IP_URL: &str = "https://httpbin.org";
pub const DEFAULT_IPINFO_URL: &str = "https://ipinfo.io";

const CONFIG_FILE_NAME: &str = ".aya.json";

/// Where the config document lives and which endpoints the adapters call.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub geocode_url: String,
    pub forecast_url: String,
    pub ip_url: String,
    pub ipinfo_url: String,
}

impl Settings {
    /// Read overrides from `AYA_CONFIG`, `AYA_GEOCODE_URL`, `AYA_FORECAST_URL`,
    /// `AYA_IP_URL` and `AYA_IPINFO_URL`. The config file defaults to
    /// `~/.aya.json`.
    pub fn from_env() -> Result<Self, DomainError> {
        let config_path = match std::env::var_os("AYA_CONFIG") {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => dirs::home_dir()
                .ok_or_else(|| DomainError::Config("could not determine home directory".into()))?
                .join(CONFIG_FILE_NAME),
        };

        Ok(Self {
            config_path,
            geocode_url: env_or("AYA_GEOCODE_URL", DEFAULT_GEOCODE_URL),
            forecast_url: env_or("AYA_FORECAST_URL", DEFAULT_FORECAST_URL),
            ip_url: env_or("AYA_IP_URL", DEFAULT_IP_URL),
            ipinfo_url: env_or("AYA_IPINFO_URL", DEFAULT_IPINFO_URL),
        })
    }

    /// Default endpoints with an explicit config file.
    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            geocode_url: DEFAULT_GEOCODE_URL.into(),
            forecast_url: DEFAULT_FORECAST_URL.into(),
            ip_url: DEFAULT_IP_URL.into(),
            ipinfo_url: DEFAULT_IPINFO_URL.into(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Shared HTTP client for every adapter. No timeout is set beyond reqwest's
/// defaults. Nominatim refuses requests without a User-Agent, so a client
/// that cannot carry one is an error rather than a fallback.
pub fn http_client() -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DomainError::Config(format!("could not build HTTP client: {e}")))
}
