use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Geocoding error: {0}")]
    GeoLookup(String),

    #[error("Weather fetch error: {0}")]
    WeatherFetch(String),

    #[error("Time parse error: {0}")]
    TimeParse(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("IP lookup error: {0}")]
    IpLookup(String),

    #[error("Config error: {0}")]
    Config(String),
}
