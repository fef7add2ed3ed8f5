pub mod clear_config;
pub mod default_city;
pub mod fetch_weather;
pub mod graph;
pub mod report;
pub mod resolve_city;
