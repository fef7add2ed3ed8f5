pub mod config;
pub mod forecast;
pub mod geocoding;
pub mod ip;
pub mod plot;
pub mod settings;
