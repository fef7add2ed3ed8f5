pub mod config_store;
pub mod geo_provider;
pub mod ip_locator;
pub mod plotter;
pub mod weather_provider;
