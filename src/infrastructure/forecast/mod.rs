pub mod fixed;
pub mod open_meteo;
