pub mod fixed;
pub mod nominatim;
