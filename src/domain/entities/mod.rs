pub mod cache;
pub mod coordinates;
pub mod weather;
