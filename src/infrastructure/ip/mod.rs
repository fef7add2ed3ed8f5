pub mod fixed;
pub mod http;
