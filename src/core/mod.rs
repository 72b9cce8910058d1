pub mod config;
pub mod dispatch;
pub mod errors;
pub mod kernel;
pub mod params;
pub mod types;
pub mod wire;
