pub mod config;

pub use config::{AppConfig, DEFAULT_BIND_ADDR, FALLBACK_IMAGE};
