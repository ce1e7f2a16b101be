// src/core/mod.rs
//! Configuration and the remote service client

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, ConfigOverrides, ServiceConfig};
pub use service_client::{GapService, ServiceClient};
