//! Core types and configuration for objscope
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
mod env_config;
mod error;
mod object_count;
mod service_config;

pub use constants::*;
pub use error::ConfigError;
pub use object_count::ObjectTypeCount;
pub use service_config::ServiceConfig;
