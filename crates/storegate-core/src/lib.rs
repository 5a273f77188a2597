//! Core types and configuration for Storegate.
//!
//! This crate provides the foundational building blocks shared by the
//! Storegate service-to-service authentication layer: tenant and service
//! identifiers, the environment-driven configuration loader, and the core
//! error type.

mod config;
mod error;
mod types;

pub use config::AuthConfig;
pub use error::{StoregateError, StoregateResult};
pub use types::{ServiceId, TenantId};
