//! Shared identifiers, errors, and configuration for Gymdesk.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BillingConfig, LoggingConfig};
pub use error::{AppError, AppResult};
