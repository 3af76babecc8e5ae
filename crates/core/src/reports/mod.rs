//! Management reports.
//!
//! This module provides pure business logic for the reports screen:
//! - Monthly revenue over a trailing window
//! - Active vs. inactive clients
//! - Per-client payment punctuality

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
