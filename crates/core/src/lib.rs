//! Core business logic for Gymdesk.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `billing` - Payment schedule generation and billing-state derivation
//! - `enrollment` - Contract creation, amendment and lifecycle
//! - `client` - Client records and medical certificate rules
//! - `attendance` - Presence records and attendance summaries
//! - `notification` - Notifications derived from current records
//! - `dashboard` - Admin dashboard metrics
//! - `reports` - Revenue, client status and punctuality reports
//! - `portal` - Student self-service view
//! - `store` - Snapshot shape and in-memory repository
//! - `calendar` - Date arithmetic helpers

pub mod attendance;
pub mod billing;
pub mod calendar;
pub mod client;
pub mod dashboard;
pub mod enrollment;
pub mod notification;
pub mod portal;
pub mod reports;
pub mod store;
