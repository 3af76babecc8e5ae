//! Student self-service portal.

pub mod service;
pub mod types;

pub use service::PortalService;
pub use types::{PortalPayment, PortalView};
