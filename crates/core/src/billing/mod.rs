//! Payment schedule generation and billing-state derivation.
//!
//! Schedules are generated once from an enrollment contract. Status
//! derivation and aggregation are pure functions of the stored records and
//! an injected `today`.

pub mod error;
pub mod filter;
pub mod service;
pub mod types;


pub use error::BillingError;
pub use filter::{FilteredPayments, PaymentFilter};
pub use service::BillingService;
pub use types::{BillingSummary, PaymentObligation, PaymentStatus, RawPayment, Recurrence};
