//! Billing error types.

use gymdesk_shared::AppError;
use thiserror::Error;

/// Billing-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Malformed enrollment parameters for schedule generation.
    #[error("Invalid schedule input: {reason}")]
    InvalidScheduleInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A date value could not be parsed as a calendar date.
    #[error("Invalid date for {field}: {value:?}")]
    InvalidDateInput {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value supplied.
        value: String,
    },

    /// A stored payment status was not recognized.
    #[error("Unknown payment status: {0}")]
    UnknownPaymentStatus(String),
}

impl BillingError {
    pub(crate) fn schedule(reason: impl Into<String>) -> Self {
        Self::InvalidScheduleInput {
            reason: reason.into(),
        }
    }
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        Self::Validation(err.to_string())
    }
}
