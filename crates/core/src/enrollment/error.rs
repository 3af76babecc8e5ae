//! Enrollment error types.

use gymdesk_shared::AppError;
use thiserror::Error;

use super::types::EnrollmentStatus;
use crate::billing::BillingError;

/// Enrollment-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrollmentError {
    /// Duration, fee, recurrence or date input was rejected.
    #[error(transparent)]
    Billing(#[from] BillingError),

    /// Weekly frequency must be at least one session.
    #[error("Weekly frequency must be at least 1, got {0}")]
    InvalidWeeklyFrequency(u32),

    /// A training mode or status label the store should never produce.
    #[error("Unrecognized {field}: {value}")]
    UnknownLabel {
        /// Which label was being read.
        field: &'static str,
        /// The text as stored.
        value: String,
    },

    /// Amendments must carry a non-blank note.
    #[error("An amendment note is required when editing an enrollment")]
    AmendmentNoteRequired,

    /// Lifecycle transition not allowed.
    #[error("Cannot move enrollment from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: EnrollmentStatus,
        /// Requested status.
        to: EnrollmentStatus,
    },
}

impl From<EnrollmentError> for AppError {
    fn from(err: EnrollmentError) -> Self {
        match err {
            EnrollmentError::InvalidTransition { .. } => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
