//! Store error types.

use gymdesk_shared::AppError;
use gymdesk_shared::types::{ClientId, EnrollmentId, PaymentId};
use thiserror::Error;

use crate::billing::BillingError;
use crate::client::ClientError;
use crate::enrollment::EnrollmentError;

/// Store-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Client not found.
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    /// Enrollment not found.
    #[error("Enrollment not found: {0}")]
    EnrollmentNotFound(EnrollmentId),

    /// Payment not found.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// A client with this ID already exists.
    #[error("Client already exists: {0}")]
    DuplicateClient(ClientId),

    /// Client validation failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Enrollment validation or lifecycle rule failed.
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),

    /// Schedule generation failed.
    #[error(transparent)]
    Billing(#[from] BillingError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ClientNotFound(_)
            | StoreError::EnrollmentNotFound(_)
            | StoreError::PaymentNotFound(_) => Self::NotFound(err.to_string()),
            StoreError::DuplicateClient(_) => Self::Conflict(err.to_string()),
            StoreError::Client(e) => e.into(),
            StoreError::Enrollment(e) => e.into(),
            StoreError::Billing(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let not_found: AppError = StoreError::ClientNotFound(ClientId::new()).into();
        assert_eq!(not_found.status_code(), 404);

        let conflict: AppError = StoreError::DuplicateClient(ClientId::new()).into();
        assert_eq!(conflict.status_code(), 409);

        let validation: AppError =
            StoreError::Billing(BillingError::UnknownPaymentStatus("x".into())).into();
        assert_eq!(validation.error_code(), "VALIDATION_ERROR");

        let rule: AppError = StoreError::Enrollment(EnrollmentError::InvalidTransition {
            from: crate::enrollment::EnrollmentStatus::Cancelled,
            to: crate::enrollment::EnrollmentStatus::Active,
        })
        .into();
        assert_eq!(rule.status_code(), 422);
    }
}
