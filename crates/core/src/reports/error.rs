//! Report error types.

use gymdesk_shared::AppError;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The trailing window must cover at least one month.
    #[error("Invalid report window: {0} months")]
    InvalidWindow(u32),

    /// The window reaches outside the supported calendar range.
    #[error("Report window outside supported calendar range")]
    OutOfRange,
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}
