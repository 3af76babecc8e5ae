//! Enrollment contracts: creation, amendment, lifecycle.

pub mod error;
pub mod service;
pub mod types;

pub use error::EnrollmentError;
pub use service::EnrollmentService;
pub use types::{
    CreateEnrollmentInput, Enrollment, EnrollmentPatch, EnrollmentStatus, RawEnrollment,
    TrainingMode,
};
