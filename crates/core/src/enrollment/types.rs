//! Enrollment data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, EnrollmentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::EnrollmentError;
use crate::billing::Recurrence;

/// How the client trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMode {
    /// Remote sessions.
    Online,
    /// Sessions at the gym.
    #[serde(alias = "Presencial")]
    InPerson,
}

impl std::str::FromStr for TrainingMode {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "in_person" | "in-person" | "presencial" => Ok(Self::InPerson),
            _ => Err(EnrollmentError::UnknownLabel {
                field: "training mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Contract lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    /// In force.
    #[serde(alias = "Ativa")]
    Active,
    /// Ran past its end date.
    #[serde(alias = "Expirada")]
    Expired,
    /// Cancelled by explicit action.
    #[serde(alias = "Cancelada")]
    Cancelled,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Expired => write!(f, "expired"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = EnrollmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "ativa" => Ok(Self::Active),
            "expired" | "expirada" => Ok(Self::Expired),
            "cancelled" | "canceled" | "cancelada" => Ok(Self::Cancelled),
            _ => Err(EnrollmentError::UnknownLabel {
                field: "enrollment status",
                value: s.to_string(),
            }),
        }
    }
}

/// A client's training contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrollment ID.
    pub id: EnrollmentId,
    /// Owning client.
    pub client_id: ClientId,
    /// First day of the contract.
    pub start_date: NaiveDate,
    /// Contract length in whole months.
    pub duration_months: i32,
    /// Training modality.
    pub training_mode: TrainingMode,
    /// Sessions per week.
    pub weekly_frequency: u32,
    /// Fee charged per billing period.
    pub fee_amount: Decimal,
    /// Billing cadence.
    pub recurrence: Recurrence,
    /// Start date plus duration.
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: EnrollmentStatus,
    /// Note left by the last amendment.
    pub amendment_note: Option<String>,
}

/// Input for creating a new enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnrollmentInput {
    /// Owning client.
    pub client_id: ClientId,
    /// First day of the contract.
    pub start_date: NaiveDate,
    /// Contract length in whole months.
    pub duration_months: i32,
    /// Training modality.
    pub training_mode: TrainingMode,
    /// Sessions per week.
    pub weekly_frequency: u32,
    /// Fee charged per billing period.
    pub fee_amount: Decimal,
    /// Billing cadence.
    pub recurrence: Recurrence,
}

/// Partial update of an enrollment. Present fields replace the original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollmentPatch {
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New duration in months.
    pub duration_months: Option<i32>,
    /// New training modality.
    pub training_mode: Option<TrainingMode>,
    /// New weekly frequency.
    pub weekly_frequency: Option<u32>,
    /// New fee. Already generated payments keep their amount.
    pub fee_amount: Option<Decimal>,
    /// New billing cadence.
    pub recurrence: Option<Recurrence>,
    /// New lifecycle status.
    pub status: Option<EnrollmentStatus>,
    /// Why the contract was changed. Required.
    pub amendment_note: Option<String>,
}

/// An enrollment record as supplied by the data store, with unparsed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEnrollment {
    /// Enrollment ID.
    pub id: EnrollmentId,
    /// Owning client.
    pub client_id: ClientId,
    /// Start date as text.
    pub start_date: String,
    /// Contract length in whole months.
    pub duration_months: i32,
    /// Training modality label.
    pub training_mode: String,
    /// Sessions per week.
    pub weekly_frequency: u32,
    /// Fee charged per billing period.
    pub fee_amount: Decimal,
    /// Billing cadence label.
    pub recurrence: String,
    /// End date as text; computed when absent.
    pub end_date: Option<String>,
    /// Lifecycle status label.
    pub status: String,
    /// Note left by the last amendment.
    pub amendment_note: Option<String>,
}
