//! Billing data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{EnrollmentId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BillingError;
use crate::calendar;

/// Billing cadence of an enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    /// Billed every month.
    #[serde(alias = "Mensal")]
    Monthly,
    /// Billed every 3 months.
    #[serde(alias = "Trimestral")]
    Quarterly,
    /// Billed every 6 months.
    #[serde(alias = "Semestral")]
    Semiannual,
}

impl Recurrence {
    /// Length of one billing period in months.
    #[must_use]
    pub const fn period_months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Quarterly => write!(f, "quarterly"),
            Self::Semiannual => write!(f, "semiannual"),
        }
    }
}

impl std::str::FromStr for Recurrence {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "mensal" => Ok(Self::Monthly),
            "quarterly" | "trimestral" => Ok(Self::Quarterly),
            "semiannual" | "semi-annual" | "semestral" => Ok(Self::Semiannual),
            _ => Err(BillingError::schedule(format!("unrecognized recurrence: {s}"))),
        }
    }
}

/// Payment status, stored or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting payment.
    #[serde(alias = "Pendente")]
    Pending,
    /// Settled. Terminal.
    #[serde(alias = "Pago")]
    Paid,
    /// Past due and unsettled.
    #[serde(alias = "Atrasado")]
    Overdue,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" => Ok(Self::Pending),
            "paid" | "pago" => Ok(Self::Paid),
            "overdue" | "atrasado" => Ok(Self::Overdue),
            _ => Err(BillingError::UnknownPaymentStatus(s.to_string())),
        }
    }
}

/// One billing period's due amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentObligation {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning enrollment.
    pub enrollment_id: EnrollmentId,
    /// Amount due, fixed at generation time.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Settlement date, present once paid.
    pub paid_date: Option<NaiveDate>,
    /// Stored status.
    pub status: PaymentStatus,
}

impl PaymentObligation {
    /// Creates a fresh pending obligation.
    #[must_use]
    pub fn pending(enrollment_id: EnrollmentId, amount: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            enrollment_id,
            amount,
            due_date,
            paid_date: None,
            status: PaymentStatus::Pending,
        }
    }
}

/// A payment record as supplied by the data store, with unparsed fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPayment {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning enrollment.
    pub enrollment_id: EnrollmentId,
    /// Amount due.
    pub amount: Decimal,
    /// Due date as text.
    pub due_date: String,
    /// Settlement date as text, if any.
    pub paid_date: Option<String>,
    /// Stored status label.
    pub status: String,
}

impl TryFrom<RawPayment> for PaymentObligation {
    type Error = BillingError;

    fn try_from(raw: RawPayment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            enrollment_id: raw.enrollment_id,
            amount: raw.amount,
            due_date: calendar::parse_date("due_date", &raw.due_date)?,
            paid_date: calendar::parse_optional_date("paid_date", raw.paid_date.as_deref())?,
            status: raw.status.parse()?,
        })
    }
}

/// Aggregate billing totals over a collection of payments.
///
/// `received` and `pending` follow stored status. `overdue` follows
/// effective status and overlaps `pending` for stale pending records;
/// `pending_not_overdue` is the disjoint figure. Records stored as overdue
/// before their due date count as pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSummary {
    /// Total of stored-paid payments.
    pub received: Decimal,
    /// Total of stored-pending payments, plus stored-overdue ones not yet due.
    pub pending: Decimal,
    /// Total of effectively overdue payments.
    pub overdue: Decimal,
    /// Part of `pending` that is not yet overdue.
    pub pending_not_overdue: Decimal,
    /// Number of stored-paid payments.
    pub paid_count: usize,
    /// Number of payments counted in `pending`.
    pub pending_count: usize,
    /// Number of effectively overdue payments.
    pub overdue_count: usize,
}
