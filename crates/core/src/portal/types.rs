//! Portal data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{EnrollmentId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::attendance::{AttendanceSummary, Presence};
use crate::billing::{BillingSummary, PaymentStatus};
use crate::client::Client;
use crate::enrollment::Enrollment;
use crate::notification::Notification;

/// Everything a student sees about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalView {
    /// Evaluation day.
    pub as_of: NaiveDate,
    /// The student's record.
    pub client: Client,
    /// Age, if the birth date is known.
    pub age: Option<i32>,
    /// The student's enrollments.
    pub enrollments: Vec<Enrollment>,
    /// The student's payments, ordered by due date.
    pub payments: Vec<PortalPayment>,
    /// Totals over the student's payments.
    pub billing: BillingSummary,
    /// Attendance with monthly figures for the current month.
    pub attendance: AttendanceSummary,
    /// Attendance records, most recent first.
    pub attendance_history: Vec<Presence>,
    /// Notifications scoped to the student.
    pub notifications: Vec<Notification>,
}

/// A payment as shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalPayment {
    /// Payment ID.
    pub id: PaymentId,
    /// Owning enrollment.
    pub enrollment_id: EnrollmentId,
    /// Amount.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Settlement date.
    pub paid_date: Option<NaiveDate>,
    /// Effective status.
    pub status: PaymentStatus,
}
