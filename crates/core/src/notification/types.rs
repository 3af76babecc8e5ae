//! Notification data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, EnrollmentId, NotificationId, PaymentId};
use serde::{Deserialize, Serialize};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A payment is overdue past the configured threshold.
    Overdue,
    /// An active enrollment ends within the configured window.
    Expiring,
    /// An active client above the age limit has no medical certificate.
    MedicalCertificate,
}

impl NotificationKind {
    /// Prefix used when deriving notification IDs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Expiring => "expiring",
            Self::MedicalCertificate => "medical_certificate",
        }
    }
}

/// Who is looking at the notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "role", content = "client_id")]
pub enum ViewerContext {
    /// Staff member: sees every notification.
    Admin,
    /// Student: sees only notifications about their own records.
    Student(ClientId),
}

impl ViewerContext {
    /// Returns true if this viewer may see records owned by `client_id`.
    #[must_use]
    pub fn can_see(self, client_id: ClientId) -> bool {
        match self {
            Self::Admin => true,
            Self::Student(own) => own == client_id,
        }
    }

    /// Returns true for staff viewers.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// A derived notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Stable ID derived from kind and subject.
    pub id: NotificationId,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// Client the notification concerns.
    pub client_id: ClientId,
    /// Enrollment the notification concerns, if any.
    pub enrollment_id: Option<EnrollmentId>,
    /// Payment the notification concerns, if any.
    pub payment_id: Option<PaymentId>,
    /// Relevant date: due date, end date, or the evaluation day.
    pub date: NaiveDate,
    /// Read by this viewer.
    pub read: bool,
}
