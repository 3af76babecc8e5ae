//! Dashboard data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, PaymentId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::{BillingSummary, PaymentStatus};

/// Dashboard metrics response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Evaluation day.
    pub as_of: NaiveDate,
    /// Display currency.
    pub currency: String,
    /// Totals over every payment.
    pub totals: BillingSummary,
    /// Clients with active status.
    pub active_clients: usize,
    /// Enrollments starting in the current month.
    pub new_enrollments_this_month: usize,
    /// Payments settled in the current month.
    pub received_this_month: Decimal,
    /// Monthly revenue goal.
    pub monthly_goal: Decimal,
    /// `received_this_month` as a percentage of the goal, 2 decimal places.
    pub goal_progress_percent: Decimal,
    /// Active clients above the age limit without a medical certificate.
    pub medical_certificates_pending: usize,
    /// Most recently settled payments.
    pub recent_payments: Vec<PaymentActivity>,
    /// Earliest payments still pending.
    pub upcoming_payments: Vec<PaymentActivity>,
}

/// A payment line on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentActivity {
    /// Payment ID.
    pub payment_id: PaymentId,
    /// Owning client, when resolvable.
    pub client_id: Option<ClientId>,
    /// Owning client's name, when resolvable.
    pub client_name: Option<String>,
    /// Amount.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Settlement date.
    pub paid_date: Option<NaiveDate>,
    /// Effective status.
    pub status: PaymentStatus,
}
