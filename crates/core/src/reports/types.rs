//! Report data types.

use chrono::NaiveDate;
use gymdesk_shared::types::ClientId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue settled in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// First day of the month.
    pub month: NaiveDate,
    /// Sum of payments settled in the month.
    pub revenue: Decimal,
}

/// Revenue over a trailing window of months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// One entry per month, oldest first, ending with the current month.
    pub months: Vec<MonthlyRevenue>,
    /// Sum over the window.
    pub total: Decimal,
    /// Total divided by the window length, 2 decimal places.
    pub average: Decimal,
}

/// Client counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStatusReport {
    /// Active clients.
    pub active: usize,
    /// Inactive clients.
    pub inactive: usize,
}

/// Payment punctuality for one active client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPerformance {
    /// Client ID.
    pub client_id: ClientId,
    /// Client name.
    pub name: String,
    /// Paid on or before the due date.
    pub on_time: usize,
    /// Paid after the due date.
    pub late: usize,
    /// `on_time + late`.
    pub total_paid: usize,
    /// On-time share of paid payments as a percentage, 0 when nothing is paid.
    pub on_time_percent: Decimal,
}
