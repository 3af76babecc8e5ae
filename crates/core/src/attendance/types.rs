//! Attendance data types.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, PresenceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the client showed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    /// Attended.
    #[serde(alias = "Presente")]
    Present,
    /// Missed.
    #[serde(alias = "Ausente")]
    Absent,
}

/// One attendance record. At most one per client per training date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    /// Presence ID.
    pub id: PresenceId,
    /// Client.
    pub client_id: ClientId,
    /// Training date.
    pub training_date: NaiveDate,
    /// Attended or missed.
    pub status: PresenceStatus,
    /// Optional note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Input for recording attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPresence {
    /// Client.
    pub client_id: ClientId,
    /// Training date.
    pub training_date: NaiveDate,
    /// Attended or missed.
    pub status: PresenceStatus,
    /// Optional note.
    pub note: Option<String>,
}

/// Attendance figures for one client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Presences in the selected month.
    pub month_presences: usize,
    /// Absences in the selected month.
    pub month_absences: usize,
    /// Presences overall.
    pub total_presences: usize,
    /// Absences overall.
    pub total_absences: usize,
    /// Presences over all records, as a percentage with 2 decimal places.
    pub attendance_percent: Decimal,
}
