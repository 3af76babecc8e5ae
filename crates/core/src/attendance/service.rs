//! Attendance summaries.

use chrono::NaiveDate;
use gymdesk_shared::types::ClientId;
use rust_decimal::Decimal;

use super::types::{AttendanceSummary, Presence, PresenceStatus};
use crate::calendar;

/// Attendance service for business logic.
pub struct AttendanceService;

impl AttendanceService {
    /// Summarizes a client's attendance, with monthly figures for the month
    /// containing `month`.
    #[must_use]
    pub fn summarize(presences: &[Presence], client_id: ClientId, month: NaiveDate) -> AttendanceSummary {
        let mut summary = presences
            .iter()
            .filter(|p| p.client_id == client_id)
            .fold(AttendanceSummary::default(), |mut s, p| {
                let in_month = calendar::same_month(p.training_date, month);
                match p.status {
                    PresenceStatus::Present => {
                        s.total_presences += 1;
                        if in_month {
                            s.month_presences += 1;
                        }
                    }
                    PresenceStatus::Absent => {
                        s.total_absences += 1;
                        if in_month {
                            s.month_absences += 1;
                        }
                    }
                }
                s
            });

        let total = summary.total_presences + summary.total_absences;
        summary.attendance_percent = if total == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(summary.total_presences) / Decimal::from(total) * Decimal::ONE_HUNDRED)
                .round_dp(2)
        };

        summary
    }

    /// A client's records, most recent first.
    #[must_use]
    pub fn history(presences: &[Presence], client_id: ClientId) -> Vec<Presence> {
        let mut history: Vec<Presence> = presences
            .iter()
            .filter(|p| p.client_id == client_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.training_date.cmp(&a.training_date));
        history
    }
}
