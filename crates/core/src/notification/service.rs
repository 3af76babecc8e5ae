//! Notification derivation.

use chrono::NaiveDate;
use gymdesk_shared::BillingConfig;
use gymdesk_shared::types::NotificationId;

use super::types::{Notification, NotificationKind, ViewerContext};
use crate::billing::BillingService;
use crate::calendar;
use crate::client::ClientService;
use crate::enrollment::{EnrollmentService, EnrollmentStatus};
use crate::store::GymSnapshot;

/// Notification service for business logic.
pub struct NotificationService;

impl NotificationService {
    /// Derives the notifications visible to `viewer` as of `today`.
    ///
    /// - `Overdue`: one per payment overdue by at least
    ///   `overdue_threshold_days`.
    /// - `Expiring`: one per active enrollment ending within
    ///   `expiring_window_days`.
    /// - `MedicalCertificate`: one per client needing a certificate, staff only.
    ///
    /// Records whose owning client cannot be resolved are skipped. The result
    /// is ordered by kind, then date. Every notification comes back unread;
    /// apply a `NotificationInbox` to restore read state.
    #[must_use]
    pub fn compute(
        snapshot: &GymSnapshot,
        today: NaiveDate,
        viewer: ViewerContext,
        config: &BillingConfig,
    ) -> Vec<Notification> {
        let overdue = snapshot
            .payments
            .iter()
            .filter(|p| BillingService::is_overdue_by(p, today, config.overdue_threshold_days))
            .filter_map(|p| {
                let client = snapshot.client_for_payment(p)?;
                viewer.can_see(client.id).then(|| {
                    let days = calendar::days_between(p.due_date, today);
                    Notification {
                        id: Self::derive_id(NotificationKind::Overdue, &p.id.to_string()),
                        kind: NotificationKind::Overdue,
                        message: format!(
                            "{}: payment of {} {:.2} due {} is {days} days overdue",
                            client.name, config.currency, p.amount, p.due_date
                        ),
                        client_id: client.id,
                        enrollment_id: Some(p.enrollment_id),
                        payment_id: Some(p.id),
                        date: p.due_date,
                        read: false,
                    }
                })
            });

        let expiring = snapshot
            .enrollments
            .iter()
            .filter(|e| {
                e.status == EnrollmentStatus::Active
                    && EnrollmentService::is_expiring_soon(e, today, config.expiring_window_days)
            })
            .filter_map(|e| {
                let client = snapshot.client(e.client_id)?;
                viewer.can_see(client.id).then(|| {
                    let days = calendar::days_between(today, e.end_date);
                    Notification {
                        id: Self::derive_id(NotificationKind::Expiring, &e.id.to_string()),
                        kind: NotificationKind::Expiring,
                        message: format!(
                            "{}: enrollment ends on {} ({days} days left)",
                            client.name, e.end_date
                        ),
                        client_id: client.id,
                        enrollment_id: Some(e.id),
                        payment_id: None,
                        date: e.end_date,
                        read: false,
                    }
                })
            });

        let medical = snapshot
            .clients
            .iter()
            .filter(|_| viewer.is_admin())
            .filter(|c| {
                ClientService::needs_medical_certificate(c, today, config.medical_certificate_age)
            })
            .map(|c| Notification {
                id: Self::derive_id(NotificationKind::MedicalCertificate, &c.id.to_string()),
                kind: NotificationKind::MedicalCertificate,
                message: format!(
                    "{} is over {} and has no medical certificate on file",
                    c.name, config.medical_certificate_age
                ),
                client_id: c.id,
                enrollment_id: None,
                payment_id: None,
                date: today,
                read: false,
            });

        let mut notifications: Vec<Notification> = overdue.chain(expiring).chain(medical).collect();
        notifications.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.date.cmp(&b.date)));
        notifications
    }

    /// Stable ID for a notification about `subject`.
    #[must_use]
    pub fn derive_id(kind: NotificationKind, subject: &str) -> NotificationId {
        NotificationId::derived(&format!("{}:{subject}", kind.key()))
    }
}
