//! Portal service.

use chrono::NaiveDate;
use gymdesk_shared::BillingConfig;
use gymdesk_shared::types::ClientId;

use super::types::{PortalPayment, PortalView};
use crate::attendance::AttendanceService;
use crate::billing::BillingService;
use crate::client::ClientService;
use crate::notification::{NotificationService, ViewerContext};
use crate::store::{GymSnapshot, StoreError};

/// Portal service for business logic.
pub struct PortalService;

impl PortalService {
    /// Builds the portal view for one student as of `today`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ClientNotFound` if the client does not exist.
    pub fn view(
        snapshot: &GymSnapshot,
        client_id: ClientId,
        today: NaiveDate,
        config: &BillingConfig,
    ) -> Result<PortalView, StoreError> {
        let client = snapshot
            .client(client_id)
            .ok_or(StoreError::ClientNotFound(client_id))?;

        let mut owned = snapshot.payments_for_client(client_id);
        owned.sort_by_key(|p| p.due_date);

        let billing = BillingService::aggregate(&owned, today);
        let payments = owned
            .iter()
            .map(|p| PortalPayment {
                id: p.id,
                enrollment_id: p.enrollment_id,
                amount: p.amount,
                due_date: p.due_date,
                paid_date: p.paid_date,
                status: BillingService::effective_status(p, today),
            })
            .collect();

        Ok(PortalView {
            as_of: today,
            client: client.clone(),
            age: ClientService::age(client, today),
            enrollments: snapshot.enrollments_for_client(client_id).cloned().collect(),
            payments,
            billing,
            attendance: AttendanceService::summarize(&snapshot.presences, client_id, today),
            attendance_history: AttendanceService::history(&snapshot.presences, client_id),
            notifications: NotificationService::compute(
                snapshot,
                today,
                ViewerContext::Student(client_id),
                config,
            ),
        })
    }
}
