//! Collections fetched from the data store.

use gymdesk_shared::types::{ClientId, EnrollmentId, PaymentId};
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use crate::attendance::Presence;
use crate::billing::{PaymentObligation, RawPayment};
use crate::client::Client;
use crate::enrollment::{Enrollment, RawEnrollment};

/// Every record the views need, as loaded from the data store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymSnapshot {
    /// Clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Enrollment contracts.
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    /// Payment obligations.
    #[serde(default)]
    pub payments: Vec<PaymentObligation>,
    /// Attendance records.
    #[serde(default)]
    pub presences: Vec<Presence>,
}

impl GymSnapshot {
    /// Looks up a client.
    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Looks up an enrollment.
    #[must_use]
    pub fn enrollment(&self, id: EnrollmentId) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.id == id)
    }

    /// Looks up a payment.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<&PaymentObligation> {
        self.payments.iter().find(|p| p.id == id)
    }

    /// Enrollments owned by a client.
    pub fn enrollments_for_client(&self, client_id: ClientId) -> impl Iterator<Item = &Enrollment> {
        self.enrollments.iter().filter(move |e| e.client_id == client_id)
    }

    /// Payments generated from an enrollment.
    pub fn payments_for_enrollment(
        &self,
        enrollment_id: EnrollmentId,
    ) -> impl Iterator<Item = &PaymentObligation> {
        self.payments.iter().filter(move |p| p.enrollment_id == enrollment_id)
    }

    /// Payments across all of a client's enrollments, in store order.
    #[must_use]
    pub fn payments_for_client(&self, client_id: ClientId) -> Vec<PaymentObligation> {
        self.payments
            .iter()
            .filter(|p| self.owner_of(p) == Some(client_id))
            .cloned()
            .collect()
    }

    /// Client owning the enrollment a payment belongs to.
    #[must_use]
    pub fn client_for_payment(&self, payment: &PaymentObligation) -> Option<&Client> {
        self.owner_of(payment).and_then(|id| self.client(id))
    }

    fn owner_of(&self, payment: &PaymentObligation) -> Option<ClientId> {
        self.enrollment(payment.enrollment_id).map(|e| e.client_id)
    }
}

/// A snapshot as exported by the data store, with enrollment and payment
/// dates and labels still in text form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Enrollment contracts.
    #[serde(default)]
    pub enrollments: Vec<RawEnrollment>,
    /// Payment obligations.
    #[serde(default)]
    pub payments: Vec<RawPayment>,
    /// Attendance records.
    #[serde(default)]
    pub presences: Vec<Presence>,
}

impl TryFrom<RawSnapshot> for GymSnapshot {
    type Error = StoreError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Ok(Self {
            clients: raw.clients,
            enrollments: raw
                .enrollments
                .into_iter()
                .map(Enrollment::try_from)
                .collect::<Result<_, _>>()?,
            payments: raw
                .payments
                .into_iter()
                .map(PaymentObligation::try_from)
                .collect::<Result<_, _>>()?,
            presences: raw.presences,
        })
    }
}
