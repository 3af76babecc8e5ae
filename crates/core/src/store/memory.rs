//! Repository trait and its in-memory implementation.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, EnrollmentId, PaymentId, PresenceId};
use tracing::{debug, info};

use super::error::StoreError;
use super::snapshot::GymSnapshot;
use crate::attendance::{NewPresence, Presence};
use crate::billing::{BillingService, PaymentObligation};
use crate::client::{Client, ClientPatch, ClientService};
use crate::enrollment::{CreateEnrollmentInput, Enrollment, EnrollmentPatch, EnrollmentService};

/// Repository trait for gym records.
///
/// Writes enforce referential integrity: deleting an owner removes what
/// depends on it, and enrollment creation stores its payment schedule in the
/// same step.
pub trait GymStore {
    /// Current contents.
    fn snapshot(&self) -> &GymSnapshot;

    /// Stores a new client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record is invalid or the ID is taken.
    fn add_client(&mut self, client: Client) -> Result<Client, StoreError>;

    /// Merges a patch into a stored client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the client is missing or the result is invalid.
    fn update_client(&mut self, id: ClientId, patch: ClientPatch) -> Result<Client, StoreError>;

    /// Removes a client with their enrollments, payments and attendance.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ClientNotFound` if the client is missing.
    fn delete_client(&mut self, id: ClientId) -> Result<(), StoreError>;

    /// Creates an enrollment and stores its generated payment schedule.
    ///
    /// Nothing is stored if either step fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the client is missing, the input is invalid, or
    /// schedule generation fails.
    fn add_enrollment(
        &mut self,
        input: CreateEnrollmentInput,
    ) -> Result<(Enrollment, Vec<PaymentObligation>), StoreError>;

    /// Amends a stored enrollment. Existing payments are untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the enrollment is missing or the patch is rejected.
    fn update_enrollment(
        &mut self,
        id: EnrollmentId,
        patch: EnrollmentPatch,
    ) -> Result<Enrollment, StoreError>;

    /// Removes an enrollment and its payments. Returns the number of payments removed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EnrollmentNotFound` if the enrollment is missing.
    fn delete_enrollment(&mut self, id: EnrollmentId) -> Result<usize, StoreError>;

    /// Settles a payment on `today`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PaymentNotFound` if the payment is missing.
    fn mark_payment_paid(
        &mut self,
        id: PaymentId,
        today: NaiveDate,
    ) -> Result<PaymentObligation, StoreError>;

    /// Records attendance, replacing any record for the same client and date.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ClientNotFound` if the client is missing.
    fn upsert_presence(&mut self, presence: NewPresence) -> Result<Presence, StoreError>;
}

/// `GymStore` backed by an owned snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: GymSnapshot,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing snapshot.
    #[must_use]
    pub fn from_snapshot(data: GymSnapshot) -> Self {
        Self { data }
    }

    /// Consumes the store, returning its contents.
    #[must_use]
    pub fn into_snapshot(self) -> GymSnapshot {
        self.data
    }

    fn require_client(&self, id: ClientId) -> Result<(), StoreError> {
        self.data
            .client(id)
            .map(|_| ())
            .ok_or(StoreError::ClientNotFound(id))
    }

    fn remove_enrollment_cascade(&mut self, id: EnrollmentId) -> usize {
        let before = self.data.payments.len();
        self.data.payments.retain(|p| p.enrollment_id != id);
        self.data.enrollments.retain(|e| e.id != id);
        before - self.data.payments.len()
    }
}

impl GymStore for MemoryStore {
    fn snapshot(&self) -> &GymSnapshot {
        &self.data
    }

    fn add_client(&mut self, client: Client) -> Result<Client, StoreError> {
        ClientService::validate(&client)?;
        if self.data.client(client.id).is_some() {
            return Err(StoreError::DuplicateClient(client.id));
        }

        self.data.clients.push(client.clone());
        Ok(client)
    }

    fn update_client(&mut self, id: ClientId, patch: ClientPatch) -> Result<Client, StoreError> {
        let slot = self
            .data
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::ClientNotFound(id))?;

        let updated = ClientService::apply_patch(slot, patch)?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn delete_client(&mut self, id: ClientId) -> Result<(), StoreError> {
        self.require_client(id)?;

        let owned: Vec<EnrollmentId> = self
            .data
            .enrollments_for_client(id)
            .map(|e| e.id)
            .collect();
        let payments_removed: usize = owned
            .iter()
            .map(|e| self.remove_enrollment_cascade(*e))
            .sum();

        self.data.presences.retain(|p| p.client_id != id);
        self.data.clients.retain(|c| c.id != id);

        info!(
            client_id = %id,
            enrollments = owned.len(),
            payments = payments_removed,
            "Client deleted with dependent records"
        );
        Ok(())
    }

    fn add_enrollment(
        &mut self,
        input: CreateEnrollmentInput,
    ) -> Result<(Enrollment, Vec<PaymentObligation>), StoreError> {
        self.require_client(input.client_id)?;

        let enrollment = EnrollmentService::create(input)?;
        let schedule = BillingService::generate_schedule(&enrollment)?;

        self.data.enrollments.push(enrollment.clone());
        self.data.payments.extend(schedule.iter().cloned());

        debug!(
            enrollment_id = %enrollment.id,
            payments = schedule.len(),
            "Enrollment stored with schedule"
        );
        Ok((enrollment, schedule))
    }

    fn update_enrollment(
        &mut self,
        id: EnrollmentId,
        patch: EnrollmentPatch,
    ) -> Result<Enrollment, StoreError> {
        let slot = self
            .data
            .enrollments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::EnrollmentNotFound(id))?;

        let updated = EnrollmentService::apply_patch(slot, patch)?;
        *slot = updated.clone();
        Ok(updated)
    }

    fn delete_enrollment(&mut self, id: EnrollmentId) -> Result<usize, StoreError> {
        if self.data.enrollment(id).is_none() {
            return Err(StoreError::EnrollmentNotFound(id));
        }

        let removed = self.remove_enrollment_cascade(id);
        info!(enrollment_id = %id, payments = removed, "Enrollment deleted with payments");
        Ok(removed)
    }

    fn mark_payment_paid(
        &mut self,
        id: PaymentId,
        today: NaiveDate,
    ) -> Result<PaymentObligation, StoreError> {
        let slot = self
            .data
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PaymentNotFound(id))?;

        *slot = BillingService::mark_paid(slot, today);
        Ok(slot.clone())
    }

    fn upsert_presence(&mut self, presence: NewPresence) -> Result<Presence, StoreError> {
        self.require_client(presence.client_id)?;

        let existing = self.data.presences.iter_mut().find(|p| {
            p.client_id == presence.client_id && p.training_date == presence.training_date
        });

        let record = match existing {
            Some(slot) => {
                slot.status = presence.status;
                slot.note = presence.note;
                slot.clone()
            }
            None => {
                let record = Presence {
                    id: PresenceId::new(),
                    client_id: presence.client_id,
                    training_date: presence.training_date,
                    status: presence.status,
                    note: presence.note,
                };
                self.data.presences.push(record.clone());
                record
            }
        };

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::PresenceStatus;
    use crate::billing::{PaymentStatus, Recurrence};
    use crate::client::ClientStatus;
    use crate::enrollment::{EnrollmentError, EnrollmentStatus, TrainingMode};
    use crate::store::test_support::{client, client_named, date, sample_snapshot};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn input(client_id: ClientId, duration_months: i32, recurrence: Recurrence) -> CreateEnrollmentInput {
        CreateEnrollmentInput {
            client_id,
            start_date: date(2024, 1, 31),
            duration_months,
            training_mode: TrainingMode::Online,
            weekly_frequency: 2,
            fee_amount: dec!(180),
            recurrence,
        }
    }

    fn store_with_client() -> (MemoryStore, ClientId) {
        let mut store = MemoryStore::new();
        let c = client("Bruno Lima", ClientStatus::Active, date(1988, 4, 2));
        let id = c.id;
        store.add_client(c).unwrap();
        (store, id)
    }

    #[test]
    fn test_add_client_rejects_duplicates_and_invalid_records() {
        let (mut store, id) = store_with_client();
        let dup = store.snapshot().client(id).unwrap().clone();
        assert_eq!(store.add_client(dup), Err(StoreError::DuplicateClient(id)));

        let mut invalid = client("X", ClientStatus::Active, date(2000, 1, 1));
        invalid.phone = String::new();
        assert!(matches!(store.add_client(invalid), Err(StoreError::Client(_))));
        assert_eq!(store.snapshot().clients.len(), 1);
    }

    #[test]
    fn test_add_enrollment_stores_schedule() {
        let (mut store, id) = store_with_client();
        let (enrollment, schedule) = store
            .add_enrollment(input(id, 3, Recurrence::Monthly))
            .unwrap();

        assert_eq!(enrollment.end_date, date(2024, 4, 30));
        assert_eq!(
            schedule.iter().map(|p| p.due_date).collect::<Vec<_>>(),
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
        );
        assert_eq!(store.snapshot().payments, schedule);
    }

    #[test]
    fn test_add_enrollment_is_all_or_nothing() {
        let (mut store, id) = store_with_client();

        let mut bad = input(id, 0, Recurrence::Monthly);
        assert!(store.add_enrollment(bad.clone()).is_err());

        bad.duration_months = 3;
        bad.fee_amount = Decimal::NEGATIVE_ONE;
        assert!(store.add_enrollment(bad).is_err());

        let stranger = ClientId::new();
        assert_eq!(
            store
                .add_enrollment(input(stranger, 3, Recurrence::Monthly))
                .map(|_| ()),
            Err(StoreError::ClientNotFound(stranger))
        );

        assert!(store.snapshot().enrollments.is_empty());
        assert!(store.snapshot().payments.is_empty());
    }

    #[test]
    fn test_short_contract_stores_enrollment_without_payments() {
        let (mut store, id) = store_with_client();
        let (_, schedule) = store
            .add_enrollment(input(id, 2, Recurrence::Quarterly))
            .unwrap();

        assert!(schedule.is_empty());
        assert_eq!(store.snapshot().enrollments.len(), 1);
        assert!(store.snapshot().payments.is_empty());
    }

    #[test]
    fn test_update_enrollment_keeps_payments() {
        let (mut store, id) = store_with_client();
        let (enrollment, schedule) = store
            .add_enrollment(input(id, 3, Recurrence::Monthly))
            .unwrap();

        let patch = EnrollmentPatch {
            fee_amount: Some(dec!(220)),
            amendment_note: Some("Price update".into()),
            ..EnrollmentPatch::default()
        };
        let updated = store.update_enrollment(enrollment.id, patch).unwrap();

        assert_eq!(updated.fee_amount, dec!(220));
        assert_eq!(store.snapshot().enrollment(enrollment.id), Some(&updated));
        assert_eq!(store.snapshot().payments, schedule);
    }

    #[test]
    fn test_update_enrollment_requires_note() {
        let (mut store, id) = store_with_client();
        let (enrollment, _) = store
            .add_enrollment(input(id, 3, Recurrence::Monthly))
            .unwrap();

        let result = store.update_enrollment(enrollment.id, EnrollmentPatch::default());
        assert_eq!(
            result,
            Err(StoreError::Enrollment(EnrollmentError::AmendmentNoteRequired))
        );
        assert_eq!(
            store.snapshot().enrollment(enrollment.id).unwrap().status,
            EnrollmentStatus::Active
        );
    }

    #[test]
    fn test_delete_enrollment_cascades_payments() {
        let mut store = MemoryStore::from_snapshot(sample_snapshot());
        let ana = client_named(store.snapshot(), "Ana Souza").id;
        let enrollment_id = store.snapshot().enrollments_for_client(ana).next().unwrap().id;
        let total = store.snapshot().payments.len();

        assert_eq!(store.delete_enrollment(enrollment_id), Ok(6));
        assert_eq!(store.snapshot().payments.len(), total - 6);
        assert!(store.snapshot().payments_for_client(ana).is_empty());

        assert_eq!(
            store.delete_enrollment(enrollment_id),
            Err(StoreError::EnrollmentNotFound(enrollment_id))
        );
    }

    #[test]
    fn test_delete_client_cascades_everything() {
        let mut store = MemoryStore::from_snapshot(sample_snapshot());
        let ana = client_named(store.snapshot(), "Ana Souza").id;

        store.delete_client(ana).unwrap();

        let snapshot = store.into_snapshot();
        assert!(snapshot.client(ana).is_none());
        assert_eq!(snapshot.enrollments_for_client(ana).count(), 0);
        assert!(snapshot.presences.iter().all(|p| p.client_id != ana));
        assert!(snapshot
            .payments
            .iter()
            .all(|p| snapshot.enrollment(p.enrollment_id).is_some()));
        assert_eq!(snapshot.payments.len(), 3);
    }

    #[test]
    fn test_mark_payment_paid() {
        let mut store = MemoryStore::from_snapshot(sample_snapshot());
        let pending = store
            .snapshot()
            .payments
            .iter()
            .find(|p| p.status == PaymentStatus::Pending)
            .unwrap()
            .id;

        let paid = store.mark_payment_paid(pending, date(2024, 2, 1)).unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);
        assert_eq!(paid.paid_date, Some(date(2024, 2, 1)));

        let again = store.mark_payment_paid(pending, date(2024, 3, 1)).unwrap();
        assert_eq!(again.paid_date, Some(date(2024, 2, 1)));

        let missing = PaymentId::new();
        assert_eq!(
            store.mark_payment_paid(missing, date(2024, 2, 1)),
            Err(StoreError::PaymentNotFound(missing))
        );
    }

    #[test]
    fn test_upsert_presence_replaces_same_day() {
        let (mut store, id) = store_with_client();
        let day = date(2024, 3, 4);

        let first = store
            .upsert_presence(NewPresence {
                client_id: id,
                training_date: day,
                status: PresenceStatus::Absent,
                note: None,
            })
            .unwrap();
        let second = store
            .upsert_presence(NewPresence {
                client_id: id,
                training_date: day,
                status: PresenceStatus::Present,
                note: Some("Late arrival".into()),
            })
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(store.snapshot().presences.len(), 1);
        assert_eq!(store.snapshot().presences[0].status, PresenceStatus::Present);
    }

    #[test]
    fn test_update_client() {
        let (mut store, id) = store_with_client();
        let patch = ClientPatch {
            status: Some(ClientStatus::Inactive),
            ..ClientPatch::default()
        };
        let updated = store.update_client(id, patch).unwrap();
        assert_eq!(updated.status, ClientStatus::Inactive);

        let missing = ClientId::new();
        assert_eq!(
            store.update_client(missing, ClientPatch::default()),
            Err(StoreError::ClientNotFound(missing))
        );
    }
}
