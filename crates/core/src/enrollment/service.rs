//! Enrollment service for contract creation, amendment, and lifecycle.

use chrono::NaiveDate;
use gymdesk_shared::types::EnrollmentId;
use tracing::debug;

use super::error::EnrollmentError;
use super::types::{
    CreateEnrollmentInput, Enrollment, EnrollmentPatch, EnrollmentStatus, RawEnrollment,
};
use crate::billing::{BillingError, BillingService};
use crate::calendar;

/// Enrollment service for business logic.
pub struct EnrollmentService;

impl EnrollmentService {
    /// End date of a contract: start date plus duration in calendar months.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidScheduleInput` if the duration is not
    /// positive or the result falls outside the supported calendar range.
    pub fn end_date_for(start_date: NaiveDate, duration_months: i32) -> Result<NaiveDate, BillingError> {
        let months = u32::try_from(duration_months)
            .ok()
            .filter(|m| *m > 0)
            .ok_or_else(|| {
                BillingError::schedule(format!(
                    "duration must be positive, got {duration_months} months"
                ))
            })?;

        calendar::add_months(start_date, months)
            .ok_or_else(|| BillingError::schedule("end date outside supported calendar range"))
    }

    /// Validates input and builds a new active enrollment.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError` if the duration, fee or weekly frequency is invalid.
    pub fn create(input: CreateEnrollmentInput) -> Result<Enrollment, EnrollmentError> {
        BillingService::validate_schedule_input(input.duration_months, input.fee_amount)?;
        Self::validate_weekly_frequency(input.weekly_frequency)?;

        let end_date = Self::end_date_for(input.start_date, input.duration_months)?;

        Ok(Enrollment {
            id: EnrollmentId::new(),
            client_id: input.client_id,
            start_date: input.start_date,
            duration_months: input.duration_months,
            training_mode: input.training_mode,
            weekly_frequency: input.weekly_frequency,
            fee_amount: input.fee_amount,
            recurrence: input.recurrence,
            end_date,
            status: EnrollmentStatus::Active,
            amendment_note: None,
        })
    }

    /// Merges a patch into an enrollment.
    ///
    /// Each present field replaces the original; absent fields are kept. The
    /// end date is recomputed only when the start date or duration changes.
    /// Existing payments are untouched.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::AmendmentNoteRequired` if the note is missing
    /// or blank, `EnrollmentError::InvalidTransition` for a disallowed status
    /// change, and validation errors for invalid merged values.
    pub fn apply_patch(
        original: &Enrollment,
        patch: EnrollmentPatch,
    ) -> Result<Enrollment, EnrollmentError> {
        let note = patch
            .amendment_note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(EnrollmentError::AmendmentNoteRequired)?;

        let start_date = patch.start_date.unwrap_or(original.start_date);
        let duration_months = patch.duration_months.unwrap_or(original.duration_months);
        let fee_amount = patch.fee_amount.unwrap_or(original.fee_amount);
        let weekly_frequency = patch.weekly_frequency.unwrap_or(original.weekly_frequency);
        let status = patch.status.unwrap_or(original.status);

        BillingService::validate_schedule_input(duration_months, fee_amount)?;
        Self::validate_weekly_frequency(weekly_frequency)?;
        Self::check_transition(original.status, status)?;

        let end_date = if start_date != original.start_date
            || duration_months != original.duration_months
        {
            Self::end_date_for(start_date, duration_months)?
        } else {
            original.end_date
        };

        debug!(enrollment_id = %original.id, "Enrollment amended");

        Ok(Enrollment {
            id: original.id,
            client_id: original.client_id,
            start_date,
            duration_months,
            training_mode: patch.training_mode.unwrap_or(original.training_mode),
            weekly_frequency,
            fee_amount,
            recurrence: patch.recurrence.unwrap_or(original.recurrence),
            end_date,
            status,
            amendment_note: Some(note),
        })
    }

    /// Cancels an active enrollment.
    ///
    /// # Errors
    ///
    /// Returns `EnrollmentError::InvalidTransition` if the enrollment is not active.
    pub fn cancel(enrollment: &Enrollment) -> Result<Enrollment, EnrollmentError> {
        if enrollment.status != EnrollmentStatus::Active {
            return Err(EnrollmentError::InvalidTransition {
                from: enrollment.status,
                to: EnrollmentStatus::Cancelled,
            });
        }
        Ok(Enrollment {
            status: EnrollmentStatus::Cancelled,
            ..enrollment.clone()
        })
    }

    /// Returns true if the end date is 1 to `window_days` days ahead of `today`.
    #[must_use]
    pub fn is_expiring_soon(enrollment: &Enrollment, today: NaiveDate, window_days: i64) -> bool {
        let remaining = calendar::days_between(today, enrollment.end_date);
        remaining > 0 && remaining <= window_days
    }

    /// Returns the expired form of an active enrollment whose end date has
    /// been reached, or `None` when nothing changes.
    #[must_use]
    pub fn expire_if_ended(enrollment: &Enrollment, today: NaiveDate) -> Option<Enrollment> {
        (enrollment.status == EnrollmentStatus::Active && today >= enrollment.end_date).then(|| {
            Enrollment {
                status: EnrollmentStatus::Expired,
                ..enrollment.clone()
            }
        })
    }

    fn validate_weekly_frequency(frequency: u32) -> Result<(), EnrollmentError> {
        if frequency == 0 {
            return Err(EnrollmentError::InvalidWeeklyFrequency(frequency));
        }
        Ok(())
    }

    fn check_transition(from: EnrollmentStatus, to: EnrollmentStatus) -> Result<(), EnrollmentError> {
        match (from, to) {
            (a, b) if a == b => Ok(()),
            (EnrollmentStatus::Active, EnrollmentStatus::Expired | EnrollmentStatus::Cancelled) => {
                Ok(())
            }
            _ => Err(EnrollmentError::InvalidTransition { from, to }),
        }
    }
}

impl TryFrom<RawEnrollment> for Enrollment {
    type Error = EnrollmentError;

    fn try_from(raw: RawEnrollment) -> Result<Self, Self::Error> {
        let start_date = calendar::parse_date("start_date", &raw.start_date)?;
        let end_date = match calendar::parse_optional_date("end_date", raw.end_date.as_deref())? {
            Some(end) => end,
            None => EnrollmentService::end_date_for(start_date, raw.duration_months)?,
        };

        Ok(Self {
            id: raw.id,
            client_id: raw.client_id,
            start_date,
            duration_months: raw.duration_months,
            training_mode: raw.training_mode.parse()?,
            weekly_frequency: raw.weekly_frequency,
            fee_amount: raw.fee_amount,
            recurrence: raw.recurrence.parse()?,
            end_date,
            status: raw.status.parse()?,
            amendment_note: raw.amendment_note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::Recurrence;
    use crate::enrollment::TrainingMode;
    use gymdesk_shared::AppError;
    use gymdesk_shared::types::ClientId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input() -> CreateEnrollmentInput {
        CreateEnrollmentInput {
            client_id: ClientId::new(),
            start_date: date(2024, 1, 15),
            duration_months: 6,
            training_mode: TrainingMode::InPerson,
            weekly_frequency: 3,
            fee_amount: dec!(200.00),
            recurrence: Recurrence::Monthly,
        }
    }

    fn note(text: &str) -> EnrollmentPatch {
        EnrollmentPatch {
            amendment_note: Some(text.into()),
            ..EnrollmentPatch::default()
        }
    }

    #[test]
    fn test_create_computes_end_date() {
        let e = EnrollmentService::create(input()).unwrap();
        assert_eq!(e.end_date, date(2024, 7, 15));
        assert_eq!(e.status, EnrollmentStatus::Active);
        assert_eq!(e.amendment_note, None);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let mut bad = input();
        bad.duration_months = 0;
        assert!(matches!(
            EnrollmentService::create(bad),
            Err(EnrollmentError::Billing(BillingError::InvalidScheduleInput { .. }))
        ));

        let mut bad = input();
        bad.fee_amount = dec!(-1);
        assert!(EnrollmentService::create(bad).is_err());

        let mut bad = input();
        bad.weekly_frequency = 0;
        assert_eq!(
            EnrollmentService::create(bad),
            Err(EnrollmentError::InvalidWeeklyFrequency(0))
        );
    }

    #[test]
    fn test_patch_requires_note() {
        let e = EnrollmentService::create(input()).unwrap();
        assert_eq!(
            EnrollmentService::apply_patch(&e, EnrollmentPatch::default()),
            Err(EnrollmentError::AmendmentNoteRequired)
        );
        assert_eq!(
            EnrollmentService::apply_patch(&e, note("   ")),
            Err(EnrollmentError::AmendmentNoteRequired)
        );
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let e = EnrollmentService::create(input()).unwrap();
        let patch = EnrollmentPatch {
            weekly_frequency: Some(5),
            ..note("more sessions")
        };
        let updated = EnrollmentService::apply_patch(&e, patch).unwrap();

        assert_eq!(updated.weekly_frequency, 5);
        assert_eq!(updated.fee_amount, e.fee_amount);
        assert_eq!(updated.end_date, e.end_date);
        assert_eq!(updated.amendment_note.as_deref(), Some("more sessions"));
    }

    #[test]
    fn test_patch_recomputes_end_date_on_duration_change() {
        let e = EnrollmentService::create(input()).unwrap();
        let patch = EnrollmentPatch {
            duration_months: Some(12),
            ..note("renewed")
        };
        let updated = EnrollmentService::apply_patch(&e, patch).unwrap();
        assert_eq!(updated.end_date, date(2025, 1, 15));
    }

    #[test]
    fn test_patch_preserves_stored_end_date_when_unchanged() {
        let mut e = EnrollmentService::create(input()).unwrap();
        e.end_date = date(2024, 8, 1);
        let patch = EnrollmentPatch {
            fee_amount: Some(dec!(250)),
            ..note("price change")
        };
        let updated = EnrollmentService::apply_patch(&e, patch).unwrap();
        assert_eq!(updated.end_date, date(2024, 8, 1));
    }

    #[test]
    fn test_cancel_transitions() {
        let e = EnrollmentService::create(input()).unwrap();
        let cancelled = EnrollmentService::cancel(&e).unwrap();
        assert_eq!(cancelled.status, EnrollmentStatus::Cancelled);

        assert_eq!(
            EnrollmentService::cancel(&cancelled),
            Err(EnrollmentError::InvalidTransition {
                from: EnrollmentStatus::Cancelled,
                to: EnrollmentStatus::Cancelled,
            })
        );

        let reopen = EnrollmentPatch {
            status: Some(EnrollmentStatus::Active),
            ..note("reopen")
        };
        assert!(matches!(
            EnrollmentService::apply_patch(&cancelled, reopen),
            Err(EnrollmentError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_expiring_soon_window() {
        let e = EnrollmentService::create(input()).unwrap();
        assert!(EnrollmentService::is_expiring_soon(&e, date(2024, 7, 1), 15));
        assert!(EnrollmentService::is_expiring_soon(&e, date(2024, 7, 14), 15));
        assert!(!EnrollmentService::is_expiring_soon(&e, date(2024, 7, 15), 15));
        assert!(!EnrollmentService::is_expiring_soon(&e, date(2024, 6, 29), 15));
    }

    #[test]
    fn test_expire_if_ended() {
        let e = EnrollmentService::create(input()).unwrap();
        assert_eq!(EnrollmentService::expire_if_ended(&e, date(2024, 7, 14)), None);
        let expired = EnrollmentService::expire_if_ended(&e, date(2024, 7, 15)).unwrap();
        assert_eq!(expired.status, EnrollmentStatus::Expired);
        assert_eq!(EnrollmentService::expire_if_ended(&expired, date(2024, 9, 1)), None);
    }

    #[test]
    fn test_raw_enrollment_conversion() {
        let raw = RawEnrollment {
            id: EnrollmentId::new(),
            client_id: ClientId::new(),
            start_date: "2024-01-31".into(),
            duration_months: 1,
            training_mode: "Presencial".into(),
            weekly_frequency: 2,
            fee_amount: dec!(150),
            recurrence: "Mensal".into(),
            end_date: None,
            status: "Ativa".into(),
            amendment_note: None,
        };
        let e = Enrollment::try_from(raw.clone()).unwrap();
        assert_eq!(e.end_date, date(2024, 2, 29));
        assert_eq!(e.training_mode, TrainingMode::InPerson);
        assert_eq!(e.recurrence, Recurrence::Monthly);

        let bad = RawEnrollment {
            recurrence: "Anual".into(),
            ..raw
        };
        assert!(matches!(
            Enrollment::try_from(bad),
            Err(EnrollmentError::Billing(BillingError::InvalidScheduleInput { .. }))
        ));
    }

    #[test]
    fn test_unknown_labels_are_not_schedule_errors() {
        assert_eq!(
            "Hibrido".parse::<TrainingMode>(),
            Err(EnrollmentError::UnknownLabel {
                field: "training mode",
                value: "Hibrido".into(),
            })
        );

        let raw = RawEnrollment {
            id: EnrollmentId::new(),
            client_id: ClientId::new(),
            start_date: "2024-01-10".into(),
            duration_months: 3,
            training_mode: "Online".into(),
            weekly_frequency: 2,
            fee_amount: dec!(150),
            recurrence: "Mensal".into(),
            end_date: None,
            status: "Suspensa".into(),
            amendment_note: None,
        };
        let err = Enrollment::try_from(raw).unwrap_err();
        assert!(matches!(
            err,
            EnrollmentError::UnknownLabel {
                field: "enrollment status",
                ..
            }
        ));
        assert_eq!(err.to_string(), "Unrecognized enrollment status: Suspensa");

        let app: AppError = err.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }
}
