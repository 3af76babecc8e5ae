//! Billing service: schedule generation, status derivation, aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::BillingError;
use super::types::{BillingSummary, PaymentObligation, PaymentStatus};
use crate::calendar;
use crate::enrollment::Enrollment;

/// Billing service for business logic.
pub struct BillingService;

impl BillingService {
    /// Validates the parameters that drive schedule generation.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidScheduleInput` if the duration is not
    /// positive or the fee is negative.
    pub fn validate_schedule_input(duration_months: i32, fee: Decimal) -> Result<(), BillingError> {
        if duration_months <= 0 {
            return Err(BillingError::schedule(format!(
                "duration must be positive, got {duration_months} months"
            )));
        }

        if fee < Decimal::ZERO {
            return Err(BillingError::schedule(format!(
                "fee cannot be negative, got {fee}"
            )));
        }

        Ok(())
    }

    /// Generates the ordered payment obligations for an enrollment.
    ///
    /// One obligation per full billing period: `floor(duration / period)`.
    /// Due dates start at the enrollment's start date and step by the
    /// recurrence period, each computed from the start date with the day of
    /// month clamped. A contract shorter than one period yields an empty
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidScheduleInput` if the duration is not
    /// positive, the fee is negative, or a due date falls outside the
    /// supported calendar range.
    pub fn generate_schedule(enrollment: &Enrollment) -> Result<Vec<PaymentObligation>, BillingError> {
        Self::validate_schedule_input(enrollment.duration_months, enrollment.fee_amount)?;

        let period = enrollment.recurrence.period_months();
        let duration = enrollment.duration_months.unsigned_abs();
        let count = duration / period;

        if count == 0 {
            warn!(
                enrollment_id = %enrollment.id,
                duration_months = duration,
                recurrence = %enrollment.recurrence,
                "Contract shorter than one billing period, no payments generated"
            );
            return Ok(Vec::new());
        }

        let schedule = (0..count)
            .map(|i| {
                calendar::add_months(enrollment.start_date, i * period)
                    .map(|due| {
                        PaymentObligation::pending(enrollment.id, enrollment.fee_amount, due)
                    })
                    .ok_or_else(|| BillingError::schedule("due date outside supported calendar range"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            enrollment_id = %enrollment.id,
            payments = schedule.len(),
            "Generated payment schedule"
        );

        Ok(schedule)
    }

    /// Effective status of a payment relative to `today`.
    ///
    /// Paid stays paid. An unsettled payment whose due date is before
    /// `today` is overdue regardless of its stored status. Everything else is
    /// pending.
    #[must_use]
    pub fn effective_status(payment: &PaymentObligation, today: NaiveDate) -> PaymentStatus {
        match payment.status {
            PaymentStatus::Paid => PaymentStatus::Paid,
            PaymentStatus::Pending | PaymentStatus::Overdue if payment.due_date < today => {
                PaymentStatus::Overdue
            }
            PaymentStatus::Pending | PaymentStatus::Overdue => PaymentStatus::Pending,
        }
    }

    /// Returns true when the payment is effectively overdue by at least
    /// `threshold_days` days.
    #[must_use]
    pub fn is_overdue_by(payment: &PaymentObligation, today: NaiveDate, threshold_days: i64) -> bool {
        Self::effective_status(payment, today) == PaymentStatus::Overdue
            && calendar::days_between(payment.due_date, today) >= threshold_days
    }

    /// Aggregates totals and counts over a collection of payments.
    ///
    /// Paid and pending use stored status; overdue uses effective status.
    /// A record stored as overdue whose due date has not arrived counts as
    /// pending, so every unsettled record lands in at least one bucket.
    #[must_use]
    pub fn aggregate(payments: &[PaymentObligation], today: NaiveDate) -> BillingSummary {
        payments
            .iter()
            .fold(BillingSummary::default(), |mut summary, payment| {
                let effective = Self::effective_status(payment, today);

                match (payment.status, effective) {
                    (PaymentStatus::Paid, _) => {
                        summary.received += payment.amount;
                        summary.paid_count += 1;
                    }
                    // Stored as overdue but not yet due: still pending.
                    (PaymentStatus::Pending, _)
                    | (PaymentStatus::Overdue, PaymentStatus::Pending) => {
                        summary.pending += payment.amount;
                        summary.pending_count += 1;
                        if effective != PaymentStatus::Overdue {
                            summary.pending_not_overdue += payment.amount;
                        }
                    }
                    (PaymentStatus::Overdue, _) => {}
                }

                if effective == PaymentStatus::Overdue {
                    summary.overdue += payment.amount;
                    summary.overdue_count += 1;
                }

                summary
            })
    }

    /// Settles a payment on `today`.
    ///
    /// Early payment is allowed. Marking an already-paid payment returns it
    /// unchanged, keeping the original paid date.
    #[must_use]
    pub fn mark_paid(payment: &PaymentObligation, today: NaiveDate) -> PaymentObligation {
        if payment.status == PaymentStatus::Paid {
            return payment.clone();
        }

        debug!(payment_id = %payment.id, paid_date = %today, "Payment settled");

        PaymentObligation {
            status: PaymentStatus::Paid,
            paid_date: Some(today),
            ..payment.clone()
        }
    }

    /// Returns corrected copies of stored-pending payments that are now
    /// overdue, for callers that choose to persist the reclassification.
    #[must_use]
    pub fn reclassify(payments: &[PaymentObligation], today: NaiveDate) -> Vec<PaymentObligation> {
        payments
            .iter()
            .filter(|p| {
                p.status == PaymentStatus::Pending
                    && Self::effective_status(p, today) == PaymentStatus::Overdue
            })
            .map(|p| PaymentObligation {
                status: PaymentStatus::Overdue,
                ..p.clone()
            })
            .collect()
    }
}
