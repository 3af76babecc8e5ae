//! Dashboard service.

use chrono::NaiveDate;
use gymdesk_shared::BillingConfig;
use rust_decimal::Decimal;

use super::types::{DashboardMetrics, PaymentActivity};
use crate::billing::{BillingService, PaymentObligation, PaymentStatus};
use crate::calendar;
use crate::client::{ClientService, ClientStatus};
use crate::store::GymSnapshot;

const ACTIVITY_LIMIT: usize = 3;

/// Dashboard service for business logic.
pub struct DashboardService;

impl DashboardService {
    /// Computes the dashboard as of `today`.
    #[must_use]
    pub fn metrics(snapshot: &GymSnapshot, today: NaiveDate, config: &BillingConfig) -> DashboardMetrics {
        let totals = BillingService::aggregate(&snapshot.payments, today);

        let active_clients = snapshot
            .clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .count();

        let new_enrollments_this_month = snapshot
            .enrollments
            .iter()
            .filter(|e| calendar::same_month(e.start_date, today))
            .count();

        let received_this_month: Decimal = snapshot
            .payments
            .iter()
            .filter(|p| {
                p.status == PaymentStatus::Paid
                    && p.paid_date.is_some_and(|d| calendar::same_month(d, today))
            })
            .map(|p| p.amount)
            .sum();

        let medical_certificates_pending = snapshot
            .clients
            .iter()
            .filter(|c| ClientService::needs_medical_certificate(c, today, config.medical_certificate_age))
            .count();

        let mut settled: Vec<&PaymentObligation> = snapshot
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid && p.paid_date.is_some())
            .collect();
        settled.sort_by(|a, b| b.paid_date.cmp(&a.paid_date));

        let mut pending: Vec<&PaymentObligation> = snapshot
            .payments
            .iter()
            .filter(|p| BillingService::effective_status(p, today) == PaymentStatus::Pending)
            .collect();
        pending.sort_by_key(|p| p.due_date);

        let activity = |payments: Vec<&PaymentObligation>| -> Vec<PaymentActivity> {
            payments
                .into_iter()
                .take(ACTIVITY_LIMIT)
                .map(|p| Self::activity(snapshot, p, today))
                .collect()
        };

        DashboardMetrics {
            as_of: today,
            currency: config.currency.clone(),
            totals,
            active_clients,
            new_enrollments_this_month,
            received_this_month,
            monthly_goal: config.monthly_goal,
            goal_progress_percent: Self::progress(received_this_month, config.monthly_goal),
            medical_certificates_pending,
            recent_payments: activity(settled),
            upcoming_payments: activity(pending),
        }
    }

    /// Zero when the goal is not positive or the ratio does not fit a `Decimal`.
    fn progress(received: Decimal, goal: Decimal) -> Decimal {
        if goal <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        received
            .checked_div(goal)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ZERO, |percent| percent.round_dp(2))
    }

    fn activity(snapshot: &GymSnapshot, payment: &PaymentObligation, today: NaiveDate) -> PaymentActivity {
        let client = snapshot.client_for_payment(payment);
        PaymentActivity {
            payment_id: payment.id,
            client_id: client.map(|c| c.id),
            client_name: client.map(|c| c.name.clone()),
            amount: payment.amount,
            due_date: payment.due_date,
            paid_date: payment.paid_date,
            status: BillingService::effective_status(payment, today),
        }
    }
}
