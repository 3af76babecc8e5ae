//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{ClientStatusReport, MonthlyRevenue, PaymentPerformance, RevenueReport};
use crate::billing::{PaymentObligation, PaymentStatus};
use crate::calendar;
use crate::client::{Client, ClientStatus};
use crate::store::GymSnapshot;

/// Service for generating management reports.
pub struct ReportService;

impl ReportService {
    /// Revenue by settlement month for the `months` months ending with the
    /// month containing `today`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidWindow` if `months` is zero.
    pub fn monthly_revenue(
        payments: &[PaymentObligation],
        today: NaiveDate,
        months: u32,
    ) -> Result<RevenueReport, ReportError> {
        if months == 0 {
            return Err(ReportError::InvalidWindow(months));
        }

        let current = calendar::month_start(today);
        let entries = (0..months)
            .rev()
            .map(|back| {
                let month = calendar::sub_months(current, back).ok_or(ReportError::OutOfRange)?;
                let revenue = payments
                    .iter()
                    .filter(|p| p.status == PaymentStatus::Paid)
                    .filter(|p| p.paid_date.is_some_and(|d| calendar::same_month(d, month)))
                    .map(|p| p.amount)
                    .sum();
                Ok(MonthlyRevenue { month, revenue })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        let total: Decimal = entries.iter().map(|m| m.revenue).sum();
        let average = (total / Decimal::from(months)).round_dp(2);

        Ok(RevenueReport {
            months: entries,
            total,
            average,
        })
    }

    /// Counts clients by status.
    #[must_use]
    pub fn client_status(clients: &[Client]) -> ClientStatusReport {
        clients
            .iter()
            .fold(ClientStatusReport::default(), |mut report, c| {
                match c.status {
                    ClientStatus::Active => report.active += 1,
                    ClientStatus::Inactive => report.inactive += 1,
                }
                report
            })
    }

    /// Punctuality of settled payments, per active client in store order.
    ///
    /// A payment is on time when its paid date is on or before its due date.
    #[must_use]
    pub fn payment_performance(snapshot: &GymSnapshot) -> Vec<PaymentPerformance> {
        snapshot
            .clients
            .iter()
            .filter(|c| c.status == ClientStatus::Active)
            .map(|client| {
                let (on_time, late) = snapshot
                    .payments_for_client(client.id)
                    .iter()
                    .filter(|p| p.status == PaymentStatus::Paid)
                    .filter_map(|p| p.paid_date.map(|paid| paid <= p.due_date))
                    .fold((0, 0), |(on_time, late), punctual| {
                        if punctual {
                            (on_time + 1, late)
                        } else {
                            (on_time, late + 1)
                        }
                    });

                let total_paid = on_time + late;
                let on_time_percent = if total_paid == 0 {
                    Decimal::ZERO
                } else {
                    (Decimal::from(on_time) / Decimal::from(total_paid) * Decimal::ONE_HUNDRED)
                        .round_dp(2)
                };

                PaymentPerformance {
                    client_id: client.id,
                    name: client.name.clone(),
                    on_time,
                    late,
                    total_paid,
                    on_time_percent,
                }
            })
            .collect()
    }
}
