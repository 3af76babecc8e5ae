//! Payment filtering for the payment management view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::service::BillingService;
use super::types::{BillingSummary, PaymentObligation, PaymentStatus};
use crate::store::GymSnapshot;

/// Criteria for narrowing the payment list.
///
/// Status matches on effective status. Date bounds are inclusive and apply
/// to the due date. The name search is case-insensitive and excludes
/// payments whose client cannot be resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentFilter {
    /// Effective status to match.
    pub status: Option<PaymentStatus>,
    /// Earliest due date.
    pub due_from: Option<NaiveDate>,
    /// Latest due date.
    pub due_to: Option<NaiveDate>,
    /// Substring of the client's name.
    pub client_name: Option<String>,
}

/// Filter result with totals over the matched payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredPayments {
    /// Matching payments, in store order.
    pub payments: Vec<PaymentObligation>,
    /// Totals over `payments`.
    pub summary: BillingSummary,
}

impl PaymentFilter {
    /// Applies the filter to the snapshot's payments.
    #[must_use]
    pub fn apply(&self, snapshot: &GymSnapshot, today: NaiveDate) -> FilteredPayments {
        let needle = self
            .client_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let payments: Vec<PaymentObligation> = snapshot
            .payments
            .iter()
            .filter(|p| {
                self.status
                    .is_none_or(|s| BillingService::effective_status(p, today) == s)
            })
            .filter(|p| self.due_from.is_none_or(|from| p.due_date >= from))
            .filter(|p| self.due_to.is_none_or(|to| p.due_date <= to))
            .filter(|p| match &needle {
                None => true,
                Some(needle) => snapshot
                    .client_for_payment(p)
                    .is_some_and(|c| c.name.to_lowercase().contains(needle.as_str())),
            })
            .cloned()
            .collect();

        let summary = BillingService::aggregate(&payments, today);
        FilteredPayments { payments, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{date, sample_snapshot};

    #[test]
    fn test_empty_filter_keeps_everything() {
        let snapshot = sample_snapshot();
        let result = PaymentFilter::default().apply(&snapshot, date(2024, 2, 1));
        assert_eq!(result.payments.len(), snapshot.payments.len());
    }

    #[test]
    fn test_filter_by_effective_status() {
        let snapshot = sample_snapshot();
        let filter = PaymentFilter {
            status: Some(PaymentStatus::Overdue),
            ..PaymentFilter::default()
        };
        let today = date(2024, 2, 1);
        let result = filter.apply(&snapshot, today);

        assert!(!result.payments.is_empty());
        assert!(result
            .payments
            .iter()
            .all(|p| BillingService::effective_status(p, today) == PaymentStatus::Overdue));
        assert_eq!(result.summary.overdue_count, result.payments.len());
    }

    #[test]
    fn test_filter_by_due_range_and_name() {
        let snapshot = sample_snapshot();
        let filter = PaymentFilter {
            due_from: Some(date(2024, 1, 1)),
            due_to: Some(date(2024, 1, 31)),
            client_name: Some("ANA".into()),
            ..PaymentFilter::default()
        };
        let result = filter.apply(&snapshot, date(2024, 2, 1));

        assert!(!result.payments.is_empty());
        for p in &result.payments {
            assert!(p.due_date >= date(2024, 1, 1) && p.due_date <= date(2024, 1, 31));
            assert_eq!(snapshot.client_for_payment(p).unwrap().name, "Ana Souza");
        }
    }

    #[test]
    fn test_unknown_name_matches_nothing() {
        let snapshot = sample_snapshot();
        let filter = PaymentFilter {
            client_name: Some("zzz".into()),
            ..PaymentFilter::default()
        };
        let result = filter.apply(&snapshot, date(2024, 2, 1));
        assert!(result.payments.is_empty());
        assert_eq!(result.summary, BillingSummary::default());
    }
}
