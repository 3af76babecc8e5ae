//! Snapshot loading and view rendering.

use anyhow::Context;
use chrono::NaiveDate;
use serde_json::{Value, json};

use gymdesk_core::dashboard::DashboardService;
use gymdesk_core::notification::{NotificationService, ViewerContext};
use gymdesk_core::portal::PortalService;
use gymdesk_core::reports::ReportService;
use gymdesk_core::store::{GymSnapshot, RawSnapshot};
use gymdesk_shared::BillingConfig;
use gymdesk_shared::types::ClientId;

/// View requested on the command line.
pub enum View {
    Dashboard,
    Notifications { client: Option<ClientId> },
    Reports { months: u32 },
    Portal { client: ClientId },
}

/// Parses a snapshot, accepting either typed records or the store's export
/// format with text dates and labels.
///
/// When neither format fits, the error carries both causes.
pub fn load_snapshot(text: &str) -> anyhow::Result<GymSnapshot> {
    let typed_err = match serde_json::from_str::<GymSnapshot>(text) {
        Ok(snapshot) => return Ok(snapshot),
        Err(err) => err,
    };

    let raw: RawSnapshot = serde_json::from_str(text).with_context(|| {
        format!("Snapshot is not valid JSON records (as typed records: {typed_err})")
    })?;
    GymSnapshot::try_from(raw).with_context(|| {
        format!("Snapshot contains invalid records (as typed records: {typed_err})")
    })
}

/// Evaluates the requested view.
pub fn render(
    view: &View,
    snapshot: &GymSnapshot,
    today: NaiveDate,
    config: &BillingConfig,
) -> anyhow::Result<Value> {
    let value = match view {
        View::Dashboard => serde_json::to_value(DashboardService::metrics(snapshot, today, config))?,
        View::Notifications { client } => {
            let viewer = client.map_or(ViewerContext::Admin, ViewerContext::Student);
            serde_json::to_value(NotificationService::compute(snapshot, today, viewer, config))?
        }
        View::Reports { months } => json!({
            "monthly_revenue": ReportService::monthly_revenue(&snapshot.payments, today, *months)?,
            "client_status": ReportService::client_status(&snapshot.clients),
            "payment_performance": ReportService::payment_performance(snapshot),
        }),
        View::Portal { client } => {
            serde_json::to_value(PortalService::view(snapshot, *client, today, config)?)?
        }
    };
    Ok(value)
}
