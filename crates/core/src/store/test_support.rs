//! Shared fixture for view tests.
//!
//! As of 2024-02-01:
//! - Ana Souza (43, no certificate) has a monthly contract with one paid
//!   payment, one overdue payment (22 days) and four future ones.
//! - Carlos Pereira has a quarterly contract, first payment paid early.
//! - Elisa Martins has a one-month contract ending 2024-02-10, paid on time.
//! - Denise Rocha is inactive with no contracts.

use chrono::NaiveDate;
use gymdesk_shared::types::{ClientId, EnrollmentId, PresenceId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::GymSnapshot;
use crate::attendance::{Presence, PresenceStatus};
use crate::billing::{BillingService, PaymentObligation, PaymentStatus, Recurrence};
use crate::client::{Client, ClientStatus};
use crate::enrollment::{Enrollment, EnrollmentService, EnrollmentStatus, TrainingMode};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn client(name: &str, status: ClientStatus, birth_date: NaiveDate) -> Client {
    let handle = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    Client {
        id: ClientId::new(),
        name: name.into(),
        phone: "+55 11 90000-0000".into(),
        email: format!("{handle}@example.com"),
        status,
        photo_url: None,
        goals: String::new(),
        gender: String::new(),
        birth_date: Some(birth_date),
        medical_notes: None,
        medical_certificate: None,
    }
}

pub(crate) fn enrollment(
    client_id: ClientId,
    start_date: NaiveDate,
    duration_months: i32,
    recurrence: Recurrence,
    fee_amount: Decimal,
) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(),
        client_id,
        start_date,
        duration_months,
        training_mode: TrainingMode::InPerson,
        weekly_frequency: 3,
        fee_amount,
        recurrence,
        end_date: EnrollmentService::end_date_for(start_date, duration_months).unwrap(),
        status: EnrollmentStatus::Active,
        amendment_note: None,
    }
}

fn settle(payment: &mut PaymentObligation, paid_on: NaiveDate) {
    payment.status = PaymentStatus::Paid;
    payment.paid_date = Some(paid_on);
}

fn presence(client_id: ClientId, day: NaiveDate, status: PresenceStatus) -> Presence {
    Presence {
        id: PresenceId::new(),
        client_id,
        training_date: day,
        status,
        note: None,
    }
}

pub(crate) fn client_named<'a>(snapshot: &'a GymSnapshot, name: &str) -> &'a Client {
    snapshot.clients.iter().find(|c| c.name == name).unwrap()
}

pub(crate) fn sample_snapshot() -> GymSnapshot {
    let ana = client("Ana Souza", ClientStatus::Active, date(1980, 3, 10));
    let carlos = client("Carlos Pereira", ClientStatus::Active, date(1995, 7, 1));
    let elisa = client("Elisa Martins", ClientStatus::Active, date(1990, 1, 1));
    let denise = client("Denise Rocha", ClientStatus::Inactive, date(1970, 9, 30));

    let ana_plan = enrollment(ana.id, date(2023, 12, 10), 6, Recurrence::Monthly, dec!(200));
    let carlos_plan = enrollment(carlos.id, date(2023, 12, 1), 6, Recurrence::Quarterly, dec!(540));
    let elisa_plan = enrollment(elisa.id, date(2024, 1, 10), 1, Recurrence::Monthly, dec!(250));

    let mut ana_payments = BillingService::generate_schedule(&ana_plan).unwrap();
    settle(&mut ana_payments[0], date(2023, 12, 15));

    let mut carlos_payments = BillingService::generate_schedule(&carlos_plan).unwrap();
    settle(&mut carlos_payments[0], date(2023, 11, 28));

    let mut elisa_payments = BillingService::generate_schedule(&elisa_plan).unwrap();
    settle(&mut elisa_payments[0], date(2024, 1, 10));

    let presences = vec![
        presence(ana.id, date(2024, 1, 15), PresenceStatus::Present),
        presence(ana.id, date(2024, 1, 17), PresenceStatus::Absent),
        presence(ana.id, date(2024, 1, 22), PresenceStatus::Present),
        presence(carlos.id, date(2024, 1, 16), PresenceStatus::Present),
    ];

    GymSnapshot {
        clients: vec![ana, carlos, elisa, denise],
        enrollments: vec![ana_plan, carlos_plan, elisa_plan],
        payments: ana_payments
            .into_iter()
            .chain(carlos_payments)
            .chain(elisa_payments)
            .collect(),
        presences,
    }
}
