//! Client service.

use chrono::NaiveDate;

use super::error::ClientError;
use super::types::{Client, ClientPatch, ClientStatus};
use crate::calendar;

/// Client service for business logic.
pub struct ClientService;

impl ClientService {
    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if name, phone or email is blank, or the email
    /// has no `@` with text on both sides.
    pub fn validate(client: &Client) -> Result<(), ClientError> {
        if client.name.trim().is_empty() {
            return Err(ClientError::MissingField("name"));
        }
        if client.phone.trim().is_empty() {
            return Err(ClientError::MissingField("phone"));
        }

        let email = client.email.trim();
        if email.is_empty() {
            return Err(ClientError::MissingField("email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ClientError::InvalidEmail(client.email.clone())),
        }
    }

    /// Merges a patch into a client record.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the merged record fails validation.
    pub fn apply_patch(original: &Client, patch: ClientPatch) -> Result<Client, ClientError> {
        let merged = Client {
            id: original.id,
            name: patch.name.unwrap_or_else(|| original.name.clone()),
            phone: patch.phone.unwrap_or_else(|| original.phone.clone()),
            email: patch.email.unwrap_or_else(|| original.email.clone()),
            status: patch.status.unwrap_or(original.status),
            photo_url: patch.photo_url.unwrap_or_else(|| original.photo_url.clone()),
            goals: patch.goals.unwrap_or_else(|| original.goals.clone()),
            gender: patch.gender.unwrap_or_else(|| original.gender.clone()),
            birth_date: patch.birth_date.unwrap_or(original.birth_date),
            medical_notes: patch
                .medical_notes
                .unwrap_or_else(|| original.medical_notes.clone()),
            medical_certificate: patch
                .medical_certificate
                .unwrap_or_else(|| original.medical_certificate.clone()),
        };

        Self::validate(&merged)?;
        Ok(merged)
    }

    /// Age on `today`, if the birth date is known.
    #[must_use]
    pub fn age(client: &Client, today: NaiveDate) -> Option<i32> {
        client.birth_date.map(|b| calendar::age_on(b, today))
    }

    /// Returns true if an active client older than `age_limit` has no
    /// medical certificate on file.
    #[must_use]
    pub fn needs_medical_certificate(client: &Client, today: NaiveDate, age_limit: i32) -> bool {
        let has_certificate = client
            .medical_certificate
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());

        client.status == ClientStatus::Active
            && !has_certificate
            && Self::age(client, today).is_some_and(|age| age > age_limit)
    }
}
