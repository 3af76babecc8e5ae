//! Client data types.

use chrono::NaiveDate;
use gymdesk_shared::types::ClientId;
use serde::{Deserialize, Serialize};

/// Whether the client currently trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    /// Currently training.
    #[serde(alias = "Ativo")]
    Active,
    /// Not training.
    #[serde(alias = "Inativo")]
    Inactive,
}

/// A client (student) record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Full name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Activity status.
    pub status: ClientStatus,
    /// Photo URL.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Training goals.
    #[serde(default)]
    pub goals: String,
    /// Gender, free text.
    #[serde(default)]
    pub gender: String,
    /// Birth date.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Medical notes.
    #[serde(default)]
    pub medical_notes: Option<String>,
    /// Reference to the uploaded medical certificate.
    #[serde(default)]
    pub medical_certificate: Option<String>,
}

/// Partial update of a client. Present fields replace the original.
///
/// Optional record fields use a nested `Option`: `Some(None)` clears the
/// field, `None` keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientPatch {
    /// New name.
    pub name: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New status.
    pub status: Option<ClientStatus>,
    /// New photo URL.
    pub photo_url: Option<Option<String>>,
    /// New goals.
    pub goals: Option<String>,
    /// New gender.
    pub gender: Option<String>,
    /// New birth date.
    pub birth_date: Option<Option<NaiveDate>>,
    /// New medical notes.
    pub medical_notes: Option<Option<String>>,
    /// New medical certificate reference.
    pub medical_certificate: Option<Option<String>>,
}
