//! # BambooHR Data Model
//!
//! Serde mappings for the two BambooHR endpoints this crate consumes: the
//! company-wide directory listing and the single-employee detail view. Both
//! payloads are flat camelCase objects; the API reports unset fields of any
//! type as JSON `null`, which deserializes here as the field's zero value
//! (empty string, `false`, `0`) so downstream logic can treat "missing" and
//! "empty" uniformly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats JSON `null` (or an absent key) as an empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats JSON `null` (or an absent key) as `false`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats JSON `null` (or an absent key) as zero.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One field descriptor from the directory response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Field {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub field_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// A flat employee record from `GET /employees/directory`.
///
/// `supervisor` is a free-text reference to another record's `display_name`;
/// it is the only hierarchy information the API exposes. Records are never
/// mutated after retrieval.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub display_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub preferred_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(deserialize_with = "lenient_string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub work_phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub work_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub division: String,
    /// The API returns arbitrary JSON here (string, object or null).
    pub linked_in: Option<Value>,
    #[serde(deserialize_with = "lenient_string")]
    pub supervisor: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub photo_uploaded: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub photo_url: String,
    #[serde(deserialize_with = "lenient_int")]
    pub can_upload_photo: i64,
}

/// The `GET /employees/directory` response: the field descriptors plus the
/// full, ordered employee list. This is the sole input to hierarchy
/// reconstruction; it lives for one command execution only.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Directory {
    pub fields: Vec<Field>,
    pub employees: Vec<Employee>,
}

/// The richer single-employee payload from `GET /employees/{id}`.
///
/// Only the fields this tool renders or follows are mapped; the request's
/// `?fields=` parameter (see [`crate::client`]) is kept in sync with this
/// struct.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndividualEmployee {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub display_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub preferred_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub job_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(deserialize_with = "lenient_string")]
    pub division: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub supervisor: String,
    #[serde(deserialize_with = "lenient_string")]
    pub supervisor_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub supervisor_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub work_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub home_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub best_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub work_phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mobile_phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hire_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub original_hire_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(deserialize_with = "lenient_string")]
    pub employee_number: String,
    pub last_changed: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_bool")]
    pub photo_uploaded: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub photo_url: String,
}
