use serde::{Deserialize, Serialize};

use crate::collection::Singleton;

/// The society's own registration record — one document per deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietyInfo {
    pub name: String,

    pub address: String,

    /// Co-operative registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl SocietyInfo {
    /// Create the society record
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            registration_number: None,
            contact_email: None,
            contact_phone: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Singleton for SocietyInfo {
    const DOC: &'static str = "societyInfo";
}
