use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// Outstanding balance carried by one member, keyed by flat number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberBalance {
    /// The member's flat number
    pub flat_number: String,

    /// Amount the member still owes the society
    pub outstanding: f64,

    /// Amount the member has paid in advance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance: Option<f64>,

    /// ISO date this balance was computed for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl MemberBalance {
    /// Record the outstanding amount for one flat
    pub fn new(flat_number: impl Into<String>, outstanding: f64) -> Self {
        Self {
            flat_number: flat_number.into(),
            outstanding,
            advance: None,
            as_of: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for MemberBalance {
    const COLLECTION: &'static str = "memberBalances";
    const ID_TAG: &'static str = "member";

    fn natural_key(&self) -> Option<String> {
        Some(self.flat_number.clone())
    }
}
