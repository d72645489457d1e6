use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// One flat in the society register
///
/// Flats do not grow over time, so the collection is single-level:
/// `flats/{id}`, keyed by the flat number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flat {
    /// Flat number, unique in the society (e.g. "A-101")
    pub flat_number: String,

    /// Registered owner
    pub owner_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,

    /// "owner", "tenant", or "vacant"
    pub occupancy: String,

    /// Carpet area used for rate-based billing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sqft: Option<f64>,

    /// Server-stamped creation time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Server-stamped last-update time (epoch millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Flat {
    /// Register a flat under its owner
    pub fn new(flat_number: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            flat_number: flat_number.into(),
            owner_name: owner_name.into(),
            owner_email: None,
            owner_phone: None,
            occupancy: "owner".to_string(),
            area_sqft: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Flat {
    const COLLECTION: &'static str = "flats";
    const ID_TAG: &'static str = "flat";

    fn natural_key(&self) -> Option<String> {
        Some(self.flat_number.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::derive_record_id;

    #[test]
    fn test_flat_id_embeds_flat_number() {
        let flat = Flat::new("A-101", "R. Sharma");
        assert_eq!(derive_record_id(&flat), "flat-A-101");
    }

    #[test]
    fn test_new_flat_defaults_to_owner_occupied() {
        let flat = Flat::new("A-101", "R. Sharma");
        assert_eq!(flat.occupancy, "owner");
    }
}
