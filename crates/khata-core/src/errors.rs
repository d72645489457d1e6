use khata_core_types::{PathError, PeriodError};
use thiserror::Error;

/// Result type alias using KhataError
pub type Result<T> = std::result::Result<T, KhataError>;

/// Error taxonomy for khata facade operations
///
/// Every operation returns a typed error so callers can tell "not found"
/// from "network failure" from "validation failure" instead of collapsing
/// them all into a boolean or a null.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KhataError {
    // ===== Validation Errors =====
    /// A path segment was malformed (empty or containing a separator)
    #[error("invalid store path: {0}")]
    InvalidPath(#[from] PathError),

    /// The partition key of a record could not be derived
    ///
    /// The write is rejected outright: a malformed year/month segment
    /// would make the record unreachable by id search afterwards.
    #[error("invalid period in {collection} record: {source}")]
    InvalidPeriod {
        collection: &'static str,
        #[source]
        source: PeriodError,
    },

    /// A record failed domain validation before any write was issued
    #[error("invalid {collection} record: {reason}")]
    InvalidRecord {
        collection: &'static str,
        reason: String,
    },

    // ===== Lookup Errors =====
    /// No record with the given id exists anywhere in the collection
    #[error("record not found in {collection}: {record_id}")]
    RecordNotFound {
        collection: String,
        record_id: String,
    },

    // ===== Integration Errors =====
    /// JSON encoding/decoding failed
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// The remote store call failed (transient network class)
    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl KhataError {
    /// Stable error code for programmatic handling and log correlation
    pub fn code(&self) -> &'static str {
        match self {
            KhataError::InvalidPath(_) => "ERR_INVALID_PATH",
            KhataError::InvalidPeriod { .. } => "ERR_INVALID_PERIOD",
            KhataError::InvalidRecord { .. } => "ERR_INVALID_RECORD",
            KhataError::RecordNotFound { .. } => "ERR_NOT_FOUND",
            KhataError::Serialization { .. } => "ERR_SERIALIZATION",
            KhataError::StoreUnavailable { .. } => "ERR_STORE_UNAVAILABLE",
        }
    }

    /// Shorthand for the partition-derivation failure of one collection
    pub fn invalid_period(collection: &'static str, source: PeriodError) -> Self {
        KhataError::InvalidPeriod { collection, source }
    }

    /// Shorthand for a not-found lookup
    pub fn not_found(collection: impl Into<String>, record_id: impl Into<String>) -> Self {
        KhataError::RecordNotFound {
            collection: collection.into(),
            record_id: record_id.into(),
        }
    }

    /// Shorthand for a failed remote call
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        KhataError::StoreUnavailable {
            message: message.into(),
        }
    }
}

/// Conversion from serde_json::Error to KhataError
impl From<serde_json::Error> for KhataError {
    fn from(err: serde_json::Error) -> Self {
        KhataError::Serialization {
            message: err.to_string(),
        }
    }
}
