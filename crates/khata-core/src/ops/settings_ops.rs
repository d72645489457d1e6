//! Bill configuration and system settings — singleton documents

use serde_json::{Map, Value};

use crate::collection::{self, Singleton};
use crate::errors::{KhataError, Result};
use crate::model::{BillConfig, SystemSettings};
use crate::store::TreeStore;

/// Overwrite the billing configuration
///
/// # Errors
///
/// * `InvalidRecord` - non-positive rate or a due day outside 1..=28
/// * `StoreUnavailable` - the remote write failed
pub async fn save_bill_config<S: TreeStore + ?Sized>(store: &S, config: &BillConfig) -> Result<()> {
    if !config.maintenance_rate.is_finite() || config.maintenance_rate <= 0.0 {
        return Err(KhataError::InvalidRecord {
            collection: BillConfig::DOC,
            reason: format!(
                "maintenance rate must be positive, got {}",
                config.maintenance_rate
            ),
        });
    }
    if !(1..=28).contains(&config.due_day) {
        return Err(KhataError::InvalidRecord {
            collection: BillConfig::DOC,
            reason: format!("due day must be within 1-28, got {}", config.due_day),
        });
    }
    collection::save_singleton(store, config).await
}

/// Read the billing configuration
pub async fn get_bill_config<S: TreeStore + ?Sized>(store: &S) -> Result<Option<BillConfig>> {
    collection::get_singleton(store).await
}

/// Merge partial fields into the billing configuration
pub async fn update_bill_config<S: TreeStore + ?Sized>(
    store: &S,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_singleton::<S, BillConfig>(store, fields).await
}

/// Overwrite the system settings
pub async fn save_system_settings<S: TreeStore + ?Sized>(
    store: &S,
    settings: &SystemSettings,
) -> Result<()> {
    if settings.currency.trim().is_empty() {
        return Err(KhataError::InvalidRecord {
            collection: SystemSettings::DOC,
            reason: "currency cannot be empty".to_string(),
        });
    }
    collection::save_singleton(store, settings).await
}

/// Read the system settings
pub async fn get_system_settings<S: TreeStore + ?Sized>(
    store: &S,
) -> Result<Option<SystemSettings>> {
    collection::get_singleton(store).await
}

/// Merge partial fields into the system settings
pub async fn update_system_settings<S: TreeStore + ?Sized>(
    store: &S,
    fields: Map<String, Value>,
) -> Result<()> {
    collection::update_singleton::<S, SystemSettings>(store, fields).await
}
