//! Version gate for persisted model documents.
//!
//! The `version` field is read and branched on before the rest of the
//! document's shape is trusted. Version [`SCHEMA_VERSION`] is current and
//! passes through unchanged; there are no older on-disk versions, so
//! anything else is refused.

use serde_json::Value;

use docsona_core::model::SCHEMA_VERSION;

use crate::error::StoreError;

/// Bring a raw stored document up to the current schema version.
///
/// Returns the document ready for a strict decode, or an error when the
/// version is missing, non-integral, or unknown.
pub fn migrate_to_current(value: Value) -> Result<Value, StoreError> {
    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .ok_or(StoreError::MissingVersion)?;

    if version == u64::from(SCHEMA_VERSION) {
        Ok(value)
    } else {
        Err(StoreError::UnsupportedVersion { found: version })
    }
}
