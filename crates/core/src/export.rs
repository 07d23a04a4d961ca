//! Export/import codec for model documents.
//!
//! Export is never gated on validation: a model with outstanding validation
//! errors still exports. Import is strict: the document must decode as a
//! complete model (unknown, missing, or mistyped fields are rejected), and
//! the adopted model gets a fresh `updatedAt`.

use serde::Serialize;

use crate::error::CoreError;
use crate::model::DoctorModel;

/// Fixed suffix appended to every export file name.
pub const EXPORT_FILE_SUFFIX: &str = "_doctor_model.json";

/// A fully rendered export: the suggested file name and its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    /// Pretty-printed model JSON.
    pub contents: String,
}

/// Build the export file name from a persona name.
///
/// Whitespace runs collapse to single underscores, then the fixed
/// [`EXPORT_FILE_SUFFIX`] is appended.
///
/// # Examples
///
/// ```
/// use docsona_core::export::export_file_name;
///
/// assert_eq!(export_file_name("Dr. Alex Morgan"), "Dr._Alex_Morgan_doctor_model.json");
/// assert_eq!(export_file_name("Dr.\t Alex"), "Dr._Alex_doctor_model.json");
/// ```
pub fn export_file_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len() + EXPORT_FILE_SUFFIX.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
                in_whitespace = true;
            }
        } else {
            sanitized.push(ch);
            in_whitespace = false;
        }
    }
    sanitized.push_str(EXPORT_FILE_SUFFIX);
    sanitized
}

/// Serialize a model into a downloadable [`ExportFile`].
pub fn export_model(model: &DoctorModel) -> Result<ExportFile, CoreError> {
    Ok(ExportFile {
        file_name: export_file_name(&model.name),
        contents: serde_json::to_string_pretty(model)?,
    })
}

/// Parse raw text into a model, stamping a fresh `updatedAt`.
///
/// The decode is the schema gate: anything that is not a structurally
/// complete model document fails with [`CoreError::Json`] and the caller's
/// current model stays untouched.
pub fn import_model(raw: &str) -> Result<DoctorModel, CoreError> {
    let mut model: DoctorModel = serde_json::from_str(raw)?;
    model.updated_at = chrono::Utc::now();
    Ok(model)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::create_empty_model;
    use chrono::{Duration, Utc};

    #[test]
    fn file_name_collapses_whitespace_runs() {
        assert_eq!(
            export_file_name("Dr. Alex Morgan"),
            "Dr._Alex_Morgan_doctor_model.json"
        );
        assert_eq!(
            export_file_name("Dr.\t\n  Alex"),
            "Dr._Alex_doctor_model.json"
        );
        assert_eq!(export_file_name(" Dr. Alex "), "_Dr._Alex__doctor_model.json");
    }

    #[test]
    fn empty_name_still_yields_the_suffix() {
        assert_eq!(export_file_name(""), "_doctor_model.json");
    }

    #[test]
    fn export_is_pretty_printed() {
        let file = export_model(&create_empty_model()).unwrap();
        assert!(file.contents.contains('\n'));
        assert!(file.contents.contains("\"speedWpm\": 150.0"));
    }

    #[test]
    fn export_is_not_gated_on_validation() {
        let mut model = create_empty_model();
        model.name = String::new();
        let file = export_model(&model).unwrap();
        assert_eq!(file.file_name, "_doctor_model.json");
    }

    #[test]
    fn round_trip_is_equal_up_to_updated_at() {
        let mut original = create_empty_model();
        original.updated_at = Utc::now() - Duration::hours(2);
        let file = export_model(&original).unwrap();

        let mut imported = import_model(&file.contents).unwrap();
        assert!(imported.updated_at > original.updated_at);
        imported.updated_at = original.updated_at;
        assert_eq!(imported, original);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(import_model("{ not json").is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut value = serde_json::to_value(create_empty_model()).unwrap();
        value["surprise"] = serde_json::json!("extra");
        let raw = serde_json::to_string(&value).unwrap();
        assert!(import_model(&raw).is_err());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let mut value = serde_json::to_value(create_empty_model()).unwrap();
        value.as_object_mut().unwrap().remove("shots");
        let raw = serde_json::to_string(&value).unwrap();
        assert!(import_model(&raw).is_err());
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        let mut value = serde_json::to_value(create_empty_model()).unwrap();
        value["voice"]["speedWpm"] = serde_json::json!("fast");
        let raw = serde_json::to_string(&value).unwrap();
        assert!(import_model(&raw).is_err());
    }

    #[test]
    fn documents_without_optional_fields_import_cleanly() {
        let mut value = serde_json::to_value(create_empty_model()).unwrap();
        value.as_object_mut().unwrap().remove("branding");
        value["voice"].as_object_mut().unwrap().remove("accent");
        let raw = serde_json::to_string(&value).unwrap();
        let imported = import_model(&raw).unwrap();
        assert_eq!(imported.branding, None);
        assert_eq!(imported.voice.accent, None);
    }
}
