//! Model validation: one pure pass mapping a model to an ordered list of
//! human-readable error messages.
//!
//! Every rule is independent and every violation is reported, so the editor
//! can show the full list. Validation never blocks editing, saving, or
//! exporting.

use crate::model::{Background, DoctorModel};

/// Minimum allowed voice speed in words per minute.
pub const MIN_SPEED_WPM: f64 = 90.0;

/// Maximum allowed voice speed in words per minute.
pub const MAX_SPEED_WPM: f64 = 240.0;

/// Validate a model, returning all violations in a fixed order:
/// identity fields, voice speed, per-shot checks in shot order (title,
/// duration, script), then the custom-background rule. An empty list means
/// the model is valid.
pub fn validate_model(model: &DoctorModel) -> Vec<String> {
    let mut errors = Vec::new();

    if model.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if model.credentials.trim().is_empty() {
        errors.push("Credentials are required".to_string());
    }
    if model.specialty.trim().is_empty() {
        errors.push("Specialty is required".to_string());
    }

    // NaN fails the containment check and is reported as out of range.
    if !(MIN_SPEED_WPM..=MAX_SPEED_WPM).contains(&model.voice.speed_wpm) {
        errors.push("Voice speed must be 90–240 WPM".to_string());
    }

    for (i, shot) in model.shots.iter().enumerate() {
        let n = i + 1;
        if shot.title.trim().is_empty() {
            errors.push(format!("Shot {n} title is required"));
        }
        if !(shot.duration_seconds > 0.0) {
            errors.push(format!("Shot {n} duration must be > 0"));
        }
        if shot.script.trim().is_empty() {
            errors.push(format!("Shot {n} script is required"));
        }
    }

    if model.scene.background == Background::Custom
        && model
            .scene
            .background_url
            .as_deref()
            .map_or(true, str::is_empty)
    {
        errors.push("Custom background URL required".to_string());
    }

    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
