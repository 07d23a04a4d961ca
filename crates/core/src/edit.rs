//! Copy-on-write edit operations.
//!
//! The editor surface never mutates the live model in place: every field
//! edit is described by a [`ModelEdit`] and applied with [`apply_edit`],
//! which consumes the current value and returns the replacement with
//! `updatedAt` refreshed. Shot edits that name an out-of-range index leave
//! the model unchanged (no timestamp bump).

use crate::model::{
    template_shots, Background, DoctorModel, Framing, Lighting, Outfit, Shot, VoiceGender,
    VoiceTone,
};
use crate::types::new_shot_id;

/// Duration assigned to a newly added shot, in seconds.
pub const NEW_SHOT_DURATION_SECONDS: f64 = 6.0;

/// One field edit produced by the editor surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEdit {
    // Identity
    SetName(String),
    SetCredentials(String),
    SetSpecialty(String),
    SetBio(String),

    // Voice
    SetVoiceGender(VoiceGender),
    SetVoiceTone(VoiceTone),
    SetVoiceSpeedWpm(f64),
    /// Blank input clears the accent.
    SetVoiceAccent(String),

    // Wardrobe
    SetOutfit(Outfit),
    /// Comma-separated labels; blanks are dropped.
    SetAccessories(String),
    SetWardrobeColor(String),

    // Scene
    SetBackground(Background),
    SetBackgroundUrl(String),
    SetFraming(Framing),
    SetLighting(Lighting),
    SetCaptions(bool),

    // Branding
    SetPrimaryColor(String),
    SetSecondaryColor(String),
    SetLogoUrl(String),

    // Shots
    SetShotTitle { index: usize, title: String },
    SetShotObjective { index: usize, objective: String },
    SetShotDurationSeconds { index: usize, duration_seconds: f64 },
    SetShotScript { index: usize, script: String },
    SetShotBrollCue { index: usize, broll_cue: String },
    SetShotOnScreenText { index: usize, on_screen_text: String },
    /// Append a blank shot (`shot_{n}`, "Shot {n}", 6 s).
    AddShot,
    /// Insert a copy of the shot right after the original, with a fresh id.
    DuplicateShot { index: usize },
    RemoveShot { index: usize },
    /// Replace the shot list with the canonical three-shot template.
    ApplyShotTemplate,
}

/// Blank strings clear an optional field.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Parse a comma-separated accessory string into trimmed, non-blank labels.
fn parse_accessories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Apply one edit, consuming the current model and returning the new value.
pub fn apply_edit(model: DoctorModel, edit: ModelEdit) -> DoctorModel {
    let mut next = model;
    match edit {
        ModelEdit::SetName(name) => next.name = name,
        ModelEdit::SetCredentials(credentials) => next.credentials = credentials,
        ModelEdit::SetSpecialty(specialty) => next.specialty = specialty,
        ModelEdit::SetBio(bio) => next.bio = bio,

        ModelEdit::SetVoiceGender(gender) => next.voice.gender = gender,
        ModelEdit::SetVoiceTone(tone) => next.voice.tone = tone,
        ModelEdit::SetVoiceSpeedWpm(speed_wpm) => next.voice.speed_wpm = speed_wpm,
        ModelEdit::SetVoiceAccent(accent) => next.voice.accent = non_empty(accent),

        ModelEdit::SetOutfit(outfit) => next.wardrobe.outfit = outfit,
        ModelEdit::SetAccessories(raw) => {
            next.wardrobe.accessories = Some(parse_accessories(&raw));
        }
        ModelEdit::SetWardrobeColor(color) => next.wardrobe.color_theme = non_empty(color),

        ModelEdit::SetBackground(background) => next.scene.background = background,
        ModelEdit::SetBackgroundUrl(url) => next.scene.background_url = non_empty(url),
        ModelEdit::SetFraming(framing) => next.scene.framing = framing,
        ModelEdit::SetLighting(lighting) => next.scene.lighting = lighting,
        ModelEdit::SetCaptions(captions) => next.scene.captions = captions,

        ModelEdit::SetPrimaryColor(color) => {
            next.branding.get_or_insert_with(Default::default).primary_color = non_empty(color);
        }
        ModelEdit::SetSecondaryColor(color) => {
            next.branding.get_or_insert_with(Default::default).secondary_color = non_empty(color);
        }
        ModelEdit::SetLogoUrl(url) => {
            next.branding.get_or_insert_with(Default::default).logo_url = non_empty(url);
        }

        ModelEdit::SetShotTitle { index, title } => match next.shots.get_mut(index) {
            Some(shot) => shot.title = title,
            None => return next,
        },
        ModelEdit::SetShotObjective { index, objective } => match next.shots.get_mut(index) {
            Some(shot) => shot.objective = objective,
            None => return next,
        },
        ModelEdit::SetShotDurationSeconds {
            index,
            duration_seconds,
        } => match next.shots.get_mut(index) {
            Some(shot) => shot.duration_seconds = duration_seconds,
            None => return next,
        },
        ModelEdit::SetShotScript { index, script } => match next.shots.get_mut(index) {
            Some(shot) => shot.script = script,
            None => return next,
        },
        ModelEdit::SetShotBrollCue { index, broll_cue } => match next.shots.get_mut(index) {
            Some(shot) => shot.broll_cue = non_empty(broll_cue),
            None => return next,
        },
        ModelEdit::SetShotOnScreenText {
            index,
            on_screen_text,
        } => match next.shots.get_mut(index) {
            Some(shot) => shot.on_screen_text = non_empty(on_screen_text),
            None => return next,
        },

        ModelEdit::AddShot => {
            let n = next.shots.len() + 1;
            next.shots.push(Shot {
                id: format!("shot_{n}"),
                title: format!("Shot {n}"),
                objective: String::new(),
                duration_seconds: NEW_SHOT_DURATION_SECONDS,
                script: String::new(),
                broll_cue: None,
                on_screen_text: None,
            });
        }
        ModelEdit::DuplicateShot { index } => {
            if index >= next.shots.len() {
                return next;
            }
            let mut copy = next.shots[index].clone();
            copy.id = new_shot_id();
            next.shots.insert(index + 1, copy);
        }
        ModelEdit::RemoveShot { index } => {
            if index >= next.shots.len() {
                return next;
            }
            next.shots.remove(index);
        }
        ModelEdit::ApplyShotTemplate => next.shots = template_shots(),
    }
    next.updated_at = chrono::Utc::now();
    next
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
