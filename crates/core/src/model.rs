//! The doctor persona data model and its canonical default instance.
//!
//! All types here are plain owned values: the editor never mutates a model
//! in place, it replaces the whole value on every edit (see [`crate::edit`]).
//! Serde field names are camelCase and enum values snake_case to match the
//! persisted / exported document shape. Every struct is
//! `deny_unknown_fields`, so decoding doubles as a schema check: documents
//! with unknown, missing, or mistyped fields are rejected rather than
//! silently adopted.

use serde::{Deserialize, Serialize};

use crate::types::{new_model_id, Timestamp};

/// Current schema version stamped into every model document.
pub const SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceGender {
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceTone {
    Friendly,
    Authoritative,
    Calm,
    Energetic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outfit {
    LabCoat,
    Scrubs,
    BusinessCasual,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    Clinic,
    Office,
    BlueScreen,
    White,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    TalkingHead,
    MediumShot,
    Wide,
    TopDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lighting {
    Soft,
    HighKey,
    Dramatic,
    Natural,
}

impl VoiceGender {
    /// The snake_case wire label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Neutral => "neutral",
        }
    }
}

impl VoiceTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Authoritative => "authoritative",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
        }
    }
}

impl Outfit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabCoat => "lab_coat",
            Self::Scrubs => "scrubs",
            Self::BusinessCasual => "business_casual",
            Self::Other => "other",
        }
    }
}

impl Background {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clinic => "clinic",
            Self::Office => "office",
            Self::BlueScreen => "blue_screen",
            Self::White => "white",
            Self::Custom => "custom",
        }
    }
}

impl Framing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TalkingHead => "talking_head",
            Self::MediumShot => "medium_shot",
            Self::Wide => "wide",
            Self::TopDown => "top_down",
        }
    }
}

impl Lighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::HighKey => "high_key",
            Self::Dramatic => "dramatic",
            Self::Natural => "natural",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ident),+) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_via_as_str!(VoiceGender, VoiceTone, Outfit, Background, Framing, Lighting);

// ---------------------------------------------------------------------------
// Nested value types
// ---------------------------------------------------------------------------

/// How the persona sounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VoiceProfile {
    pub gender: VoiceGender,
    pub tone: VoiceTone,
    /// Speaking speed in words per minute. Range enforcement belongs to the
    /// validator, not the decoder, so any finite or non-finite number decodes.
    pub speed_wpm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// What the persona wears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Wardrobe {
    pub outfit: Outfit,
    /// Free-text accessory labels, order preserved (e.g. "stethoscope").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,
    /// Hex code or color name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<String>,
}

/// Where and how the persona is filmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneSettings {
    pub background: Background,
    /// Required when `background` is [`Background::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    pub framing: Framing,
    pub lighting: Lighting,
    pub captions: bool,
}

/// One entry in the ordered shot list. Order is the video sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Shot {
    /// Stable within the list. Duplication assigns a fresh id.
    pub id: String,
    pub title: String,
    pub objective: String,
    pub duration_seconds: f64,
    pub script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broll_cue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_screen_text: Option<String>,
}

/// Optional display hints. No invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Root entity
// ---------------------------------------------------------------------------

/// The root persona entity. One live instance at a time, owned by the
/// editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DoctorModel {
    /// Opaque stable identifier, immutable after creation.
    pub id: String,
    pub name: String,
    /// E.g. "MD", "DO", "MBBS".
    pub credentials: String,
    pub specialty: String,
    pub bio: String,
    pub wardrobe: Wardrobe,
    pub voice: VoiceProfile,
    pub scene: SceneSettings,
    pub shots: Vec<Shot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    /// Immutable after creation.
    pub created_at: Timestamp,
    /// Bumped on every semantic edit.
    pub updated_at: Timestamp,
    /// Schema version tag, currently [`SCHEMA_VERSION`].
    pub version: u32,
}

// ---------------------------------------------------------------------------
// Canonical default
// ---------------------------------------------------------------------------

/// The canonical three-shot seed (`intro`, `education`, `cta`).
///
/// Used both by [`create_empty_model`] and by the `ApplyShotTemplate` edit.
pub fn template_shots() -> Vec<Shot> {
    vec![
        Shot {
            id: "intro".into(),
            title: "Intro Greeting".into(),
            objective: "Establish credibility and topic".into(),
            duration_seconds: 8.0,
            script: "Hello, I'm Dr. Alex Morgan. Today we'll cover the basics you need to know."
                .into(),
            broll_cue: None,
            on_screen_text: Some("Welcome".into()),
        },
        Shot {
            id: "education".into(),
            title: "Key Education Points".into(),
            objective: "Explain 2-3 concise takeaways".into(),
            duration_seconds: 20.0,
            script: "First, keep it simple. Second, follow the plan. Finally, ask questions."
                .into(),
            broll_cue: Some("Cut to relevant diagrams or animations".into()),
            on_screen_text: None,
        },
        Shot {
            id: "cta".into(),
            title: "Call to Action".into(),
            objective: "Encourage follow-up".into(),
            duration_seconds: 6.0,
            script: "If you have concerns, reach out to your healthcare provider.".into(),
            broll_cue: None,
            on_screen_text: Some("Consult your doctor".into()),
        },
    ]
}

/// Build a fresh default model: new id, current timestamps, schema version
/// [`SCHEMA_VERSION`], and the canonical sample persona with three seeded
/// shots. Pure constructor; the validator reports zero errors on the result.
pub fn create_empty_model() -> DoctorModel {
    let now = chrono::Utc::now();
    DoctorModel {
        id: new_model_id(),
        name: "Dr. Alex Morgan".into(),
        credentials: "MD".into(),
        specialty: "Primary Care".into(),
        bio: "Board-certified physician focused on clear, compassionate patient education.".into(),
        wardrobe: Wardrobe {
            outfit: Outfit::LabCoat,
            accessories: Some(vec!["stethoscope".into(), "name_badge".into()]),
            color_theme: Some("#1f6feb".into()),
        },
        voice: VoiceProfile {
            gender: VoiceGender::Neutral,
            tone: VoiceTone::Friendly,
            speed_wpm: 150.0,
            accent: Some("General American".into()),
        },
        scene: SceneSettings {
            background: Background::Clinic,
            background_url: None,
            framing: Framing::TalkingHead,
            lighting: Lighting::Soft,
            captions: true,
        },
        shots: template_shots(),
        branding: Some(Branding {
            primary_color: Some("#1f6feb".into()),
            secondary_color: Some("#8b5cf6".into()),
            logo_url: None,
        }),
        created_at: now,
        updated_at: now,
        version: SCHEMA_VERSION,
    }
}

/// Sum of all shot durations in seconds.
pub fn total_duration_seconds(model: &DoctorModel) -> f64 {
    model.shots.iter().map(|s| s.duration_seconds).sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
