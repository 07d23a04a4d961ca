//! Read-only plain-text summary of a model, the preview pane next to the
//! form.

use docsona_core::model::DoctorModel;

/// Fallback avatar initials when the name yields none.
const DEFAULT_INITIALS: &str = "DR";

/// Avatar initials: the first letter of each of the first two name words,
/// uppercased.
fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        DEFAULT_INITIALS.to_string()
    } else {
        initials
    }
}

/// Render the read-only summary: identity line, voice / wardrobe / scene
/// badges, and the shot list with optional cue lines.
pub fn render_preview(model: &DoctorModel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "[{}] {} {}\n{}\n",
        initials(&model.name),
        model.name,
        model.credentials,
        model.specialty
    ));
    out.push_str(&format!(
        "Voice: {} / {} / {} WPM\n",
        model.voice.gender, model.voice.tone, model.voice.speed_wpm
    ));
    out.push_str(&format!("Wardrobe: {}\n", model.wardrobe.outfit));
    out.push_str(&format!(
        "Scene: {} / {}\n",
        model.scene.framing, model.scene.lighting
    ));
    if model.scene.captions {
        out.push_str("Captions\n");
    }

    out.push_str("\nShot List\n");
    for (i, shot) in model.shots.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}s)\n",
            i + 1,
            shot.title,
            shot.duration_seconds
        ));
        out.push_str(&format!("   Objective: {}\n", shot.objective));
        out.push_str(&format!("   Script: {}\n", shot.script));
        if let Some(cue) = &shot.broll_cue {
            out.push_str(&format!("   B-roll: {cue}\n"));
        }
        if let Some(text) = &shot.on_screen_text {
            out.push_str(&format!("   On-screen: {text}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsona_core::model::create_empty_model;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Dr. Alex Morgan"), "DA");
        assert_eq!(initials("alex"), "A");
        assert_eq!(initials("  "), "DR");
        assert_eq!(initials(""), "DR");
    }

    #[test]
    fn preview_shows_identity_and_badges() {
        let preview = render_preview(&create_empty_model());
        assert!(preview.contains("[DA] Dr. Alex Morgan MD"));
        assert!(preview.contains("Primary Care"));
        assert!(preview.contains("Voice: neutral / friendly / 150 WPM"));
        assert!(preview.contains("Wardrobe: lab_coat"));
        assert!(preview.contains("Scene: talking_head / soft"));
        assert!(preview.contains("Captions"));
    }

    #[test]
    fn preview_lists_shots_in_order_with_optional_lines() {
        let preview = render_preview(&create_empty_model());
        let intro = preview.find("1. Intro Greeting (8s)").unwrap();
        let education = preview.find("2. Key Education Points (20s)").unwrap();
        let cta = preview.find("3. Call to Action (6s)").unwrap();
        assert!(intro < education && education < cta);
        assert!(preview.contains("On-screen: Welcome"));
        assert!(preview.contains("B-roll: Cut to relevant diagrams or animations"));
    }

    #[test]
    fn captions_badge_is_omitted_when_disabled() {
        let mut model = create_empty_model();
        model.scene.captions = false;
        assert!(!render_preview(&model).contains("Captions"));
    }
}
