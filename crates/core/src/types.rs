//! Shared primitive types and id token generation.

use rand::Rng;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Length of the random part of a generated id.
pub const TOKEN_LENGTH: usize = 6;

/// Generate a short lowercase alphanumeric token.
///
/// Ids only need to be unique enough to avoid collision within a single
/// editing session, so a short random token suffices.
pub fn short_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Generate a fresh doctor model id (e.g. `doc_k3x9qa`).
pub fn new_model_id() -> String {
    format!("doc_{}", short_token())
}

/// Generate a fresh shot id (e.g. `shot_b07mfp`).
pub fn new_shot_id() -> String {
    format!("shot_{}", short_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_expected_length_and_alphabet() {
        let token = short_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn model_id_is_prefixed() {
        assert!(new_model_id().starts_with("doc_"));
    }

    #[test]
    fn shot_id_is_prefixed() {
        assert!(new_shot_id().starts_with("shot_"));
    }
}
