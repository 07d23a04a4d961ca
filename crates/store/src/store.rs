//! The file-backed model store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use docsona_core::model::DoctorModel;

use crate::error::StoreError;
use crate::migrate::migrate_to_current;

/// The single well-known key the live model is stored under.
pub const MODEL_KEY: &str = "doctor_model";

/// A synchronous key-value store scoped to one directory, holding at most
/// one model document.
///
/// Writes are cheap and local; the caller invokes [`ModelStore::save`] after
/// every accepted model change. This is not a durability guarantee beyond
/// what the filesystem offers.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn model_path(&self) -> PathBuf {
        self.dir.join(format!("{MODEL_KEY}.json"))
    }

    /// Serialize the model and overwrite any prior value under the key.
    pub fn save(&self, model: &DoctorModel) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(model)?;
        let path = self.model_path();
        fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "model saved");
        Ok(())
    }

    /// Read the stored model, or `None` when the key is absent.
    ///
    /// Unreadable, unparsable, wrong-shaped, or wrong-version data is also
    /// reported as `None` (with a warning) rather than an error: the caller
    /// falls back to a fresh default and the next save overwrites the bad
    /// state.
    pub fn load(&self) -> Option<DoctorModel> {
        let path = self.model_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "stored model unreadable, treating as absent");
                return None;
            }
        };
        match decode(&raw) {
            Ok(model) => {
                tracing::debug!(path = %path.display(), id = %model.id, "model loaded");
                Some(model)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding unusable stored model");
                None
            }
        }
    }

    /// Remove the key. Idempotent: clearing an empty store succeeds.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.model_path()) {
            Ok(()) => {
                tracing::debug!("model cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// The directory this store is scoped to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Strict decode of raw stored text: parse, run the version gate, then
/// decode into the model shape.
fn decode(raw: &str) -> Result<DoctorModel, StoreError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let value = migrate_to_current(value)?;
    Ok(serde_json::from_value(value)?)
}
