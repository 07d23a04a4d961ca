use std::fs;
use std::path::{Path, PathBuf};

use docsona_core::edit::{apply_edit, ModelEdit};
use docsona_core::error::CoreError;
use docsona_core::export::{export_model, import_model, ExportFile};
use docsona_core::model::{create_empty_model, total_duration_seconds, DoctorModel};
use docsona_core::validate::validate_model;
use docsona_store::{ModelStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] CoreError),

    #[error("Export I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// One open editing session.
///
/// Owns the single live model value. Every accepted change replaces the
/// whole value, re-runs the validator, and writes through to the store, so
/// the error list and the persisted document always reflect the same model.
#[derive(Debug)]
pub struct EditorSession {
    store: ModelStore,
    model: DoctorModel,
    errors: Vec<String>,
}

impl EditorSession {
    /// Open a session over the given store: load the persisted model or
    /// fall back to a fresh default, validate it, and mirror the initial
    /// value back to the store.
    pub fn open(store: ModelStore) -> Result<Self, SessionError> {
        let model = store.load().unwrap_or_else(create_empty_model);
        let errors = validate_model(&model);
        store.save(&model)?;
        Ok(Self {
            store,
            model,
            errors,
        })
    }

    /// The live model.
    pub fn model(&self) -> &DoctorModel {
        &self.model
    }

    /// Validation errors for the live model, in display order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Sum of all shot durations, for the duration badge.
    pub fn total_duration_seconds(&self) -> f64 {
        total_duration_seconds(&self.model)
    }

    /// Apply one edit: replace the model, re-validate, write through.
    pub fn apply(&mut self, edit: ModelEdit) -> Result<(), SessionError> {
        self.model = apply_edit(self.model.clone(), edit);
        self.errors = validate_model(&self.model);
        self.store.save(&self.model)?;
        Ok(())
    }

    /// Replace the live model with an imported document.
    ///
    /// On a decode failure the live model and its error list are left
    /// untouched and the error is returned for the surface to display.
    pub fn import_json(&mut self, raw: &str) -> Result<(), SessionError> {
        let model = import_model(raw)?;
        tracing::info!(id = %model.id, "imported model replaces the live value");
        self.model = model;
        self.errors = validate_model(&self.model);
        self.store.save(&self.model)?;
        Ok(())
    }

    /// Render the live model as a downloadable file. Allowed even when the
    /// validator reports errors.
    pub fn export(&self) -> Result<ExportFile, SessionError> {
        Ok(export_model(&self.model)?)
    }

    /// Write the export file into `dir` and return its path.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, SessionError> {
        let file = self.export()?;
        fs::create_dir_all(dir)?;
        let path = dir.join(file.file_name);
        fs::write(&path, file.contents)?;
        Ok(path)
    }

    /// Discard the live model for a fresh default and clear persisted
    /// storage. The fresh value is not persisted until the next edit.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        tracing::info!("resetting editor to a fresh model");
        self.store.clear()?;
        self.model = create_empty_model();
        self.errors = validate_model(&self.model);
        Ok(())
    }
}
