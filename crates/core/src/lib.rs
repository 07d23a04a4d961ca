//! Core domain logic for the virtual doctor persona editor.
//!
//! This crate is pure: no filesystem, no logging, no async. It provides the
//! persona data model and its canonical default, the validator that maps a
//! model to human-readable error messages, the copy-on-write edit
//! operations, and the export/import codec. Persistence lives in
//! `docsona-store`; the editor surface in `docsona-session`.

pub mod edit;
pub mod error;
pub mod export;
pub mod model;
pub mod types;
pub mod validate;

pub use edit::{apply_edit, ModelEdit};
pub use error::CoreError;
pub use export::{export_model, import_model, ExportFile};
pub use model::{create_empty_model, DoctorModel};
pub use validate::validate_model;
