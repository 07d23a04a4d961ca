//! The editor surface: one owned live model, validated and persisted on
//! every change.
//!
//! [`EditorSession`] is the Rust shape of the single-page editor's state:
//! it owns the one live [`docsona_core::DoctorModel`], re-runs the
//! validator on every accepted change, and mirrors every change to the
//! store (write-through, no batching). Export and import only happen on
//! explicit calls. [`preview`] renders the read-only summary pane.

pub mod preview;
mod session;

pub use session::{EditorSession, SessionError};
