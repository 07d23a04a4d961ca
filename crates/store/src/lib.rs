//! Local persistence for the doctor persona editor.
//!
//! One model document lives under one well-known key in a directory-scoped
//! key-value store, mirroring every accepted editor change (write-through,
//! no batching). Loading is forgiving: corrupted or unmigratable state is
//! logged and treated as absent so the editor can fall back to a fresh
//! default. A version gate runs before any stored shape is trusted.

pub mod error;
pub mod migrate;
pub mod store;

pub use error::StoreError;
pub use store::{ModelStore, MODEL_KEY};
