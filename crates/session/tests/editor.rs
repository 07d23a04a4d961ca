//! Integration tests for the editing session: the load/edit/validate/save
//! cycle, import/export, and reset.

use docsona_core::edit::ModelEdit;
use docsona_core::model::create_empty_model;
use docsona_session::EditorSession;
use docsona_store::ModelStore;

fn open_session() -> (tempfile::TempDir, EditorSession) {
    let dir = tempfile::tempdir().expect("scratch dir");
    let session = EditorSession::open(ModelStore::new(dir.path())).expect("open session");
    (dir, session)
}

#[test]
fn open_on_an_empty_store_yields_a_valid_default() {
    let (_dir, session) = open_session();
    assert!(session.is_valid());
    assert_eq!(session.model().shots.len(), 3);
    assert_eq!(session.total_duration_seconds(), 34.0);
}

#[test]
fn open_mirrors_the_initial_model_to_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let session = EditorSession::open(ModelStore::new(dir.path())).unwrap();
    let reread = ModelStore::new(dir.path()).load().expect("persisted");
    assert_eq!(&reread, session.model());
}

#[test]
fn open_resumes_the_persisted_model() {
    let dir = tempfile::tempdir().unwrap();
    let mut first = EditorSession::open(ModelStore::new(dir.path())).unwrap();
    first.apply(ModelEdit::SetName("Dr. Sam Lee".into())).unwrap();
    let expected = first.model().clone();
    drop(first);

    let second = EditorSession::open(ModelStore::new(dir.path())).unwrap();
    assert_eq!(second.model(), &expected);
}

#[test]
fn every_edit_revalidates_and_writes_through() {
    let (dir, mut session) = open_session();

    session.apply(ModelEdit::SetName(String::new())).unwrap();
    assert_eq!(session.errors(), ["Name is required"]);

    // The persisted document is the same value the validator saw.
    let persisted = ModelStore::new(dir.path()).load().unwrap();
    assert_eq!(&persisted, session.model());

    session.apply(ModelEdit::SetName("Dr. Sam Lee".into())).unwrap();
    assert!(session.is_valid());
}

#[test]
fn validation_errors_do_not_block_further_edits_or_export() {
    let (_dir, mut session) = open_session();
    session.apply(ModelEdit::SetVoiceSpeedWpm(500.0)).unwrap();
    assert_eq!(session.errors(), ["Voice speed must be 90–240 WPM"]);

    session.apply(ModelEdit::SetBio("Still editing.".into())).unwrap();
    let file = session.export().unwrap();
    assert!(file.contents.contains("Still editing."));
}

#[test]
fn import_replaces_the_model_wholesale() {
    let (_dir, mut session) = open_session();
    let mut other = create_empty_model();
    other.name = "Dr. Imported".into();
    let raw = serde_json::to_string(&other).unwrap();

    session.import_json(&raw).unwrap();
    assert_eq!(session.model().name, "Dr. Imported");
    assert_eq!(session.model().id, other.id);
    // Import stamps a fresh updatedAt.
    assert!(session.model().updated_at >= other.updated_at);
}

#[test]
fn failed_import_leaves_the_session_untouched() {
    let (_dir, mut session) = open_session();
    session.apply(ModelEdit::SetName(String::new())).unwrap();
    let before_model = session.model().clone();
    let before_errors = session.errors().to_vec();

    assert!(session.import_json("{ broken").is_err());
    assert_eq!(session.model(), &before_model);
    assert_eq!(session.errors(), before_errors);

    // Structurally invalid documents are rejected the same way.
    assert!(session.import_json(r#"{ "name": "just a name" }"#).is_err());
    assert_eq!(session.model(), &before_model);
}

#[test]
fn export_to_dir_writes_the_named_file() {
    let (_dir, mut session) = open_session();
    session.apply(ModelEdit::SetName("Dr. Alex Morgan".into())).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = session.export_to_dir(out.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "Dr._Alex_Morgan_doctor_model.json"
    );

    let raw = std::fs::read_to_string(path).unwrap();
    session.import_json(&raw).unwrap();
    assert_eq!(session.model().name, "Dr. Alex Morgan");
}

#[test]
fn reset_clears_storage_and_installs_a_fresh_default() {
    let (dir, mut session) = open_session();
    session.apply(ModelEdit::SetName("Dr. Sam Lee".into())).unwrap();
    let old_id = session.model().id.clone();

    session.reset().unwrap();
    assert!(session.is_valid());
    assert_eq!(session.model().name, "Dr. Alex Morgan");
    assert_ne!(session.model().id, old_id);

    // Storage stays empty until the next edit writes through.
    assert_eq!(ModelStore::new(dir.path()).load(), None);
    session.apply(ModelEdit::AddShot).unwrap();
    assert!(ModelStore::new(dir.path()).load().is_some());
}
