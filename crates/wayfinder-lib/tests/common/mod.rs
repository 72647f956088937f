//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use wayfinder_lib::Facility;

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The campus fixture loaded from disk.
#[allow(dead_code)]
pub fn campus() -> Facility {
    Facility::from_path(&fixtures_dir().join("campus.json")).expect("campus fixture loads")
}

/// Two wings with no connection between them; one place lacks a floor.
#[allow(dead_code)]
pub fn split_wings() -> Facility {
    Facility::from_path(&fixtures_dir().join("split_wings.json")).expect("split fixture loads")
}
