//! Test support for the apptrack workspace.
//!
//! - [`RecordingEngine`]: an in-memory tracking engine that records every
//!   tracker it creates, every event it receives, and every subject change,
//!   with failure injection for the error paths.
//! - Fixture loading for the JSON files under the workspace `test-fixtures/`
//!   directory.

pub mod recording;

pub use recording::{
    CreatedTracker, RecordingEngine, RecordingSubject, RecordingTracker, SubjectState,
};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Subdirectory of `test-fixtures/` holding bridge fixtures. Also used as the
/// marker that distinguishes the fixture directory from this crate's own.
const BRIDGE_FIXTURES: &str = "bridge";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures/bridge.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join(BRIDGE_FIXTURES).exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/{BRIDGE_FIXTURES} from CARGO_MANIFEST_DIR={manifest_dir}"
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file, relative to `test-fixtures/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
