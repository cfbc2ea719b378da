//! Integration test support: fixture locations and workspace re-exports so
//! tests can use `tablebook_test::` paths.

use std::path::PathBuf;

pub use tablebook_app as app;
pub use tablebook_core as core_types;
pub use tablebook_hours as hours;
pub use tablebook_service as service;

/// Absolute path of a file under this crate's `fixtures/` directory.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}
