use std::fs;
use std::path::{Path, PathBuf};

/// Copy fixtures from the library's test suite into `dir`.
pub fn copy_fixtures(dir: &Path, names: &[&str]) {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("autorpt-babel")
        .join("tests")
        .join("fixtures");
    for name in names {
        fs::copy(source.join(name), dir.join(name)).unwrap();
    }
}
