// Fake k6 executables for tests.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A k6 stand-in that logs its arguments to `calls.log` next to itself and
/// fails for any script path containing `invalid` or `fail`.
pub const FAKE_K6: &str = r#"#!/bin/sh
echo "$@" >> "$(dirname "$0")/calls.log"
for last; do :; done
case "$last" in
  *invalid*|*fail*) exit 1 ;;
  *slow*) sleep 1 ;;
  *hang*) exec sleep 30 ;;
esac
exit 0
"#;

/// Write an executable script named `k6` into `dir`.
pub fn write_fake_k6(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("k6");
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lines recorded by [`FAKE_K6`], sorted since calls may run concurrently.
pub fn recorded_calls(dir: &Path) -> Vec<String> {
    let mut calls: Vec<String> = std::fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect();
    calls.sort();
    calls
}
