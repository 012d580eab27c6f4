// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use runtests::core::platform::Platform;

/// Creates an empty test subdirectory `root/name` without any executable.
pub fn create_test_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create test subdirectory");
    dir
}

/// Writes a `/bin/sh` script at the location the runner expects the test
/// executable for `name`, and marks it executable. Returns the script path.
#[cfg(unix)]
pub fn write_test_executable(root: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let dir = create_test_dir(root, name);
    let path = dir.join(Platform::current().executable_relative_path(name));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create executable directory");
    }
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write test script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make test script executable");
    path
}

/// A test executable that exits with `code`.
#[cfg(unix)]
pub fn write_exiting_test(root: &Path, name: &str, code: i32) -> PathBuf {
    write_test_executable(root, name, &format!("echo \"{name} running\"\nexit {code}"))
}

/// A test executable that records each argument it receives, one per line,
/// in `args.txt` next to itself.
#[cfg(unix)]
pub fn write_arg_recording_test(root: &Path, name: &str) -> PathBuf {
    write_test_executable(
        root,
        name,
        r#"for arg in "$@"; do printf '%s\n' "$arg"; done > "$(dirname "$0")/args.txt""#,
    )
}

/// Reads back the arguments recorded by `write_arg_recording_test`.
pub fn recorded_args(executable: &Path) -> Vec<String> {
    let args_file = executable
        .parent()
        .expect("executable has a parent directory")
        .join("args.txt");
    fs::read_to_string(args_file)
        .expect("Failed to read recorded arguments")
        .lines()
        .map(str::to_string)
        .collect()
}
