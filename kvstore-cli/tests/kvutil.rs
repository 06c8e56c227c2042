//  KVUTIL.rs
//    by Lut99
//
//  Created:
//    19 Oct 2026, 16:02:18
//  Last edited:
//    19 Oct 2026, 16:20:44
//  Auto updated?
//    Yes
//
//  Description:
//!   Runs the `kvutil` binary end-to-end and checks what it prints and
//!   how it exits.
//

use std::io::Write as _;
use std::process::{Command, Output};


/***** HELPER FUNCTIONS *****/
/// Runs `kvutil` with the given arguments, isolated from the caller's environment variables.
fn kvutil(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kvutil"))
        .args(args)
        .env_remove("KVUTIL_CONFIG")
        .env_remove("KVUTIL_LOG")
        .env_remove("KVUTIL_DEBUG")
        .env_remove("KVUTIL_TRACE")
        .output()
        .unwrap()
}

/// Returns the trimmed stdout of a `kvutil` run.
#[inline]
fn stdout(output: &Output) -> String { String::from_utf8_lossy(&output.stdout).trim().to_string() }





/***** TESTS *****/
#[test]
fn test_kvutil_duration() {
    let output: Output = kvutil(&["duration", "-5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5");

    let output: Output = kvutil(&["duration", "10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10");
}

#[test]
fn test_kvutil_duration_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_timeout: 30").unwrap();
    let path: String = file.path().display().to_string();

    let output: Output = kvutil(&["duration", "0", "--config", &path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "30");

    // A missing file is reported, not defaulted
    let output: Output = kvutil(&["duration", "0", "--config", "/this/path/does/not/exist.yml"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_kvutil_address() {
    let output: Output = kvutil(&["address", "localhost", "8080"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "localhost:8080");
}

#[test]
fn test_kvutil_validate() {
    let output: Output = kvutil(&["validate", "127.0.0.1:2379"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK");

    let output: Output = kvutil(&["validate", "--async", "127.0.0.1:2379"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK");

    for address in ["a.b.0.1::::::", "127.0.0.1:5ax65", "127.0.0.1:65539"] {
        let output: Output = kvutil(&["validate", address]);
        assert_eq!(output.status.code(), Some(1), "'{address}' should be rejected");
        assert!(stdout(&output).is_empty());
    }
}
