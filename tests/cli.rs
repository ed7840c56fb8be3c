// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runs the `mountwood` binary against the shipped manifests and checks the
//! exit code and which stream carries what.

use std::process::{Command, Output};

fn run_mountwood(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mountwood"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_exit_codes_by_manifest() {
    struct TestCase {
        name: &'static str,
        args: Vec<&'static str>,
        expected_code: i32,
    }

    let test_cases = vec![
        TestCase {
            name: "default manifest mounts both trees",
            args: vec![],
            expected_code: 0,
        },
        TestCase {
            name: "explicit yaml manifest",
            args: vec!["configs/index.yaml"],
            expected_code: 0,
        },
        TestCase {
            name: "toml manifest",
            args: vec!["configs/index.toml"],
            expected_code: 0,
        },
        TestCase {
            name: "missing anchor is a partial mount",
            args: vec!["configs/missing-anchor.yaml"],
            expected_code: 2,
        },
        TestCase {
            name: "duplicate target fails validation",
            args: vec!["configs/duplicate-target.yaml"],
            expected_code: 1,
        },
        TestCase {
            name: "unsupported extension",
            args: vec!["configs/index.ini"],
            expected_code: 1,
        },
        TestCase {
            name: "missing file",
            args: vec!["configs/does-not-exist.yaml"],
            expected_code: 1,
        },
        TestCase {
            name: "too many arguments",
            args: vec!["configs/index.yaml", "extra"],
            expected_code: 1,
        },
    ];

    for case in test_cases {
        let output = run_mountwood(&case.args);
        assert_eq!(
            output.status.code(),
            Some(case.expected_code),
            "case: {} (stderr: {})",
            case.name,
            stderr(&output)
        );
    }
}

#[test]
fn test_full_mount_prints_both_trees() {
    let output = run_mountwood(&["configs/index.yaml"]);

    let page = stdout(&output);
    assert!(page.contains("<div id=\"app\"><main"));
    assert!(page.contains("<div id=\"app-navbar\"><nav"));
}

#[test]
fn test_partial_mount_still_prints_page_and_logs_to_stderr() {
    let output = run_mountwood(&["configs/missing-anchor.yaml"]);
    assert_eq!(output.status.code(), Some(2));

    let page = stdout(&output);
    assert!(page.contains("<div id=\"app\"><main"));
    assert!(!page.contains("not found"));

    assert!(stderr(&output).contains("not found"));
}

#[test]
fn test_config_error_prints_nothing_to_stdout() {
    let output = run_mountwood(&["configs/duplicate-target.yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("configs/duplicate-target.yaml"));
}
