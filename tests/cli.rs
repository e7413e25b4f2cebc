//! Integration tests for the `md2tts` binary.
//!
//! Drives the compiled binary through `std::process::Command`; no network,
//! no fixtures beyond temp files.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_md2tts"))
}

/// Run the binary with `args`, piping `stdin` in. `RUST_LOG` is cleared so a
/// developer's environment cannot leak logs into the assertions.
fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn md2tts");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait for md2tts")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("stdout is UTF-8")
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_with_trailing_newline() {
    let out = run(&[], "# Title\n\n- a\n- b\n");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "Title. a. b.\n");
}

#[test]
fn dash_means_stdin() {
    let out = run(&["-"], "**bold** move");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "bold move\n");
}

#[test]
fn empty_stdin_prints_blank_line() {
    let out = run(&[], "");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "\n");
}

#[test]
fn no_entities_flag() {
    let out = run(&["--no-entities", "--symbols", "denylist"], "A &amp;amp; B");
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "A &amp; B\n");
}

#[test]
fn json_output_has_stats() {
    let out = run(&["--json"], "Go to https://example.com now");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout_of(&out)).expect("valid JSON");
    assert_eq!(v["text"], "Go to now");
    assert_eq!(v["stats"]["urls_removed"], 1);
}

#[test]
fn file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "## Hello\n\n`code` world\n").unwrap();

    let out = run(
        &[
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--quiet",
        ],
        "",
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty(), "quiet mode wrote: {:?}", out.stderr);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Hello. world\n");
}

#[test]
fn stdin_to_nested_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("new/dir/a.txt");

    let out = run(&["-o", output.to_str().unwrap(), "-q"], "# Hi\n\nthere\n");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Hi. there\n");
    assert!(!output.with_extension("txt.tmp").exists());
}

#[test]
fn json_to_nested_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.md");
    let output = dir.path().join("reports/out.json");
    std::fs::write(&input, "- one\n").unwrap();

    let out = run(
        &[input.to_str().unwrap(), "--json", "-o", output.to_str().unwrap(), "-q"],
        "",
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).expect("valid JSON");
    assert_eq!(v["text"], "one.");
}

#[test]
fn missing_file_fails() {
    let out = run(&["/no/such/file.md"], "");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn unknown_symbol_policy_rejected() {
    let out = run(&["--symbols", "emoji"], "");
    assert!(!out.status.success());
}
