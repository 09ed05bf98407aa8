//! CLI end-to-end tests
//!
//! These run the `clext` binary against temporary files and standard input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the clext binary
fn clext_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_clext"))
}

/// A command isolated from any clext.toml in the user's environment
fn clext(dir: &TempDir) -> Command {
    let config = dir.path().join("clext.toml");
    std::fs::write(&config, "").expect("Failed to write empty config");

    let mut cmd = Command::new(clext_bin());
    cmd.current_dir(dir.path())
        .env("CLEXT_CONFIG", &config)
        .env_remove("RUST_LOG")
        .env_remove("CLEXT_VERBOSE");
    cmd
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(clext_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("scan")));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(clext_bin());
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("clext"));
}

#[test]
fn test_scan_file_text_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "main.c", "int x; // comment\nreturn x;");

    clext(&dir)
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout("Tokens:\nint\nx\n;\nreturn\nx\n;\n\nLexical analysis completed.\n");
}

#[test]
fn test_scan_reports_diagnostics_but_succeeds() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "bad.c", "x = 5 @ y;");

    clext(&dir)
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Lexical error: Unexpected character '5' at position 4\n\
             Lexical error: Unexpected character '@' at position 6\n\
             Tokens:\n",
        ));
}

#[test]
fn test_scan_deny_errors_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "bad.c", "a # b");

    clext(&dir)
        .args(["scan", "--deny-errors"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 lexical error(s) found"));
}

#[test]
fn test_scan_stdin() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    clext(&dir)
        .args(["scan", "-"])
        .write_stdin("/* c1 */int/*c2*/x;")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tokens:\nint\nx\n;\n"));
}

#[test]
fn test_scan_json_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "a.c", "int $");

    let output = clext(&dir)
        .args(["scan", "--format", "json"])
        .arg(&input)
        .output()
        .expect("Failed to run clext");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value[0]["tokens"][0]["lexeme"], "int");
    assert_eq!(value[0]["diagnostics"][0]["code"], "E1001");
    assert_eq!(value[0]["diagnostics"][0]["position"], 4);
}

#[test]
fn test_scan_directory_filters_extensions() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let src = dir.path().join("src");
    std::fs::create_dir(&src).expect("Failed to create src directory");
    std::fs::write(src.join("a.c"), "alpha").expect("write a.c");
    std::fs::write(src.join("b.c"), "beta").expect("write b.c");
    std::fs::write(src.join("readme.md"), "gamma").expect("write readme.md");

    clext(&dir)
        .arg("scan")
        .arg(&src)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("alpha")
                .and(predicate::str::contains("beta"))
                .and(predicate::str::contains("gamma").not())
                .and(predicate::str::contains("a.c <==")),
        );
}

#[test]
fn test_scan_with_context() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "ctx.c", "int x;\nx = @;");

    clext(&dir)
        .args(["scan", "--context"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("  2 | x = @;"));
}

#[test]
fn test_check_clean_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "ok.c", "int main() { return x; }");

    clext(&dir)
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout("1 file(s) scanned, 9 token(s) (3 keyword(s), 5 symbol(s)), 0 lexical error(s)\n");
}

#[test]
fn test_check_with_errors_fails() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "bad.c", "int\n #");

    clext(&dir)
        .arg("check")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "2:2: error[E1001]: Unexpected character '#' at position 5",
        ))
        .stderr(predicate::str::contains("error: 1 lexical error(s) found"));
}

#[test]
fn test_config_file_selects_json() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "a.c", "int x;");
    let config = dir.path().join("json.toml");
    std::fs::write(&config, "[scan]\nformat = \"json\"\n").expect("write config");

    clext(&dir)
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    clext(&dir)
        .args(["scan", "does-not-exist.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input path does not exist"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&dir, "a.c", "int x;");

    clext(&dir)
        .args(["--config", "missing.toml", "scan"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
