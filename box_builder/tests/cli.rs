//! End-to-end checks for the `make-box-builder` binary.

use assert_cmd::Command;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn make_box_builder() -> Command {
    #[expect(
        deprecated,
        clippy::expect_used,
        reason = "cargo_bin is the standard assert_cmd API and test panics are acceptable"
    )]
    let mut cmd = Command::cargo_bin("make-box-builder").expect("binary should exist");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("BOX_BUILDER_") {
            cmd.env_remove(key);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("RUST_BACKTRACE", "0");
    cmd
}

#[fixture]
fn scratch() -> TempDir {
    tempfile::tempdir().unwrap_or_else(|err| panic!("create temp dir: {err}"))
}

fn utf8(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("non-UTF-8 temp path: {}", path.display()))
}

#[rstest]
fn default_run_prints_nineteen_overloads() {
    let output = make_box_builder()
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("/// Autogenerated by make-box-builder.\nextension BoxBuilder {\n"));
    assert_eq!(stdout.matches("public static func buildBlock<View>(").count(), 19);
    assert!(stdout.contains("    // buildBlock for 19 child view(s).\n"));
    assert!(!stdout.contains("for 20 child"));
    assert!(stdout.ends_with("    }\n}\n"));
}

#[rstest]
#[case("0")]
#[case("1")]
fn bound_below_two_fails_without_output(#[case] bound: &str) {
    let output = make_box_builder()
        .args(["--arity-bound", bound])
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout should stay empty");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("arity bound must be at least 2"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[rstest]
fn environment_sets_the_bound() {
    let output = make_box_builder()
        .env("BOX_BUILDER_ARITY_BOUND", "4")
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("public static func").count(), 3);
}

#[rstest]
fn output_flag_writes_the_file_instead_of_stdout(scratch: TempDir) {
    let target = utf8(&scratch).join("Sources/Loftwing/BoxBuilder+Blocks.swift");
    let output = make_box_builder()
        .args(["--arity-bound", "3", "--output", target.as_str()])
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&target)
        .unwrap_or_else(|err| panic!("read {target}: {err}"));
    assert_eq!(written.matches("public static func").count(), 2);
    assert!(written.ends_with("}\n"));
}

#[rstest]
fn config_file_is_honoured(scratch: TempDir) {
    let config = utf8(&scratch).join("box_builder.toml");
    std::fs::write(&config, "arity_bound = 5\nextension_type = \"StackBuilder\"\n")
        .unwrap_or_else(|err| panic!("write {config}: {err}"));
    let output = make_box_builder()
        .args(["--config", config.as_str()])
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extension StackBuilder {\n"));
    assert_eq!(stdout.matches("public static func").count(), 4);
}

#[rstest]
fn invalid_identifier_is_rejected() {
    let output = make_box_builder()
        .args(["--function-name", "build block"])
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[rstest]
#[case("--function-name", "return")]
#[case("--extension-type", "extension")]
#[case("--type-parameter", "Self")]
fn reserved_words_are_rejected(#[case] flag: &str, #[case] word: &str) {
    let output = make_box_builder()
        .args([flag, word])
        .output()
        .unwrap_or_else(|err| panic!("run make-box-builder: {err}"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "stdout should stay empty");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("must be a Swift identifier"),
        "stderr: {stderr}"
    );
}
