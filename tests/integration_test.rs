//! Integration tests for the noun-sieve binary.
//!
//! All runs use the lexicon backend with `tests/fixtures/lexicon.tsv`, so no
//! external analyzer is required.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

const LEXICON: &str = "tests/fixtures/lexicon.tsv";
const STOPWORDS: &str = "tests/fixtures/stopwords.txt";

/// Helper to build a command on the lexicon backend.
fn sieve() -> Command {
    let mut cmd = Command::cargo_bin("noun-sieve").expect("binary should build");
    cmd.env_remove("NOUN_SIEVE_STOPWORDS")
        .env_remove("RUST_LOG")
        .args(["--analyzer", "lexicon", "--lexicon", LEXICON]);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to run noun-sieve");
    assert!(output.status.success(), "exit status: {}", output.status);
    String::from_utf8(output.stdout).expect("stdout should be UTF-8")
}

#[test]
fn test_filter_school_sentence() {
    sieve()
        .write_stdin("나는 학교에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"학교\"]}\n");
}

#[test]
fn test_filter_keeps_foreign_and_nouns_in_order() {
    sieve()
        .write_stdin("AI 기술이 발전한다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"AI\", \"기술\", \"발전\"]}\n");
}

#[test]
fn test_empty_line_yields_empty_data() {
    sieve()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("{\"data\": []}\n");
}

#[test]
fn test_one_output_line_per_input_line() {
    let stdout = stdout_of(
        sieve().write_stdin("나는 학교에 간다\n그리고 갔다\n\nAI 기술이 발전한다"),
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "{\"data\": [\"학교\"]}",
            "{\"data\": []}",
            "{\"data\": []}",
            "{\"data\": [\"AI\", \"기술\", \"발전\"]}",
        ]
    );
}

#[test]
fn test_explicit_filter_subcommand() {
    sieve()
        .arg("filter")
        .write_stdin("나는 학교에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"학교\"]}\n");
}

#[test]
fn test_no_input_no_output() {
    sieve().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_compact_output() {
    sieve()
        .arg("--compact")
        .write_stdin("AI 기술이 발전한다\n")
        .assert()
        .success()
        .stdout("{\"data\":[\"AI\",\"기술\",\"발전\"]}\n");
}

#[test]
fn test_ensure_ascii_output() {
    sieve()
        .arg("--ensure-ascii")
        .write_stdin("나는 학교에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"\\ud559\\uad50\"]}\n");
}

#[test]
fn test_output_is_valid_json() {
    let stdout = stdout_of(sieve().write_stdin("AI 기술이 발전한다\n나는 학교에 간다\n"));
    for line in stdout.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("line should be JSON");
        assert!(value["data"].is_array());
    }
}

#[test]
fn test_stopword_file() {
    sieve()
        .args(["--stopwords", STOPWORDS])
        .write_stdin("AI 기술이 발전한다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"AI\"]}\n");
}

#[test]
fn test_extra_prefix_tag() {
    sieve()
        .args(["--prefix-tag", "NNP"])
        .write_stdin("서울에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"서울\"]}\n");
}

#[test]
fn test_default_policy_drops_proper_nouns() {
    sieve()
        .write_stdin("서울에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": []}\n");
}

#[test]
fn test_empty_tag_policy_fails() {
    sieve()
        .arg("--no-default-tags")
        .write_stdin("학교\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("--no-default-tags"));
}

#[test]
fn test_invalid_utf8_fails_after_prior_lines() {
    let mut input = "나는 학교에 간다\n".as_bytes().to_vec();
    input.extend_from_slice(b"\xFF\xFE\n");
    sieve()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout("{\"data\": [\"학교\"]}\n")
        .stderr(predicate::str::contains("invalid UTF-8"));
}

#[test]
fn test_unknown_analyzer_fails() {
    Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .args(["--analyzer", "kkma"])
        .write_stdin("학교\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown analyzer backend: kkma"));
}

#[test]
fn test_lexicon_backend_requires_file() {
    Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .env_remove("NOUN_SIEVE_LEXICON")
        .args(["--analyzer", "lexicon"])
        .write_stdin("학교\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--lexicon"));
}

#[test]
fn test_missing_analyzer_program_fails() {
    Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .args([
            "--analyzer",
            "mecab",
            "--mecab-program",
            "/nonexistent/noun-sieve-analyzer",
        ])
        .write_stdin("학교\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to spawn analyzer"));
}

#[test]
fn test_env_selects_backend() {
    Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .env("NOUN_SIEVE_ANALYZER", "lexicon")
        .env("NOUN_SIEVE_LEXICON", LEXICON)
        .write_stdin("나는 학교에 간다\n")
        .assert()
        .success()
        .stdout("{\"data\": [\"학교\"]}\n");
}

#[test]
fn test_tokenize_command() {
    sieve()
        .args(["tokenize", "AI 기술이"])
        .assert()
        .success()
        .stdout(predicate::str::contains("기술"))
        .stdout(predicate::str::contains("JKS"));
}

#[test]
fn test_tokenize_command_json() {
    let stdout = stdout_of(sieve().args(["tokenize", "AI 기술이", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let kept: Vec<&str> = value
        .as_array()
        .expect("array of tokens")
        .iter()
        .filter(|t| t["kept"] == true)
        .filter_map(|t| t["form"].as_str())
        .collect();
    assert_eq!(kept, vec!["AI", "기술"]);
}

#[test]
fn test_stopwords_command() {
    sieve()
        .args(["stopwords", "--no-default-stopwords", "--stopwords", STOPWORDS])
        .assert()
        .success()
        .stdout("기술/NNG\n발전\n");
}

#[test]
fn test_json_error_for_inspection_command() {
    let output = Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .args([
            "--analyzer",
            "lexicon",
            "--lexicon",
            "tests/fixtures/missing.tsv",
            "--format",
            "json",
            "tokenize",
            "학교",
        ])
        .output()
        .expect("failed to run noun-sieve");
    assert!(!output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("error should be JSON on stdout");
    assert_eq!(value["success"], false);
}

#[test]
fn test_version() {
    Command::cargo_bin("noun-sieve")
        .expect("binary should build")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
