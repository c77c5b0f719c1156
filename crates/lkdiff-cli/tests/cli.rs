use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("lkdiff").unwrap();
    cmd.env_remove("LKDIFF_FIRST").env_remove("LKDIFF_SECOND");
    cmd
}

/// A temp dir holding locale files, used as the working directory so report
/// headers show the short relative names.
fn locales(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    for (name, body) in files {
        fs::write(tmp.path().join(name), body).expect("write locale file");
    }
    tmp
}

#[test]
fn reports_keys_missing_on_each_side() {
    let tmp = locales(&[
        ("en.json", r#"{"greeting": "hi", "nested": {"x": 1}}"#),
        ("ar.json", r#"{"greeting": "مرحبا", "nested": {"y": 2}}"#),
    ]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "ar.json"])
        .assert()
        .success()
        .stdout("Keys only in en.json:\n  - nested.x\n\nKeys only in ar.json:\n  - nested.y\n");
}

#[test]
fn mapping_versus_scalar_reports_both_paths() {
    let tmp = locales(&[
        ("a.json", r#"{"a": {"b": {"c": 1}}}"#),
        ("b.json", r#"{"a": {"b": 1}}"#),
    ]);

    cmd()
        .current_dir(tmp.path())
        .args(["a.json", "b.json"])
        .assert()
        .success()
        .stdout("Keys only in a.json:\n  - a.b.c\n\nKeys only in b.json:\n  - a.b\n");
}

#[test]
fn identical_files_print_only_headers() {
    let tmp = locales(&[(
        "en.json",
        r#"{"auth": {"login": "Log in", "logout": "Log out"}, "tags": ["a", "b"]}"#,
    )]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "en.json"])
        .assert()
        .success()
        .stdout("Keys only in en.json:\n\nKeys only in en.json:\n");
}

#[test]
fn keys_are_sorted_within_sections() {
    let tmp = locales(&[
        ("en.json", r#"{"zeta": 1, "alpha": {"b": 1, "a": 1}, "Mid": 1}"#),
        ("ar.json", "{}"),
    ]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "ar.json"])
        .assert()
        .success()
        .stdout(
            "Keys only in en.json:\n  - Mid\n  - alpha.a\n  - alpha.b\n  - zeta\n\nKeys only in ar.json:\n",
        );
}

#[test]
fn paths_fall_back_to_environment() {
    let tmp = locales(&[("en.json", r#"{"a": 1}"#), ("ar.json", r#"{"b": 1}"#)]);

    cmd()
        .current_dir(tmp.path())
        .env("LKDIFF_FIRST", "en.json")
        .env("LKDIFF_SECOND", "ar.json")
        .assert()
        .success()
        .stdout("Keys only in en.json:\n  - a\n\nKeys only in ar.json:\n  - b\n");
}

#[test]
fn missing_file_fails_without_report() {
    let tmp = locales(&[("en.json", r#"{"a": 1}"#)]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "missing.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("failed to load second locale file missing.json"));
}

#[test]
fn malformed_json_fails() {
    let tmp = locales(&[("en.json", r#"{"a": "#), ("ar.json", "{}")]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "ar.json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("is not valid JSON"));
}

#[test]
fn invalid_utf8_fails() {
    let tmp = locales(&[("ar.json", "{}")]);
    fs::write(tmp.path().join("en.json"), [b'{', b'"', 0xc3, 0x28, b'"', b':', b'1', b'}'])
        .expect("write invalid utf-8");

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "ar.json"])
        .assert()
        .failure()
        .stderr(contains("is not valid UTF-8"));
}

#[test]
fn array_root_fails() {
    let tmp = locales(&[("en.json", "[]"), ("ar.json", "{}")]);

    cmd()
        .current_dir(tmp.path())
        .args(["en.json", "ar.json"])
        .assert()
        .failure()
        .stderr(contains("expected a JSON object at the root, found array"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let tmp = locales(&[("en.json", r#"{"a": 1}"#), ("ar.json", r#"{"a": 2}"#)]);

    cmd()
        .current_dir(tmp.path())
        .args(["--verbose", "en.json", "ar.json"])
        .assert()
        .success()
        .stdout("Keys only in en.json:\n\nKeys only in ar.json:\n")
        .stderr(contains("comparison finished"));
}

#[test]
fn missing_arguments_is_usage_error() {
    cmd().arg("en.json").assert().failure().stderr(contains("Usage"));
}
