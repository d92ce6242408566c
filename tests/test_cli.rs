//! Integration tests for the `siteframe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn siteframe() -> Command {
    let mut cmd = Command::cargo_bin("siteframe").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_show_prints_json_for_pinned_year() {
    siteframe()
        .args(["show", "--year", "2031"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"baseUrl\": \"/\""))
        .stdout(predicate::str::contains(
            "Copyright © 2031 Leo's Note. Built with Docusaurus.",
        ))
        .stdout(predicate::str::contains("./plugins/tailwind-plugin.cjs"));
}

#[test]
fn test_show_twice_is_byte_identical() {
    let first = siteframe()
        .args(["show", "--format", "yaml", "--year", "2026"])
        .output()
        .unwrap();
    let second = siteframe()
        .args(["show", "--format", "yaml", "--year", "2026"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_check_builtin_site() {
    siteframe()
        .arg("check")
        .assert()
        .success()
        .stdout("ok: Leo's Note (1 presets, 1 plugins)\n");
}

#[test]
fn test_env_override_changes_one_policy() {
    siteframe()
        .env("SITEFRAME_ON_BROKEN_MARKDOWN_LINKS", "ignore")
        .args(["show", "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"onBrokenLinks\": \"throw\""))
        .stdout(predicate::str::contains(
            "\"onBrokenMarkdownLinks\": \"ignore\"",
        ));
}

#[test]
fn test_check_reports_offending_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("site.json");
    fs::write(
        &path,
        r#"{
            "title": "Notes",
            "favicon": "img/favicon.ico",
            "url": "https://notes.example.com",
            "organizationName": "someone",
            "projectName": "notes",
            "i18n": {"defaultLocale": "fr", "locales": ["en"]}
        }"#,
    )
    .unwrap();

    siteframe()
        .arg("check")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("i18n.defaultLocale"));
}

#[test]
fn test_unknown_format_is_rejected_by_parser() {
    siteframe()
        .args(["show", "--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn test_env_without_separator_is_ignored() {
    siteframe()
        .env("SITEFRAMETITLE", "Hijacked")
        .env("SITEFRAME__TITLE", "Hijacked")
        .args(["show", "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Leo's Note\""))
        .stdout(predicate::str::contains("Hijacked").not());
}

#[cfg(unix)]
#[test]
fn test_unrelated_non_utf8_variable_does_not_panic() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    siteframe()
        .env("BAD", OsString::from_vec(vec![0xff]))
        .arg("check")
        .assert()
        .success()
        .stdout("ok: Leo's Note (1 presets, 1 plugins)\n");
}

#[test]
fn test_footer_link_with_two_targets_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("site.json");
    fs::write(
        &path,
        r#"{
            "title": "Notes",
            "favicon": "img/favicon.ico",
            "url": "https://notes.example.com",
            "organizationName": "someone",
            "projectName": "notes",
            "themeConfig": {"footer": {"links": [{"title": "More", "items": [
                {"label": "Blog", "to": "/blog", "href": "https://x.dev"}
            ]}]}}
        }"#,
    )
    .unwrap();

    siteframe()
        .arg("check")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("both `to` and `href`"));
}
