//! Integration tests for the `linkdown` binary.
//!
//! Argument parsing, help output, configuration errors and exit codes run
//! without any network; the end-to-end cases point the binary at wiremock.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `linkdown` binary with env isolation.
///
/// Clears the `LINKDOWN_*` variables the binary reads and points config
/// directories at a nonexistent path so tests never see a real config.
fn linkdown_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("linkdown");
    cmd.env("HOME", "/tmp/linkdown-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/linkdown-cli-test-nonexistent")
        .env_remove("RUST_LOG");
    for var in [
        "LINKDOWN_CONFIG",
        "LINKDOWN_CANDID_URL",
        "LINKDOWN_CANDID_USER",
        "LINKDOWN_CANDID_PASSWORD",
        "LINKDOWN_TURBO_URL",
        "LINKDOWN_TURBO_USER",
        "LINKDOWN_TURBO_PASSWORD",
        "LINKDOWN_GROUP_NAME",
        "LINKDOWN_INSECURE",
        "LINKDOWN_TIMEOUT",
        "LINKDOWN_OUTPUT",
        "LINKDOWN_CANDID__URL",
        "LINKDOWN_CANDID__PASSWORD",
        "LINKDOWN_TURBO__URL",
        "LINKDOWN_TURBO__PASSWORD",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = linkdown_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    linkdown_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Turbonomic")
            .and(predicate::str::contains("sync"))
            .and(predicate::str::contains("interfaces"))
            .and(predicate::str::contains("--candid-url")),
    );
}

#[test]
fn test_sync_help_mentions_dry_run() {
    linkdown_cmd()
        .args(["sync", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    linkdown_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linkdown"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    linkdown_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    linkdown_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = linkdown_cmd().arg("foobar").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("foobar"), "Expected error naming 'foobar':\n{text}");
}

#[test]
fn test_invalid_output_format() {
    linkdown_cmd()
        .args(["sync", "--output", "yaml"])
        .assert()
        .code(2);
}

#[test]
fn test_sync_without_config_is_usage_error() {
    linkdown_cmd()
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("candid.url"));
}

#[test]
fn test_missing_password_is_auth_error() {
    linkdown_cmd()
        .args(["interfaces", "--candid-url", "https://candid.example"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("candid"));
}

#[test]
fn test_missing_explicit_config_file() {
    linkdown_cmd()
        .args(["sync", "--config", "/tmp/linkdown-cli-test-nonexistent/none.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_zero_concurrency_rejected() {
    linkdown_cmd()
        .args([
            "interfaces",
            "--candid-url",
            "https://candid.example",
            "--candid-password",
            "pw",
            "--concurrency",
            "0",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("concurrency"));
}

// ── Config subcommands ──────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    linkdown_cmd()
        .args(["config", "path", "--config", "/etc/linkdown/custom.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/etc/linkdown/custom.toml"));
}

#[test]
fn test_config_path_default_is_toml() {
    linkdown_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_redacts_passwords() {
    let file = config_file(
        r#"
        [candid]
        url = "https://candid.example"
        password = "hunter2"

        [group]
        name = "Leafs_Down"
        "#,
    );
    linkdown_cmd()
        .args(["config", "show", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("https://candid.example")
                .and(predicate::str::contains("Leafs_Down"))
                .and(predicate::str::contains("********"))
                .and(predicate::str::contains("hunter2").not()),
        );
}

#[test]
fn test_config_show_json() {
    let output = linkdown_cmd()
        .args(["config", "show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["group"]["name"], "PMs_CandidLinkDown");
    assert_eq!(parsed["turbo"]["username"], "administrator");
}

// ── End to end against wiremock ─────────────────────────────────────

fn list_xml(uuids: &[&str]) -> String {
    let data: String = uuids
        .iter()
        .map(|u| format!("<data><uuid>{u}</uuid></data>"))
        .collect();
    format!("<Response><ResponseBean><value>{data}</value></ResponseBean></Response>")
}

fn detail_xml(dn: &str) -> String {
    format!(
        "<Response><ResponseBean><value><data><interfaceSummary><dn>{dn}</dn>\
         </interfaceSummary></data></value></ResponseBean></Response>"
    )
}

async fn mount_get(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_candid(server: &MockServer) {
    mount_get(server, "/api/v1/assured-networks/aci-fabric", list_xml(&["F1"])).await;
    mount_get(
        server,
        "/api/v1/assured-networks/F1/smart-events",
        list_xml(&["E1", "E2"]),
    )
    .await;
    mount_get(
        server,
        "/api/v1/assured-networks/F1/smart-events/E1",
        detail_xml("topology/pod-1/node-101/sys/phys-[eth1/5]"),
    )
    .await;
    mount_get(
        server,
        "/api/v1/assured-networks/F1/smart-events/E2",
        detail_xml("topology/pod-1/node-102/sys/phys-[eth1/6]"),
    )
    .await;
}

async fn run(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || linkdown_cmd().args(args).output().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interfaces_plain_lists_dns() {
    let candid = MockServer::start().await;
    mount_candid(&candid).await;

    let output = run(vec![
        "interfaces".into(),
        "--candid-url".into(),
        candid.uri(),
        "--candid-password".into(),
        "pw".into(),
        "-o".into(),
        "plain".into(),
    ])
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "topology/pod-1/node-101/sys/phys-[eth1/5]\ntopology/pod-1/node-102/sys/phys-[eth1/6]\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_end_to_end_json() {
    let candid = MockServer::start().await;
    let turbo = MockServer::start().await;
    mount_candid(&candid).await;

    Mock::given(method("GET"))
        .and(path("/vmturbo/rest/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "uuid": "_grp1", "displayName": "PMs_CandidLinkDown" }
        ])))
        .mount(&turbo)
        .await;
    Mock::given(method("PUT"))
        .and(path("/vmturbo/rest/group/_grp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uuid": "_grp1" })))
        .expect(1)
        .mount(&turbo)
        .await;

    let output = run(vec![
        "sync".into(),
        "--candid-url".into(),
        candid.uri(),
        "--candid-password".into(),
        "pw".into(),
        "--turbo-url".into(),
        turbo.uri(),
        "--turbo-password".into(),
        "pw".into(),
        "-o".into(),
        "json".into(),
    ])
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["group_uuid"], "_grp1");
    assert_eq!(report["applied"], true);
    assert_eq!(
        report["update"]["criteriaList"][0]["expVal"],
        "leaf-101|leaf-102"
    );
    assert_eq!(report["walk"]["events"], 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_group_not_found_exit_code() {
    let candid = MockServer::start().await;
    let turbo = MockServer::start().await;
    mount_candid(&candid).await;

    Mock::given(method("GET"))
        .and(path("/vmturbo/rest/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&turbo)
        .await;

    let output = run(vec![
        "sync".into(),
        "--dry-run".into(),
        "--candid-url".into(),
        candid.uri(),
        "--candid-password".into(),
        "pw".into(),
        "--turbo-url".into(),
        turbo.uri(),
        "--turbo-password".into(),
        "pw".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("PMs_CandidLinkDown"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_candid_auth_failure_exit_code() {
    let candid = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&candid)
        .await;

    let output = run(vec![
        "interfaces".into(),
        "--candid-url".into(),
        candid.uri(),
        "--candid-password".into(),
        "wrong".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sync_refuses_to_clear_group_when_candid_events_fail() {
    let candid = MockServer::start().await;
    let turbo = MockServer::start().await;
    mount_get(&candid, "/api/v1/assured-networks/aci-fabric", list_xml(&["F1"])).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assured-networks/F1/smart-events"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&candid)
        .await;
    Mock::given(method("GET"))
        .and(path("/vmturbo/rest/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "uuid": "_grp1", "displayName": "PMs_CandidLinkDown" }
        ])))
        .mount(&turbo)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&turbo)
        .await;

    let output = run(vec![
        "sync".into(),
        "--candid-url".into(),
        candid.uri(),
        "--candid-password".into(),
        "pw".into(),
        "--turbo-url".into(),
        turbo.uri(),
        "--turbo-password".into(),
        "pw".into(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Refusing to update"));
}
