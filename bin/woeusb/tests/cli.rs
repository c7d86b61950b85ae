//! ---
//! woeusb_section: "03-cli"
//! woeusb_subsection: "integration-tests"
//! woeusb_type: "source"
//! woeusb_scope: "code"
//! woeusb_description: "End-to-end checks for the woeusb binary."
//! woeusb_version: "v0.2.12"
//! woeusb_owner: "tbd"
//! ---
use assert_cmd::Command;

/// The binary with no config override and no log filter from the caller.
fn woeusb_clean_env() -> Command {
    let mut cmd = Command::cargo_bin("woeusb").unwrap();
    cmd.env_remove("WOEUSB_CONFIG")
        .env_remove("WOEUSB_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn woeusb() -> Command {
    let mut cmd = woeusb_clean_env();
    cmd.env("WOEUSB_LOG", "off");
    cmd
}

fn run_check(cmd: &mut Command) -> (String, String) {
    let output = cmd.args(["check", "3.0"]).output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn version_flag_prints_extended_banner() {
    let out = stdout_of(woeusb().arg("--version"));
    assert!(out.starts_with(&format!("WoeUSB v{}", env!("CARGO_PKG_VERSION"))));
    assert!(out.contains("Target: "));
    assert!(!out.contains("VERGEN_IDEMPOTENT_OUTPUT"));
}

#[test]
fn short_version_is_the_bare_string() {
    let out = stdout_of(woeusb().args(["version", "--short"]));
    assert_eq!(out.trim_end(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn json_version_carries_build_metadata() {
    let out = stdout_of(woeusb().args(["version", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert!(value["git_sha"].is_string());
}

#[test]
fn check_accepts_embedded_and_valid_versions() {
    let out = stdout_of(woeusb().arg("check"));
    assert_eq!(out.trim_end(), format!("ok: {}", env!("CARGO_PKG_VERSION")));
    let out = stdout_of(woeusb().args(["check", "3.0"]));
    assert_eq!(out.trim_end(), "ok: 3.0");
}

#[test]
fn check_rejects_prefixed_version() {
    let output = woeusb().args(["check", "v1.2"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("major segment 'v1'"), "stderr: {stderr}");
}

#[test]
fn check_rejects_empty_version() {
    let output = woeusb().args(["check", ""]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("version string is empty"), "stderr: {stderr}");
}

#[test]
fn explicit_config_with_bad_syntax_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("woeusb.toml");
    std::fs::write(&path, "[logging\n").unwrap();
    let output = woeusb()
        .args(["--config", path.to_str().unwrap(), "version"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to parse config file"), "stderr: {stderr}");
}

#[test]
fn bare_invocation_prints_version_and_commit() {
    let out = stdout_of(&mut woeusb());
    assert!(out.starts_with(&format!("{} (", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn config_env_override_with_bad_syntax_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[logging\n").unwrap();
    let output = woeusb()
        .env("WOEUSB_CONFIG", &path)
        .args(["version", "--short"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to parse config file"), "stderr: {stderr}");
}

#[test]
fn config_env_override_enables_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    let path = dir.path().join("woeusb.toml");
    std::fs::write(
        &path,
        format!("[logging]\ndirectory = {:?}\n", logs.to_str().unwrap()),
    )
    .unwrap();
    let (stdout, _) = run_check(woeusb_clean_env().env("WOEUSB_CONFIG", &path));
    assert_eq!(stdout.trim_end(), "ok: 3.0");
    let files: Vec<String> = std::fs::read_dir(&logs)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        files.iter().any(|name| name.starts_with("woeusb-woeusb.log")),
        "log files: {files:?}"
    );
}

#[test]
fn woeusb_log_enables_events_on_stderr_only() {
    let (stdout, stderr) = run_check(woeusb_clean_env().env("WOEUSB_LOG", "info"));
    assert_eq!(stdout.trim_end(), "ok: 3.0");
    assert!(stderr.contains("version accepted"), "stderr: {stderr}");
}

#[test]
fn woeusb_log_takes_precedence_over_rust_log() {
    let (_, stderr) = run_check(
        woeusb_clean_env()
            .env("WOEUSB_LOG", "off")
            .env("RUST_LOG", "info"),
    );
    assert!(!stderr.contains("version accepted"), "stderr: {stderr}");
}

#[test]
fn rust_log_applies_when_woeusb_log_is_unset() {
    let (_, stderr) = run_check(woeusb_clean_env().env("RUST_LOG", "off"));
    assert!(!stderr.contains("version accepted"), "stderr: {stderr}");
}

#[test]
fn info_is_the_default_filter() {
    let (_, stderr) = run_check(&mut woeusb_clean_env());
    assert!(stderr.contains("version accepted"), "stderr: {stderr}");
    assert!(!stderr.contains("configuration resolved"), "stderr: {stderr}");
}

#[test]
fn invalid_woeusb_log_falls_back_with_warning() {
    let (stdout, stderr) = run_check(woeusb_clean_env().env("WOEUSB_LOG", "woeusb=loudest"));
    assert_eq!(stdout.trim_end(), "ok: 3.0");
    assert!(
        stderr.contains("invalid WOEUSB_LOG directive"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("version accepted"), "stderr: {stderr}");
}
