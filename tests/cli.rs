mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn doctor_reports_ok_against_stub_tools() {
    let env = TestEnv::new();
    env.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(contains("overall: ok"))
        .stdout(contains("config_file\tok"));
}

#[test]
fn doctor_flags_missing_probe_tools() {
    let env = TestEnv::new();
    env.remove_stub("arping");
    env.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(contains("overall: needs_attention"))
        .stdout(contains("arping\tmissing"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let env = TestEnv::new();
    let mut cmd = assert_cmd::Command::cargo_bin("netsmoke").expect("netsmoke binary");
    cmd.env("HOME", &env.home)
        .args(["--config", "/nonexistent/netsmoke.toml", "check"])
        .assert()
        .failure()
        .stderr(contains("config file not found"));
}
