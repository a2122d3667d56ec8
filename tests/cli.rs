use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn headless_run_prints_final_state() {
    let mut cmd = Command::cargo_bin("shaderplane").expect("binary exists");
    cmd.arg("--headless").arg("--frames").arg("10");
    cmd.assert()
        .success()
        .stdout(contains("Ran 10 frame(s) headless"))
        .stdout(contains(" - time=0.50"))
        .stdout(contains(" - mesh=(0.00, 0.00)"))
        .stdout(contains(" - camera=(0.00, 0.00, 1.50)"));
}

#[test]
fn headless_defaults_to_sixty_frames() {
    let mut cmd = Command::cargo_bin("shaderplane").expect("binary exists");
    cmd.arg("--headless");
    cmd.assert()
        .success()
        .stdout(contains("Ran 60 frame(s) headless"))
        .stdout(contains(" - time=3.00"));
}

#[test]
fn unknown_argument_is_rejected() {
    let mut cmd = Command::cargo_bin("shaderplane").expect("binary exists");
    cmd.arg("--bogus");
    cmd.assert()
        .failure()
        .stderr(contains("Unknown argument: --bogus"));
}
