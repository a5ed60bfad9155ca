#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn bin() -> Command {
    Command::cargo_bin("encode-keystore").unwrap()
}

#[test]
fn encodes_default_keystore_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("upload-keystore.jks"), [0x00, 0x01, 0x02]).unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keystore read: 3 bytes"))
        .stdout(predicate::str::contains("KEYSTORE_BASE64"))
        .stdout(predicate::str::contains("Done!"));

    let out = fs::read_to_string(dir.path().join("keystore_fixed.txt")).unwrap();
    assert_eq!(out, "AAEC");
}

#[test]
fn missing_keystore_fails_without_output() {
    let dir = tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("upload-keystore.jks"))
        .stdout(predicate::str::contains("Failed!"));

    assert!(!dir.path().join("keystore_fixed.txt").exists());
}

#[test]
fn custom_paths_and_quiet() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("release.jks");
    let output = dir.path().join("secret.txt");
    fs::write(&input, b"").unwrap();

    bin()
        .arg("--input")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original file size: 0 bytes"))
        .stdout(predicate::str::contains("New repository secret").not());

    assert_eq!(fs::read(&output).unwrap(), b"");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.jks");
    fs::write(&input, b"key").unwrap();

    bin()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("no-such-dir").join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    bin().arg("--decode").assert().code(2);
}

#[test]
fn closed_stdout_does_not_fail_a_successful_run() {
    let dir = tempdir().unwrap();
    let keystore = (0..3000u32).map(|i| (i * 7) as u8).collect::<Vec<_>>();
    fs::write(dir.path().join("upload-keystore.jks"), &keystore).unwrap();

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("encode-keystore"))
        .current_dir(dir.path())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    // Close the read end so writes to stdout fail.
    drop(child.stdout.take());

    let out = child.wait_with_output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&out.stderr).contains("fatal"));

    let written = fs::read_to_string(dir.path().join("keystore_fixed.txt")).unwrap();
    assert_eq!(written.len(), 4000);
}
