//! End-to-end CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn fest() -> Command {
    let mut cmd = Command::cargo_bin("balloon-fest").expect("binary not found");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    fest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repeated letters"))
        .stdout(predicate::str::contains("--no-animation"));
}

#[test]
fn version_flag() {
    fest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("balloon-fest"));
}

#[test]
fn summary_only() {
    fest()
        .args(["--no-animation", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::contains("Input text             : 'banana'"))
        .stdout(predicate::str::contains("Length                 : 6 characters"))
        .stdout(predicate::str::contains("Duplicates             : a, n"))
        .stdout(predicate::str::contains("Algorithm time").and(predicate::str::contains("seconds")))
        .stdout(predicate::str::contains("Memory").not());
}

#[test]
fn unique_text() {
    fest()
        .args(["--no-animation", "abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nice and unique"))
        .stdout(predicate::str::contains("Duplicates             : None"));
}

#[test]
fn animation_falls_back_when_not_a_terminal() {
    fest()
        .arg("balloon")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicates             : l, o"))
        .stdout(predicate::str::contains("\x1b[?1049h").not());
}

#[test]
fn long_input_skips_animation_with_warning() {
    let long = "the quick brown fox jumps over the lazy dog";
    fest()
        .arg(long)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping balloon animation"))
        .stdout(predicate::str::contains("Summary:"));
}

#[test]
fn memory_profile_lines() {
    fest()
        .args(["--no-animation", "--mem-profile", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Memory current usage   :"))
        .stdout(predicate::str::contains("Memory peak usage      :"))
        .stdout(predicate::str::contains("KiB"));
}

#[test]
fn verbose_logs_histogram() {
    fest()
        .args(["--no-animation", "-v", "aa"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Count for 'a': 2"));
}

#[test]
fn batch_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "banana\n\n  balloon  \nabc").unwrap();

    let out = fest()
        .args(["--no-animation", "--input-file"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(out.matches("Summary:").count(), 3);
    let banana = out.find("'banana'").unwrap();
    let balloon = out.find("'balloon'").unwrap();
    let abc = out.find("'abc'").unwrap();
    assert!(banana < balloon && balloon < abc);
}

#[test]
fn missing_batch_file_fails() {
    fest()
        .args(["--input-file", "/definitely/not/here.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read /definitely/not/here.txt"));
}

#[test]
fn prompt_reads_stdin() {
    fest()
        .arg("--no-animation")
        .write_stdin("Mississippi\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter text: "))
        .stdout(predicate::str::contains("Duplicates             : i, s, p"));
}

#[test]
fn empty_prompt_exits_cleanly() {
    fest()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No input provided. Exiting."));
}

#[test]
fn zero_height_rejected() {
    fest()
        .args(["--height", "0", "aa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height must be at least 1"));
}

#[test]
fn linger_flag_is_accepted() {
    fest()
        .args(["--linger", "0", "balloon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicates             : l, o"));
    fest()
        .args(["--linger", "soon", "balloon"])
        .assert()
        .failure();
}
