//! Integration tests for the non-interactive commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{routine_cmd, AFFIRMATIONS};

#[test]
fn test_checklist_prints_default_entries() {
    routine_cmd()
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. [ ] ✅ Laskavé slovo po probuzení",
        ))
        .stdout(predicate::str::contains("2. [ ] ✅ Protažení těla"))
        .stdout(predicate::str::contains("3. [ ] ✅ 3 věty do zápisníku"))
        .stdout(predicate::str::contains("4. [ ] ✅ Dechová chvilka"))
        .stdout(predicate::str::contains("5. [ ] ✅ Úsměv do zrcadla"));
}

#[test]
fn test_affirmation_is_pool_member() {
    for seed in 0..10 {
        let output = routine_cmd()
            .arg("affirmation")
            .arg("--seed")
            .arg(seed.to_string())
            .output()
            .unwrap();
        assert!(output.status.success());

        let text = String::from_utf8(output.stdout).unwrap();
        assert!(
            AFFIRMATIONS.contains(&text.trim_end()),
            "unexpected affirmation: {:?}",
            text
        );
    }
}

#[test]
fn test_affirmation_seed_is_reproducible() {
    let first = routine_cmd()
        .args(["--seed", "42", "affirmation"])
        .output()
        .unwrap();
    let second = routine_cmd()
        .args(["--seed", "42", "affirmation"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_config_overrides_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("routine.toml");
    fs::write(
        &path,
        "checklist = [\"Sklenice vody\"]\naffirmations = [\"Zvládnu to.\"]\n",
    )
    .unwrap();

    routine_cmd()
        .arg("--config")
        .arg(&path)
        .arg("checklist")
        .assert()
        .success()
        .stdout("1. [ ] Sklenice vody\n");

    routine_cmd()
        .arg("affirmation")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("Zvládnu to.\n");
}

#[test]
fn test_config_from_environment() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("routine.toml");
    fs::write(&path, "affirmations = [\"Z prostředí.\"]\n").unwrap();

    routine_cmd()
        .env("MORNING_ROUTINE_CONFIG", &path)
        .arg("affirmation")
        .assert()
        .success()
        .stdout("Z prostředí.\n");
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    routine_cmd()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("checklist")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"))
        .stderr(predicate::str::contains("Suggestions"));
}

#[test]
fn test_empty_affirmations_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("routine.toml");
    fs::write(&path, "affirmations = []\n").unwrap();

    routine_cmd()
        .arg("--config")
        .arg(&path)
        .arg("affirmation")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Affirmation pool is empty"));
}

#[test]
fn test_log_file_written() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("logs").join("routine.log");

    routine_cmd()
        .arg("--log-file")
        .arg(&log)
        .arg("affirmation")
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Logging initialized"));
    assert!(contents.contains("Routine initialized"));
}
