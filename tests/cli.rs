//! CLI integration tests
//!
//! Exercises the binary's argument surface without touching the network or
//! the user's real config directory.

use assert_cmd::Command;
use predicates::prelude::*;

fn reelguide(temp_config: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reelguide").unwrap();
    cmd.env("REELGUIDE_DATA_DIR", temp_config.path());
    cmd
}

#[test]
fn test_help() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("movie recommendation wizard"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn test_genres_lists_catalog() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .arg("genres")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action"))
        .stdout(predicate::str::contains("Science Fiction"))
        .stdout(predicate::str::contains("any"));
}

#[test]
fn test_config_shows_paths() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("API base URL"))
        .stdout(predicate::str::contains(
            temp.path().to_str().unwrap().to_string(),
        ));
}

#[test]
fn test_recommend_rejects_unknown_genre() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .args([
            "recommend",
            "--type",
            "content",
            "--sub-type",
            "classic",
            "--genre",
            "Telenovela",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown genre"));
}

#[test]
fn test_recommend_rejects_unknown_type() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .args([
            "recommend",
            "--type",
            "astrology",
            "--sub-type",
            "classic",
            "--genre",
            "Action",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown recommendation type"));
}

#[test]
fn test_recommend_requires_genre_flag() {
    let temp = tempfile::TempDir::new().unwrap();
    reelguide(&temp)
        .args(["recommend", "--type", "mood", "--sub-type", "happy"])
        .assert()
        .failure();
}
