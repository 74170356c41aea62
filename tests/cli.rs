// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Integration tests for the vibecheck binary.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn vibecheck() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("vibecheck"));
    cmd.env_remove("VIBECHECK_NO_MEDIA").env_remove("RUST_LOG");
    cmd
}

/// A workspace with a config file and a commit message file.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("vibecheck.toml"), config).unwrap();
        Self { dir }
    }

    fn quiet() -> Self {
        Self::new("[media]\nenabled = false\n")
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> PathBuf {
        self.path().join("vibecheck.toml")
    }

    fn message(&self, text: &str) -> PathBuf {
        let path = self.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn check(&self, text: &str) -> assert_cmd::Command {
        let message = self.message(text);
        let mut cmd = vibecheck();
        cmd.current_dir(self.path())
            .arg("--config")
            .arg(self.config())
            .arg(message);
        cmd
    }
}

#[test]
fn test_plain_message_rejected() {
    Workspace::quiet()
        .check("Add new feature\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("emoji-missing"))
        .stdout(predicate::str::contains("slang-missing"))
        .stdout(predicate::str::contains("Pick an emoji for your commit:"))
        .stdout(predicate::str::contains("Some rizzy terms you can use:"));
}

#[test]
fn test_emoji_only_variant_accepts() {
    Workspace::quiet()
        .check("✨ Add new feature\n")
        .arg("--check")
        .arg("emoji")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Vibe check passed"));
}

#[test]
fn test_emoji_only_config_accepts() {
    Workspace::new("[checks]\nenabled = [\"emoji\"]\n\n[media]\nenabled = false\n")
        .check("✨ Add new feature\n")
        .assert()
        .success();
}

#[test]
fn test_extended_variant_needs_slang() {
    Workspace::quiet()
        .check("✨ Add new feature\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("slang-missing"))
        .stdout(predicate::str::contains("emoji-missing").not());
}

#[test]
fn test_extended_variant_accepts() {
    Workspace::quiet()
        .check("✨ no cap this update bussin fr fr\n")
        .assert()
        .code(0);
}

#[test]
fn test_git_comments_ignored() {
    Workspace::quiet()
        .check("Add new feature\n# 🚀 no cap\n")
        .assert()
        .code(1);
}

#[test]
fn test_missing_message_file() {
    let ws = Workspace::quiet();
    vibecheck()
        .current_dir(ws.path())
        .arg("--config")
        .arg(ws.config())
        .arg(ws.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does-not-exist"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_message_file_argument() {
    let ws = Workspace::quiet();
    vibecheck()
        .current_dir(ws.path())
        .arg("--config")
        .arg(ws.config())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit message file"));
}

#[test]
fn test_json_output() {
    let output = Workspace::quiet()
        .check("✨ Add new feature\n")
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["subject"], "✨ Add new feature");
    assert_eq!(json["errors"][0]["code"], "slang-missing");
}

#[test]
fn test_broken_player_does_not_change_outcome() {
    let ws = Workspace::new(
        r#"
[media]
enabled = true
dir = "."
wait = true
command = ["vibecheck-no-such-player"]
fallback_command = ["vibecheck-no-such-player-either"]

[media.clips]
emoji = "clip.mp3"
slang = "clip.mp3"
accepted = "clip.mp3"
"#,
    );
    std::fs::write(ws.path().join("clip.mp3"), b"noise").unwrap();

    ws.check("🚀 ship it, no cap\n").assert().code(0);
    ws.check("ship it\n").assert().code(1);
}

#[test]
fn test_no_media_env_accepts_numbers() {
    let ws = Workspace::new("");

    for value in ["1", "true", "yes"] {
        ws.check("✨ no cap this update bussin fr fr\n")
            .env("VIBECHECK_NO_MEDIA", value)
            .assert()
            .code(0);
    }

    ws.check("Add new feature\n")
        .env("VIBECHECK_NO_MEDIA", "1")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("emoji-missing"));

    ws.check("✨ no cap this update bussin fr fr\n")
        .env("VIBECHECK_NO_MEDIA", "0")
        .assert()
        .code(0);
}

/// Config whose player appends each clip path to `played.log`.
#[cfg(unix)]
fn recording_workspace() -> Workspace {
    let ws = Workspace::new(
        r#"
[media]
enabled = true
dir = "."
wait = true
command = ["sh", "-c", "echo \"$0\" >> played.log", "{file}"]
fallback_command = []
"#,
    );
    for clip in ["ganondorf_laugh.mp4", "no_rizz.mp4", "wombo_combo.mp4"] {
        std::fs::write(ws.path().join(clip), b"noise").unwrap();
    }
    ws
}

#[cfg(unix)]
fn played(ws: &Workspace) -> Vec<String> {
    let log = std::fs::read_to_string(ws.path().join("played.log")).unwrap_or_default();
    let lines = log.lines().map(|l| l.trim_start_matches("./").to_string()).collect();
    std::fs::remove_file(ws.path().join("played.log")).ok();
    lines
}

#[cfg(unix)]
#[test]
fn test_clip_per_failed_check() {
    let ws = recording_workspace();

    ws.check("Add new feature\n").assert().code(1);
    assert_eq!(played(&ws), vec!["ganondorf_laugh.mp4", "no_rizz.mp4"]);

    ws.check("✨ Add new feature\n").assert().code(1);
    assert_eq!(played(&ws), vec!["no_rizz.mp4"]);

    ws.check("✨ no cap this update bussin fr fr\n").assert().code(0);
    assert_eq!(played(&ws), vec!["wombo_combo.mp4"]);

    ws.check("Add new feature\n")
        .arg("--no-media")
        .assert()
        .code(1);
    assert!(played(&ws).is_empty());
}

#[test]
fn test_menu() {
    let ws = Workspace::quiet();
    vibecheck()
        .current_dir(ws.path())
        .args(["menu", "-n", "3", "--config"])
        .arg(ws.config())
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    vibecheck()
        .current_dir(temp.path())
        .args(["init", "--preset", "emoji"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vibecheck.toml"));

    let content = std::fs::read_to_string(temp.path().join("vibecheck.toml")).unwrap();
    assert!(content.contains("enabled = [\"emoji\"]"));

    vibecheck()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_hooks_install_and_status() {
    let temp = TempDir::new().unwrap();
    git2::Repository::init(temp.path()).unwrap();
    std::fs::write(temp.path().join("vibecheck.toml"), "").unwrap();

    vibecheck()
        .current_dir(temp.path())
        .args(["hooks", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed commit-msg hook"));

    assert!(temp.path().join(".git/hooks/commit-msg").exists());

    vibecheck()
        .current_dir(temp.path())
        .args(["hooks", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ commit-msg"));

    vibecheck()
        .current_dir(temp.path())
        .args(["hooks", "uninstall"])
        .assert()
        .success();

    assert!(!temp.path().join(".git/hooks/commit-msg").exists());
}
