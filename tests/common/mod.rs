/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run git in `dir` with a fixed identity and clock, panicking on failure.
pub fn git_output(dir: &Path, args: &[&str]) -> Output {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "A U Thor")
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .env("GIT_AUTHOR_DATE", "1234567890 +0000")
        .env("GIT_COMMITTER_NAME", "C O Mitter")
        .env("GIT_COMMITTER_EMAIL", "committer@example.com")
        .env("GIT_COMMITTER_DATE", "1234567890 +0000")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Run git and return its trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    String::from_utf8(git_output(dir, args).stdout)
        .unwrap()
        .trim()
        .to_string()
}

pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    std::fs::write(dir.join(name), content).unwrap();
    git(dir, &["add", name]);
    git(dir, &["-c", "commit.gpgsign=false", "commit", "-q", "-m", message]);
}

pub fn init_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    dir
}

/// A linear history of `count` commits on `main`, each touching its own file.
pub fn setup_linear_history(count: usize) -> TempDir {
    let dir = init_repo();
    for i in 0..count {
        commit_file(
            dir.path(),
            &format!("file_{i}.txt"),
            &format!("content {i}\n"),
            &format!("commit {i}"),
        );
    }
    dir
}

/// base on main, `one` on main, `two` on topic, then topic merged into main.
pub fn setup_merged_history() -> TempDir {
    let dir = init_repo();
    let path = dir.path();
    commit_file(path, "base.txt", "base\n", "base");
    git(path, &["branch", "topic"]);
    commit_file(path, "one.txt", "one\n", "one");
    git(path, &["checkout", "-q", "topic"]);
    commit_file(path, "two.txt", "two\n", "two");
    git(path, &["checkout", "-q", "main"]);
    git(path, &["merge", "-q", "--no-ff", "--no-edit", "topic"]);
    dir
}

/// Like `setup_merged_history`, but both sides edit the same file and the
/// merge resolves the conflict by hand, so `git show` has a combined diff.
pub fn setup_conflicted_merge() -> TempDir {
    let dir = init_repo();
    let path = dir.path();
    commit_file(path, "shared.txt", "base\n", "base");
    git(path, &["branch", "topic"]);
    commit_file(path, "shared.txt", "main side\n", "main edit");
    git(path, &["checkout", "-q", "topic"]);
    commit_file(path, "shared.txt", "topic side\n", "topic edit");
    git(path, &["checkout", "-q", "main"]);

    let status = Command::new("git")
        .current_dir(path)
        .args(["merge", "-q", "--no-edit", "topic"])
        .env("GIT_COMMITTER_NAME", "C O Mitter")
        .env("GIT_COMMITTER_EMAIL", "committer@example.com")
        .env("GIT_AUTHOR_NAME", "A U Thor")
        .env("GIT_AUTHOR_EMAIL", "author@example.com")
        .output()
        .unwrap()
        .status;
    assert!(!status.success(), "merge was expected to conflict");

    commit_file(path, "shared.txt", "resolved\n", "Merge branch 'topic'");
    dir
}
