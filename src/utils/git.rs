/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{status_code, Error};
use crate::utils::commits::{self, CommitKind};

/// Runs `git` subcommands inside one repository
#[derive(Clone, Debug)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    /// Create a handle whose commands run in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn command(&self, args: &[&str]) -> Command {
        debug!("Running git {} in {}", args.join(" "), self.dir.display());

        let mut cmd = Command::new("git");
        cmd.current_dir(&self.dir).args(args).stdin(Stdio::null());
        cmd
    }

    /// Resolve a revision to the full id of the commit it names
    pub fn resolve_commit(&self, revision: &str) -> Result<String, Error> {
        let spec = format!("{}^{{commit}}", revision);
        let output = self
            .command(&["rev-parse", "--verify", "--end-of-options", &spec])
            .stderr(Stdio::inherit())
            .output()?;

        if !output.status.success() {
            return Err(Error::Resolve {
                status: status_code(output.status),
            });
        }

        let commit_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Resolved {} to {}", revision, commit_id);
        Ok(commit_id)
    }

    /// Tell merges from regular commits by scanning the raw commit header
    pub fn classify_commit(&self, commit_id: &str) -> Result<CommitKind, Error> {
        let mut child = self
            .command(&["cat-file", "commit", commit_id])
            .stdout(Stdio::piped())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("git cat-file stdout was not captured"))?;
        let mut reader = BufReader::new(stdout);

        let kind = commits::classify(&mut reader);
        // An early decision leaves unread data behind; git may then die on
        // the closed pipe, which is not a failure.
        let reached_end = reader.fill_buf().is_ok_and(|rest| rest.is_empty());
        drop(reader);

        let status = child.wait()?;
        if reached_end && !status.success() {
            return Err(Error::from_status(status));
        }

        let kind = kind?;
        debug!("Commit {} classified as {:?}", commit_id, kind);
        Ok(kind)
    }

    /// Write the mail-format patch of exactly one commit, notes included
    pub fn format_patch<W: Write + ?Sized>(
        &self,
        commit_id: &str,
        out: &mut W,
    ) -> Result<(), Error> {
        self.copy_stdout(&["format-patch", "--stdout", "--notes", "-1", commit_id], out)
    }

    /// Write `git show` output for a commit
    pub fn show<W: Write + ?Sized>(&self, commit_id: &str, out: &mut W) -> Result<(), Error> {
        self.copy_stdout(&["show", commit_id], out)
    }

    /// Run a command, stream its stdout into `out` and propagate its status.
    ///
    /// A reader that goes away early (`git onepatch | head`) ends the output
    /// quietly; git is left to die on the closed pipe.
    fn copy_stdout<W: Write + ?Sized>(&self, args: &[&str], out: &mut W) -> Result<(), Error> {
        let mut child = self.command(args).stdout(Stdio::piped()).spawn()?;

        let copied = match child.stdout.take() {
            Some(mut stdout) => io::copy(&mut stdout, out).and_then(|_| out.flush()),
            None => Err(io::Error::other("git stdout was not captured")),
        };

        let status = child.wait()?;
        match copied {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                debug!("Output closed early, git exited with {}", status);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        if !status.success() {
            return Err(Error::from_status(status));
        }

        Ok(())
    }
}
