/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that end a `git onepatch` invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line could not be accepted. The message and usage
    /// text have already been written.
    #[error("usage error")]
    Usage,

    /// The revision does not name a commit. Git has already reported why
    /// on stderr.
    #[error("could not resolve revision (git exited with status {status})")]
    Resolve { status: i32 },

    /// A git subprocess failed. Git has already reported why on stderr.
    #[error("git exited with status {status}")]
    Git { status: i32 },

    /// Git could not be spawned, or reading from / writing to it failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `Git` error from a finished process.
    pub fn from_status(status: ExitStatus) -> Self {
        Self::Git {
            status: status_code(status),
        }
    }

    /// Return the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage | Self::Resolve { .. } | Self::Io(_) => 1,
            Self::Git { status } => *status,
        }
    }
}

/// Exit code of a finished process; signals and out-of-range codes count as 1.
pub fn status_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) if (0..=255).contains(&code) => code,
        _ => 1,
    }
}
