/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::io::{self, BufRead};

const PARENT_MARKER: &[u8] = b"parent ";
const AUTHOR_MARKER: &[u8] = b"author ";

/// Whether a commit has more than one parent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitKind {
    /// Root commit or a commit with a single parent
    Regular,
    /// Commit with two or more parents
    Merge,
}

/// Classify a raw commit object (as printed by `git cat-file commit`).
///
/// Only the header is read: the scan stops on the second `parent` line,
/// on the `author` line, or on the blank line closing the header,
/// whichever comes first.
pub fn classify<R: BufRead>(mut reader: R) -> io::Result<CommitKind> {
    let mut parents = 0usize;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(CommitKind::Regular);
        }

        if line.starts_with(PARENT_MARKER) {
            parents += 1;
            if parents > 1 {
                return Ok(CommitKind::Merge);
            }
        } else if line.starts_with(AUTHOR_MARKER) || line == b"\n" {
            return Ok(CommitKind::Regular);
        }
    }
}
