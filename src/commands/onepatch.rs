/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::ffi::OsString;
use std::io::Write;

use clap::{CommandFactory, Parser};
use log::debug;

use crate::error::Error;
use crate::utils::commits::CommitKind;
use crate::utils::git::Git;

#[derive(Parser, Debug)]
#[command(name = "git-onepatch")]
#[command(about = "Format one commit as a patch, or show it as a combined diff if it is a merge")]
#[command(version)]
pub struct Args {
    /// Commit to format
    #[arg(default_value = "HEAD")]
    pub revision: String,

    #[arg(hide = true)]
    pub extra: Vec<String>,
}

/// Parse `argv`, then format the commit it names into `stdout`.
///
/// Returns the process exit code.
pub fn run<I, T, O, E>(argv: I, git: &Git, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let result = match parse(argv, stdout, stderr) {
        Ok(Some(args)) => command(&args, git, stdout, stderr),
        Ok(None) => Ok(()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => 0,
        Err(Error::Io(err)) => {
            let _ = writeln!(stderr, "fatal: {}", err);
            1
        }
        Err(err) => err.exit_code(),
    }
}

/// Parse the command line. Help and version are written here and yield `None`.
fn parse<I, T, O, E>(argv: I, stdout: &mut O, stderr: &mut E) -> Result<Option<Args>, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            write!(stderr, "{}", err.render())?;
            return Err(Error::Usage);
        }
        Err(err) => {
            // --help or --version
            write!(stdout, "{}", err.render())?;
            stdout.flush()?;
            return Ok(None);
        }
    };

    if !args.extra.is_empty() {
        writeln!(stderr, "fatal: too many arguments")?;
        write!(stderr, "{}", Args::command().render_help())?;
        return Err(Error::Usage);
    }

    Ok(Some(args))
}

/// Handle a parsed command line - dispatch on the commit's parent count
pub fn command<O, E>(
    args: &Args,
    git: &Git,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<(), Error>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let commit_id = git.resolve_commit(&args.revision)?;

    match git.classify_commit(&commit_id)? {
        CommitKind::Regular => {
            debug!("Exporting {} as a patch", commit_id);
            git.format_patch(&commit_id, stdout)
        }
        CommitKind::Merge => {
            writeln!(stderr, "Warning: {} is a merge commit", commit_id)?;
            stderr.flush()?;
            git.show(&commit_id, stdout)
        }
    }
}
