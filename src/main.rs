/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::io;
use std::process::ExitCode;

mod commands;
mod error;
mod utils;

use utils::git::Git;

fn main() -> ExitCode {
    env_logger::init();

    let git = Git::new(".");
    let code = commands::onepatch::run(
        std::env::args_os(),
        &git,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
