//! Command implementations for coverkit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command works against a [`RunContext`] resolved
//! from the global `--dir` and `--config` flags.

mod generate;
mod init;
mod roles;

use crate::cli::{Cli, Command};
use crate::context::RunContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The run context is
/// resolved once here and handed to each handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = RunContext::resolve(cli.dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(&ctx, &args),
        Command::Init(args) => init::cmd_init(&ctx, &args),
        Command::Roles => roles::cmd_roles(),
    }
}
