//! Implementation of the `coverkit init` command.
//!
//! # What `coverkit init` does
//!
//! 1. Writes the bundled schemas into the formats directory
//! 2. Writes `.env.example`, and `.env` from it when no environment file exists
//! 3. Writes `coverkit.yaml` with the default configuration
//! 4. Creates the output directory
//!
//! This command is **idempotent**: existing files are left untouched unless
//! `--force` is given.

mod scaffolding;

#[cfg(test)]
mod tests;

use crate::cli::InitArgs;
use crate::context::RunContext;
use crate::error::Result;
use scaffolding::{Scaffold, scaffold};
use std::path::Path;

/// Execute the `coverkit init` command.
pub fn cmd_init(ctx: &RunContext, args: &InitArgs) -> Result<()> {
    let report = scaffold(ctx, args.force)?;

    println!("Initialized coverkit in {}", ctx.base_dir.display());
    println!();
    for entry in &report {
        let status = match entry.status {
            Scaffold::Created => "created",
            Scaffold::Overwritten => "overwritten",
            Scaffold::Kept => "kept",
        };
        println!("  {:<11} {}", status, display_relative(&ctx.base_dir, &entry.path));
    }
    println!();
    println!("Edit the contact details in the environment file, then run `coverkit generate`.");

    Ok(())
}

fn display_relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
