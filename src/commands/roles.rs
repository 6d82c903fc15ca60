//! Implementation of the `coverkit roles` command.

use crate::error::{CoverkitError, Result};
use crate::role;
use std::io::{self, Write};

/// Print the abbreviation table.
pub fn cmd_roles() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_roles(&mut out)
        .map_err(|e| CoverkitError::Output(format!("failed to write to console: {}", e)))
}

fn write_roles(out: &mut dyn Write) -> io::Result<()> {
    let table = role::abbreviations();
    let width = table.iter().map(|(abbr, _)| abbr.len()).max().unwrap_or(0);

    writeln!(out, "Role abbreviations:")?;
    for (abbr, title) in table {
        writeln!(out, "  {:<width$}  {}", abbr, title, width = width)?;
    }
    writeln!(out)?;
    writeln!(out, "Blank roles default to \"{}\".", role::DEFAULT_ROLE)
}
