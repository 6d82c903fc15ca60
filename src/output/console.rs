//! Plain-text console rendering.

use crate::document::DocumentModel;
use std::io::{self, Write};

/// Write the model as plain text.
///
/// Each block is followed by the separator line (an empty line when there is
/// no separator), and each non-empty section by one blank line.
pub fn render<W: Write + ?Sized>(model: &DocumentModel, out: &mut W) -> io::Result<()> {
    for (_, blocks) in model.sections() {
        for block in blocks {
            writeln!(out, "{}", block)?;
            writeln!(out, "{}", model.separator)?;
        }
        if !blocks.is_empty() {
            writeln!(out)?;
        }
    }
    out.flush()
}
