//! # Emitter
//!
//! Writes export lines for a parent shell to `eval`.

use std::io::Write;

use crate::materializer::ExportLine;

/// Write each line followed by a newline, then flush
///
/// # Errors
///
/// Propagates any write or flush failure from the writer.
pub fn emit<W: Write>(writer: &mut W, lines: &[ExportLine]) -> std::io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
