//! Destructive-action confirmation gate.

use std::io::{BufRead, Write};

/// Single-shot y/N prompt.
///
/// Reads one line from `input` and returns true iff the trimmed reply is
/// `y`, case-insensitively. Anything else, including an empty reply,
/// declines. No retry, no re-prompt.
pub fn confirm(
    prompt: &str,
    mut input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<bool> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    let mut reply = String::new();
    input.read_line(&mut reply)?;
    Ok(reply.trim().eq_ignore_ascii_case("y"))
}
