use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub(crate) const PROMPT: &str = "Enter file path (absolute or relative to the working directory): ";

/// Write the startup prompt and read one whitespace-delimited path token.
/// Blank lines are skipped; `None` means input ended before any token.
pub(crate) fn prompt_for_path<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<Option<PathBuf>> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(PathBuf::from(token)));
        }
    }
}
