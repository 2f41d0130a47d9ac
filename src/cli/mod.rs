pub mod output;

use crate::path::trim_gaps;
use anyhow::{Context, Result};
use std::io::BufRead;

/// Identifiers from the command line, or one per non-blank input line when
/// none were given.
pub fn read_identifiers(args: Vec<String>, input: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut identifiers = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read identifiers from stdin")?;
        let line = trim_gaps(&line);
        if !line.is_empty() {
            identifiers.push(line);
        }
    }
    Ok(identifiers)
}
