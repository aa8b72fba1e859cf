use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Refuse to run when `output` names the same file as `input`, since
/// creating the output would truncate the input before it is read.
pub fn ensure_distinct(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    if let (Some(input), Some(output)) = (input, output) {
        if let (Ok(input), Ok(output)) = (input.canonicalize(), output.canonicalize()) {
            if input == output {
                bail!(
                    "Input and output are the same file: {}",
                    input.display()
                );
            }
        }
    }
    Ok(())
}

pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin().lock()))),
    }
}

pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Remove a partially written output file after a failed run.
pub fn discard_output(path: Option<&Path>) {
    if let Some(path) = path {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!("Could not remove partial output {}: {e}", path.display());
        }
    }
}
