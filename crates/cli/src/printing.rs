use anyhow::{Context, Result};
use gencomp_codec::CompressionSummary;
use serde::Serialize;

use crate::args::Mode;

#[derive(Serialize)]
struct Report<'a> {
    mode: Mode,
    #[serde(flatten)]
    summary: &'a CompressionSummary,
    ratio: f64,
}

/// Print a one-line JSON report on stderr.
pub fn print_summary(mode: Mode, summary: &CompressionSummary) -> Result<()> {
    let report = Report {
        mode,
        summary,
        ratio: summary.ratio(),
    };
    let json = serde_json::to_string(&report).context("Failed to serialize summary")?;
    eprintln!("{json}");
    Ok(())
}
