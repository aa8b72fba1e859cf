use anyhow::{Context, Result};
use gencomp_codec::expand;
use tracing::info;

use crate::args::{Mode, StreamArgs};
use crate::printing::print_summary;
use crate::utils::{discard_output, ensure_distinct, open_input, open_output};

pub fn expand_stream(args: &StreamArgs) -> Result<()> {
    ensure_distinct(args.input.as_deref(), args.output.as_deref())?;
    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    let summary = match expand(input, output) {
        Ok(summary) => summary,
        Err(e) => {
            discard_output(args.output.as_deref());
            return Err(e).context("Expansion failed");
        }
    };

    info!(symbols = summary.symbols, "Expanded sequence");
    if args.stats {
        print_summary(Mode::Expand, &summary)?;
    }
    Ok(())
}
