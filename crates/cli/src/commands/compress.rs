use anyhow::{Context, Result};
use gencomp_codec::{compress, CompressOptions};
use tracing::info;

use crate::args::{Mode, StreamArgs};
use crate::printing::print_summary;
use crate::utils::{discard_output, ensure_distinct, open_input, open_output};

pub fn compress_stream(args: &StreamArgs) -> Result<()> {
    ensure_distinct(args.input.as_deref(), args.output.as_deref())?;
    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;
    let options = CompressOptions {
        skip_line_breaks: args.skip_line_breaks,
    };

    let summary = match compress(input, output, options) {
        Ok(summary) => summary,
        Err(e) => {
            discard_output(args.output.as_deref());
            return Err(e).context("Compression failed");
        }
    };

    info!(
        symbols = summary.symbols,
        output_bytes = summary.output_bytes,
        "Compressed sequence"
    );
    if args.stats {
        print_summary(Mode::Compress, &summary)?;
    }
    Ok(())
}
