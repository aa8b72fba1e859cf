mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;
mod utils;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use args::{Mode, StreamArgs};
use commands::{compress, expand};

/// gencomp: 2-bit genome compressor
///
/// Packs sequences over {A, C, T, G} into 2 bits per base, and expands
/// them back. Data flows from standard input to standard output unless
/// files are given.
#[derive(Parser, Debug)]
#[command(name = "gencomp")]
#[command(author, version, about = "Compress or expand A/C/T/G sequences with a 2-bit code", long_about = None)]
struct Cli {
    /// '-' (or 'compress') to compress, '+' (or 'expand') to expand
    #[arg(value_name = "MODE")]
    mode: Mode,

    #[command(flatten)]
    streams: StreamArgs,

    /// Enable debug logging on standard error
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Reject flag combinations clap cannot express on its own.
    fn validate(&self) {
        if self.mode == Mode::Expand && self.streams.skip_line_breaks {
            Cli::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "--skip-line-breaks only applies when compressing",
                )
                .exit();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate();
    logging::init_logging(cli.verbose);

    match cli.mode {
        Mode::Compress => compress::compress_stream(&cli.streams)?,
        Mode::Expand => expand::expand_stream(&cli.streams)?,
    }

    Ok(())
}
