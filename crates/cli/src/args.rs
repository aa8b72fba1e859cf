use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Raised for a mode selector other than `-`/`compress` or `+`/`expand`.
#[derive(Debug, Error)]
#[error("Invalid argument: {0:?} (expected '-' to compress or '+' to expand)")]
pub struct InvalidArgument(pub String);

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Text -> packed stream.
    Compress,
    /// Packed stream -> text.
    Expand,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compress => write!(f, "compress"),
            Self::Expand => write!(f, "expand"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "compress" => Ok(Self::Compress),
            "+" | "expand" => Ok(Self::Expand),
            _ => Err(InvalidArgument(s.to_string())),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StreamArgs {
    /// Input file (reads standard input if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (writes standard output if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Drop line breaks (\n, \r) from the text before compressing
    ///
    /// Without this flag every input byte must be one of A, C, T or G.
    #[arg(long)]
    pub skip_line_breaks: bool,

    /// Print a JSON summary of the run on standard error
    #[arg(long)]
    pub stats: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selectors() {
        assert_eq!("-".parse::<Mode>().unwrap(), Mode::Compress);
        assert_eq!("+".parse::<Mode>().unwrap(), Mode::Expand);
        assert_eq!("compress".parse::<Mode>().unwrap(), Mode::Compress);
        assert_eq!("expand".parse::<Mode>().unwrap(), Mode::Expand);
    }

    #[test]
    fn test_invalid_mode() {
        let err = "x".parse::<Mode>().unwrap_err();
        assert_eq!(err.0, "x");
        assert!(err.to_string().starts_with("Invalid argument"));
        assert!("--".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [Mode::Compress, Mode::Expand] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
