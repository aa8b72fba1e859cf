use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unexpected end of stream: needed {needed} bits but only {read} were available")]
    UnexpectedEndOfStream { needed: usize, read: usize },
    #[error("Unmapped symbol {byte:#04x} ({:?}) at position {position}", as_char(.byte))]
    UnmappedSymbol { byte: u8, position: usize },
    #[error("Invalid header: length {0} exceeds the maximum sequence length")]
    InvalidHeader(u32),
    #[error("Sequence of {0} symbols is too long to encode")]
    SequenceTooLong(usize),
    #[error("Invalid bit width: {0} (expected 1..=32)")]
    InvalidWidth(u8),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn as_char(byte: &u8) -> char {
    char::from(*byte)
}
