//! 2-bit genomic sequence codec.
//!
//! Packs sequences over {A, C, T, G} into 2 bits per base behind a 32-bit
//! length header, and expands them back to uppercase text.

mod alphabet;
pub mod bits;
mod error;
mod genome;
mod traits;

pub use alphabet::{parse_symbols, Nucleotide, CODE_TO_ASCII, CODE_WIDTH};
pub use bits::{BitReader, BitWriter};
pub use error::CodecError;
pub use genome::{
    compress, compress_bytes, compressed_len, expand, expand_bytes, CompressOptions,
    CompressionSummary, GenomeCodec, HEADER_BITS, MAX_SYMBOLS,
};
pub use traits::Codec;
