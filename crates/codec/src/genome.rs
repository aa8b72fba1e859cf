//! The 2-bit genome codec.
//!
//! Stream layout:
//!
//! ```text
//! +----------------------+---------+---------+-----+-----------+
//! | length N (u32, BE)   | code[0] | code[1] | ... | zero pad  |
//! | 32 bits              | 2 bits  | 2 bits  |     | 0..6 bits |
//! +----------------------+---------+---------+-----+-----------+
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::alphabet::{parse_symbols, CODE_TO_ASCII, CODE_WIDTH};
use crate::bits::{BitReader, BitWriter};
use crate::error::CodecError;
use crate::traits::Codec;

/// Width of the length header in bits.
pub const HEADER_BITS: u8 = 32;

/// Largest sequence length a stream may declare. Kept within the signed
/// 32-bit range so the header reads the same as a signed integer.
pub const MAX_SYMBOLS: usize = i32::MAX as usize;

/// Size in bytes of the compressed form of an `n`-symbol sequence.
pub const fn compressed_len(n: usize) -> usize {
    (HEADER_BITS as usize / 8) + n.div_ceil(4)
}

/// Options for [`compress`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Drop `\n` and `\r` bytes before encoding instead of rejecting them.
    pub skip_line_breaks: bool,
}

/// Sizes observed by a single compress or expand call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionSummary {
    /// Number of symbols (the header value).
    pub symbols: usize,
    /// Bytes consumed: text for compress, packed stream for expand.
    pub input_bytes: usize,
    /// Bytes produced: packed stream for compress, text for expand.
    pub output_bytes: usize,
}

impl CompressionSummary {
    /// Output size divided by input size; 0.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress a text stream of A/C/T/G characters into the packed format.
///
/// The whole input is read and validated before anything is written, so an
/// unmapped symbol leaves `output` untouched. The output is flushed before
/// returning.
pub fn compress<R: Read, W: Write>(
    mut input: R,
    output: W,
    options: CompressOptions,
) -> Result<CompressionSummary, CodecError> {
    let mut text = Vec::new();
    input.read_to_end(&mut text)?;
    let text_bytes = text.len();

    if options.skip_line_breaks {
        text.retain(|&b| b != b'\n' && b != b'\r');
    }

    let symbols = parse_symbols(&text)?;
    let n = symbols.len();
    if n > MAX_SYMBOLS {
        return Err(CodecError::SequenceTooLong(n));
    }
    debug!(symbols = n, text_bytes, "Compressing sequence");

    let mut writer = BitWriter::new(output);
    writer.write_bits(n as u32, HEADER_BITS)?;
    for nuc in &symbols {
        writer.write_bits(u32::from(nuc.code()), CODE_WIDTH)?;
    }
    trace!(bits = writer.bits_written(), "Packed codes");
    writer.finish()?;

    Ok(CompressionSummary {
        symbols: n,
        input_bytes: text_bytes,
        output_bytes: compressed_len(n),
    })
}

/// Expand a packed stream back into uppercase A/C/T/G text.
///
/// Fails with [`CodecError::UnexpectedEndOfStream`] if the stream holds
/// fewer codes than its header declares. Bytes already expanded at that
/// point may have reached `output`.
pub fn expand<R: Read, W: Write>(input: R, output: W) -> Result<CompressionSummary, CodecError> {
    let mut reader = BitReader::new(input);
    let n = read_header(&mut reader)?;
    debug!(symbols = n, "Expanding sequence");

    let mut writer = BitWriter::new(output);
    for _ in 0..n {
        let code = reader.read_bits(CODE_WIDTH)? as usize;
        writer.write_byte(CODE_TO_ASCII[code])?;
    }
    writer.finish()?;

    let padding = reader.align();
    if !reader.is_empty()? {
        warn!(symbols = n, "Ignoring trailing data after packed codes");
    }
    trace!(bits = reader.bits_read(), padding, "Consumed packed stream");

    Ok(CompressionSummary {
        symbols: n,
        input_bytes: compressed_len(n),
        output_bytes: n,
    })
}

fn read_header<R: Read>(reader: &mut BitReader<R>) -> Result<usize, CodecError> {
    let header = reader.read_bits(HEADER_BITS)?;
    let n = header as usize;
    if n > MAX_SYMBOLS {
        return Err(CodecError::InvalidHeader(header));
    }
    Ok(n)
}

/// Compress an in-memory sequence with default options.
pub fn compress_bytes(seq: &[u8]) -> Result<Vec<u8>, CodecError> {
    GenomeCodec::default().encode(seq)
}

/// Expand an in-memory packed stream.
pub fn expand_bytes(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    GenomeCodec::default().decode(data)
}

/// In-memory 2-bit codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenomeCodec {
    pub options: CompressOptions,
}

impl GenomeCodec {
    pub fn new(options: CompressOptions) -> Self {
        Self { options }
    }
}

impl Codec for GenomeCodec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(compressed_len(seq.len()));
        compress(seq, &mut out, self.options)?;
        Ok(out)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        expand(data, &mut out)?;
        Ok(out)
    }
}
