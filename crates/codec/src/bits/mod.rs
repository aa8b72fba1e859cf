//! Bit-granular stream I/O.
//!
//! Bits are packed MSB-first: the first bit written lands in the most
//! significant position of the first byte. Multi-bit values are written
//! most significant bit first, so a 32-bit integer written at a byte
//! boundary is stored big-endian.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

/// Widest value accepted by `read_bits` / `write_bits`.
pub const MAX_WIDTH: u8 = 32;
