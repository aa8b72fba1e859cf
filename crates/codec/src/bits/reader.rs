use std::io::{ErrorKind, Read};

use super::MAX_WIDTH;
use crate::error::CodecError;

const BUFFER_SIZE: usize = 8 * 1024;

/// Reads individual bits and fixed-width values from an underlying reader.
///
/// Running out of input in the middle of a read yields
/// [`CodecError::UnexpectedEndOfStream`].
pub struct BitReader<R: Read> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    len: usize,
    current: u8,
    remaining: u8,
    bits_read: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: vec![0u8; BUFFER_SIZE].into_boxed_slice(),
            pos: 0,
            len: 0,
            current: 0,
            remaining: 0,
            bits_read: 0,
        }
    }

    /// Total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    pub fn read_bit(&mut self) -> Result<bool, CodecError> {
        if self.remaining == 0 {
            match self.next_byte()? {
                Some(byte) => {
                    self.current = byte;
                    self.remaining = 8;
                }
                None => return Err(CodecError::UnexpectedEndOfStream { needed: 1, read: 0 }),
            }
        }
        self.remaining -= 1;
        self.bits_read += 1;
        Ok((self.current >> self.remaining) & 1 == 1)
    }

    /// Read `width` bits, most significant first, into the low bits of a `u32`.
    pub fn read_bits(&mut self, width: u8) -> Result<u32, CodecError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(CodecError::InvalidWidth(width));
        }

        let mut value = 0u32;
        for read in 0..width {
            match self.read_bit() {
                Ok(bit) => value = (value << 1) | u32::from(bit),
                Err(CodecError::UnexpectedEndOfStream { .. }) => {
                    return Err(CodecError::UnexpectedEndOfStream {
                        needed: usize::from(width),
                        read: usize::from(read),
                    });
                }
                Err(e) => return Err(e),
            }
        }
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.read_bits(32)
    }

    pub fn read_byte(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Discard the unread bits of the current byte. Returns how many were
    /// skipped.
    pub fn align(&mut self) -> u8 {
        let skipped = self.remaining;
        self.remaining = 0;
        skipped
    }

    /// True once every bit of the input has been consumed.
    pub fn is_empty(&mut self) -> Result<bool, CodecError> {
        if self.remaining > 0 {
            return Ok(false);
        }
        Ok(self.pos == self.len && !self.fill_buf()?)
    }

    fn next_byte(&mut self) -> Result<Option<u8>, CodecError> {
        if self.pos == self.len && !self.fill_buf()? {
            return Ok(None);
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }

    /// Refill the internal buffer. Returns false at end of input.
    fn fill_buf(&mut self) -> Result<bool, CodecError> {
        loop {
            match self.inner.read(&mut self.buf) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitWriter;
    use std::io::Cursor;

    #[test]
    fn test_read_bits_msb_first() {
        let mut reader = BitReader::new(Cursor::new(vec![0b1011_0110]));
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(2).unwrap(), 0b11);
        assert_eq!(reader.read_bits(4).unwrap(), 0b0110);
        assert_eq!(reader.bits_read(), 8);
        assert!(reader.is_empty().unwrap());
    }

    #[test]
    fn test_read_u32_big_endian() {
        let mut reader = BitReader::new(Cursor::new(vec![0, 0, 1, 0]));
        assert_eq!(reader.read_u32().unwrap(), 256);
    }

    #[test]
    fn test_values_written_by_bit_writer() {
        let mut writer = BitWriter::new(Vec::new());
        writer.write_bits(0b10, 2).unwrap();
        writer.write_u32(123_456_789).unwrap();
        writer.write_byte(b'G').unwrap();
        writer.write_bits(0b1, 1).unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = BitReader::new(Cursor::new(bytes));
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_u32().unwrap(), 123_456_789);
        assert_eq!(reader.read_byte().unwrap(), b'G');
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.align(), 5);
        assert!(reader.is_empty().unwrap());
    }

    #[test]
    fn test_end_of_stream_mid_value() {
        let mut reader = BitReader::new(Cursor::new(vec![0xAB, 0xCD]));
        let err = reader.read_u32().unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnexpectedEndOfStream {
                needed: 32,
                read: 16
            }
        ));
    }

    #[test]
    fn test_end_of_stream_on_empty_input() {
        let mut reader = BitReader::new(Cursor::new(Vec::new()));
        assert!(reader.is_empty().unwrap());
        assert!(matches!(
            reader.read_bit(),
            Err(CodecError::UnexpectedEndOfStream { .. })
        ));
    }

    #[test]
    fn test_invalid_width() {
        let mut reader = BitReader::new(Cursor::new(vec![0u8; 8]));
        assert!(matches!(reader.read_bits(0), Err(CodecError::InvalidWidth(0))));
        assert!(matches!(reader.read_bits(40), Err(CodecError::InvalidWidth(40))));
    }

    #[test]
    fn test_reads_across_buffer_refills() {
        let data: Vec<u8> = (0..(BUFFER_SIZE * 2 + 3)).map(|i| i as u8).collect();
        let mut reader = BitReader::new(Cursor::new(data.clone()));
        for &expected in &data {
            assert_eq!(reader.read_byte().unwrap(), expected);
        }
        assert!(reader.is_empty().unwrap());
    }
}
