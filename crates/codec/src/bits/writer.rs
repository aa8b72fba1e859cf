use std::io::{self, Write};

use super::MAX_WIDTH;
use crate::error::CodecError;

const BUFFER_SIZE: usize = 8 * 1024;

/// Writes individual bits and fixed-width values to an underlying writer.
///
/// Completed bytes are staged in an internal buffer and handed to the inner
/// writer in blocks. Call [`BitWriter::finish`] to pad the final byte with
/// zero bits and flush everything; if the writer is dropped instead, the
/// same padding and flushing is attempted and errors are ignored.
pub struct BitWriter<W: Write> {
    inner: Option<W>,
    buf: Vec<u8>,
    current: u8,
    filled: u8,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            buf: Vec::with_capacity(BUFFER_SIZE),
            current: 0,
            filled: 0,
            bits_written: 0,
        }
    }

    /// Total number of bits written so far, excluding padding.
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<(), CodecError> {
        self.current = (self.current << 1) | u8::from(bit);
        self.filled += 1;
        self.bits_written += 1;
        if self.filled == 8 {
            let byte = self.current;
            self.current = 0;
            self.filled = 0;
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Write the low `width` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, width: u8) -> Result<(), CodecError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(CodecError::InvalidWidth(width));
        }

        if self.filled == 0 && width % 8 == 0 {
            for shift in (0..width / 8).rev() {
                self.push_byte((value >> (u32::from(shift) * 8)) as u8)?;
            }
            self.bits_written += u64::from(width);
            return Ok(());
        }

        for shift in (0..width).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    /// Write a 32-bit integer, big-endian when byte aligned.
    pub fn write_u32(&mut self, value: u32) -> Result<(), CodecError> {
        self.write_bits(value, 32)
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), CodecError> {
        self.write_bits(u32::from(byte), 8)
    }

    /// Hand every completed byte to the inner writer and flush it.
    ///
    /// A partially filled byte stays buffered; only [`BitWriter::finish`]
    /// pads it out.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.flush_buf()?;
        if let Some(inner) = self.inner.as_mut() {
            inner.flush()?;
        }
        Ok(())
    }

    /// Pad the last byte with zero bits, flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W, CodecError> {
        self.pad()?;
        self.flush()?;
        self.inner
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "bit writer already finished").into())
    }

    fn pad(&mut self) -> Result<(), CodecError> {
        if self.filled > 0 {
            let byte = self.current << (8 - self.filled);
            self.current = 0;
            self.filled = 0;
            self.push_byte(byte)?;
        }
        Ok(())
    }

    fn push_byte(&mut self, byte: u8) -> Result<(), CodecError> {
        self.buf.push(byte);
        if self.buf.len() >= BUFFER_SIZE {
            self.flush_buf()?;
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<(), CodecError> {
        if let Some(inner) = self.inner.as_mut() {
            inner.write_all(&self.buf)?;
        }
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            let _ = self.pad();
            let _ = self.flush();
        }
    }
}
