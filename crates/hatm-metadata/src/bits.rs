//! Big-endian bit cursors.
//!
//! Fields are packed MSB first with no padding between them. Every field of
//! 8 bits or more in the payload starts on a byte boundary, which the writer
//! enforces.

use crate::error::{EncodeError, EncodeResult, FormatError, FormatResult};

/// Reads MSB-first fields from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Starts reading at the first bit of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Reads a `bits`-wide unsigned field (at most 32 bits).
    pub fn read(&mut self, bits: u32) -> FormatResult<u32> {
        debug_assert!(bits <= 32);
        let remaining = self.bits_remaining();
        if bits as usize > remaining {
            return Err(FormatError::EndOfStream {
                needed: bits,
                remaining,
            });
        }
        let mut value = 0u32;
        for _ in 0..bits {
            let byte = self.bytes[self.pos / 8];
            let bit = (byte >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u32::from(bit);
            self.pos += 1;
        }
        Ok(value)
    }

    /// Reads a single-bit flag.
    #[inline]
    pub fn read_flag(&mut self) -> FormatResult<bool> {
        Ok(self.read(1)? == 1)
    }

    /// Reads a field of at most 8 bits.
    #[inline]
    pub fn read_u8(&mut self, bits: u32) -> FormatResult<u8> {
        debug_assert!(bits <= 8);
        Ok(self.read(bits)? as u8)
    }

    /// Reads a 16-bit field.
    #[inline]
    pub fn read_u16(&mut self) -> FormatResult<u16> {
        Ok(self.read(16)? as u16)
    }

    /// Bits consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bits left to read.
    #[inline]
    pub fn bits_remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }
}

/// Writes MSB-first fields into a growing buffer.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buffer: Vec<u8>,
    current: u8,
    filled: u32,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the low `bits` bits of `value` (at most 32).
    ///
    /// Fields of 8 bits or more must start on a byte boundary.
    pub fn write(&mut self, value: u32, bits: u32) -> EncodeResult<()> {
        debug_assert!(bits <= 32);
        if bits >= 8 && self.filled != 0 {
            return Err(EncodeError::MisalignedWrite {
                bits,
                bit_offset: self.filled,
            });
        }
        for i in (0..bits).rev() {
            let bit = ((value >> i) & 1) as u8;
            self.current |= bit << (7 - self.filled);
            self.filled += 1;
            if self.filled == 8 {
                self.buffer.push(self.current);
                self.current = 0;
                self.filled = 0;
            }
        }
        Ok(())
    }

    /// Writes a single-bit flag.
    #[inline]
    pub fn write_flag(&mut self, flag: bool) -> EncodeResult<()> {
        self.write(u32::from(flag), 1)
    }

    /// Bits written so far.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.buffer.len() * 8 + self.filled as usize
    }

    /// Returns the payload; fails if the last byte is incomplete.
    pub fn finish(self) -> EncodeResult<Vec<u8>> {
        if self.filled != 0 {
            return Err(EncodeError::UnalignedOutput {
                pending_bits: self.filled,
            });
        }
        Ok(self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_msb_first() {
        let bytes = [0b1010_0001, 0xAB, 0xCD];
        let mut r = BitReader::new(&bytes);
        assert_eq!(r.read(3).unwrap(), 0b101);
        assert_eq!(r.read(3).unwrap(), 0b000);
        assert_eq!(r.read(2).unwrap(), 0b01);
        assert_eq!(r.read_u16().unwrap(), 0xABCD);
        assert_eq!(r.bits_remaining(), 0);
        assert_eq!(r.position(), 24);
    }

    #[test]
    fn test_read_past_end() {
        let bytes = [0xFF];
        let mut r = BitReader::new(&bytes);
        r.read(5).unwrap();
        assert_eq!(
            r.read(16),
            Err(FormatError::EndOfStream {
                needed: 16,
                remaining: 3
            })
        );
        assert_eq!(
            BitReader::new(&[]).read_flag(),
            Err(FormatError::EndOfStream {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_write_packs_fields() {
        let mut w = BitWriter::new();
        w.write(0b101, 3).unwrap();
        w.write(0, 3).unwrap();
        w.write(0b01, 2).unwrap();
        w.write(0xABCD, 16).unwrap();
        assert_eq!(w.bit_len(), 24);
        assert_eq!(w.finish().unwrap(), vec![0b1010_0001, 0xAB, 0xCD]);
    }

    #[test]
    fn test_write_masks_high_bits() {
        let mut w = BitWriter::new();
        w.write(0xFF, 2).unwrap();
        w.write(0, 6).unwrap();
        assert_eq!(w.finish().unwrap(), vec![0b1100_0000]);
    }

    #[test]
    fn test_misaligned_write() {
        let mut w = BitWriter::new();
        w.write_flag(true).unwrap();
        assert_eq!(
            w.write(0x1234, 16),
            Err(EncodeError::MisalignedWrite {
                bits: 16,
                bit_offset: 1
            })
        );
    }

    #[test]
    fn test_unaligned_output() {
        let mut w = BitWriter::new();
        w.write(0b11, 2).unwrap();
        assert_eq!(w.finish(), Err(EncodeError::UnalignedOutput { pending_bits: 2 }));
    }
}
