use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A genomic base and its 2-bit code.
///
/// The discriminant of each variant *is* its on-disk code, so the mapping
/// between symbols and codes is fixed at compile time:
/// A=0b00, C=0b01, T=0b10, G=0b11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0b00,
    C = 0b01,
    T = 0b10,
    G = 0b11,
}

/// Code-indexed reverse table (code -> uppercase ASCII byte).
pub const CODE_TO_ASCII: [u8; 4] = [b'A', b'C', b'T', b'G'];

/// Number of bits used to store one code.
pub const CODE_WIDTH: u8 = 2;

impl Nucleotide {
    /// All nucleotides in code order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::C, Self::T, Self::G];

    /// Convert from a 2-bit code. Only the low two bits are inspected.
    #[inline(always)]
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b00 => Self::A,
            0b01 => Self::C,
            0b10 => Self::T,
            _ => Self::G,
        }
    }

    /// The 2-bit code for this nucleotide.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte, accepting both cases. Returns `None` for
    /// anything outside {A, C, T, G}.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'T' | b't' => Some(Self::T),
            b'G' | b'g' => Some(Self::G),
            _ => None,
        }
    }

    /// Uppercase ASCII byte for this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        CODE_TO_ASCII[self as usize]
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = CodecError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(CodecError::UnmappedSymbol { byte, position: 0 })
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.code()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Map every byte of `input` to its nucleotide, failing on the first byte
/// outside the alphabet.
pub fn parse_symbols(input: &[u8]) -> Result<Vec<Nucleotide>, CodecError> {
    input
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            Nucleotide::from_ascii(byte).ok_or(CodecError::UnmappedSymbol { byte, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_code_table() {
        assert_eq!(Nucleotide::A.code(), 0b00);
        assert_eq!(Nucleotide::C.code(), 0b01);
        assert_eq!(Nucleotide::T.code(), 0b10);
        assert_eq!(Nucleotide::G.code(), 0b11);
    }

    #[test]
    fn test_code_bijection() {
        for code in 0u8..4 {
            let nuc = Nucleotide::from_code(code);
            assert_eq!(nuc.code(), code);
            assert_eq!(Nucleotide::from_ascii(nuc.to_ascii()), Some(nuc));
        }

        let mut letters: Vec<u8> = Nucleotide::ALL.iter().map(|n| n.to_ascii()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 4, "Each code must map to a distinct symbol");
    }

    #[test]
    fn test_from_ascii_case_insensitive() {
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'U'), None);
        assert_eq!(Nucleotide::from_ascii(b'\n'), None);
        assert_eq!(Nucleotide::from_ascii(0), None);
    }

    #[test]
    fn test_to_char_is_uppercase() {
        let s: String = Nucleotide::ALL.iter().map(|&n| char::from(n)).collect();
        assert_eq!(s, "ACTG");
    }

    #[test]
    fn test_try_from_reports_byte() {
        assert_eq!(Nucleotide::try_from(b'g').unwrap(), Nucleotide::G);
        let err = Nucleotide::try_from(b'X').unwrap_err();
        assert!(matches!(err, CodecError::UnmappedSymbol { byte: b'X', .. }));
    }

    #[test]
    fn test_parse_symbols_position() {
        let parsed = parse_symbols(b"acGT").unwrap();
        assert_eq!(
            parsed,
            vec![Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T]
        );

        let err = parse_symbols(b"ACGNT").unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnmappedSymbol {
                byte: b'N',
                position: 3
            }
        ));
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
