use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::error::HuffmanError;

/// Concatenated codes of an encoded text.
///
/// Displays as, and parses from, a string of `'0'` and `'1'` digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedPayload {
    bits: BitVec,
}

impl EncodedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend_from_bitslice(&mut self, bits: &BitSlice) {
        self.bits.extend_from_bitslice(bits);
    }

    pub fn bits(&self) -> &BitSlice {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn into_bitvec(self) -> BitVec {
        self.bits
    }
}

impl From<BitVec> for EncodedPayload {
    fn from(bits: BitVec) -> Self {
        Self { bits }
    }
}

impl From<&BitSlice> for EncodedPayload {
    fn from(bits: &BitSlice) -> Self {
        Self { bits: bits.to_bitvec() }
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.bits)
    }
}

impl FromStr for EncodedPayload {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (index, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(HuffmanError::InvalidDigit { index, found }),
            }
        }

        Ok(Self { bits })
    }
}

pub(crate) fn bits_to_string(bits: &BitSlice) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

pub(crate) fn write_bits(w: &mut impl fmt::Write, bits: &BitSlice) -> fmt::Result {
    for b in bits.iter().by_vals() {
        w.write_char(if b { '1' } else { '0' })?;
    }
    Ok(())
}
