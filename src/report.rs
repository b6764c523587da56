use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

use crate::coder::Snapshot;
use crate::payload::bits_to_string;

/// Bits per symbol of the uncompressed text the ratio is measured against.
pub const ORIGINAL_BITS_PER_SYMBOL: usize = 8;

/// Summary of one encode, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report<Symbol> {
    pub symbols: usize,
    pub distinct_symbols: usize,
    pub encoded_bits: usize,
    pub original_bits: usize,
    /// `(1 - encoded_bits / original_bits) * 100`, or 0 for empty input.
    pub ratio_percent: f64,
    /// `(symbol, code)` pairs, shortest code first.
    pub codes: Vec<(Symbol, String)>,
}

impl<Symbol> Report<Symbol> {
    pub fn empty() -> Self {
        Self {
            symbols: 0,
            distinct_symbols: 0,
            encoded_bits: 0,
            original_bits: 0,
            ratio_percent: 0.0,
            codes: Vec::new(),
        }
    }
}

impl<Symbol> Report<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn from_snapshot(snapshot: &Snapshot<Symbol>) -> Self {
        let symbols = snapshot.frequencies().total();
        let encoded_bits = snapshot.encoded_bits();
        let original_bits = symbols * ORIGINAL_BITS_PER_SYMBOL;

        let codes = snapshot
            .codes()
            .iter()
            .map(|(s, bits)| (s.clone(), bits_to_string(bits)))
            .collect();

        Self {
            symbols,
            distinct_symbols: snapshot.frequencies().len(),
            encoded_bits,
            original_bits,
            ratio_percent: ratio(encoded_bits, original_bits),
            codes,
        }
    }
}

fn ratio(encoded_bits: usize, original_bits: usize) -> f64 {
    if original_bits == 0 {
        return 0.0;
    }
    (1.0 - encoded_bits as f64 / original_bits as f64) * 100.0
}

impl<Symbol: fmt::Debug> fmt::Display for Report<Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman Codes:")?;
        for (s, code) in &self.codes {
            writeln!(f, "  {:?}: {}", s, code)?;
        }
        writeln!(
            f,
            "Symbols: {} ({} distinct)",
            self.symbols, self.distinct_symbols
        )?;
        writeln!(
            f,
            "Bits: {} encoded / {} original",
            self.encoded_bits, self.original_bits
        )?;
        write!(f, "Compression Ratio: {:.2}%", self.ratio_percent)
    }
}
