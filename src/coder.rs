use bitvec::prelude::*;
use log::{debug, trace, warn};
use std::hash::Hash;
use std::sync::Arc;

use crate::code::{self, CodeTable, ReverseCodeTable};
use crate::config::Config;
use crate::error::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::payload::EncodedPayload;
use crate::report::Report;
use crate::tree::Tree;

/// Everything derived from one non-empty encode. Immutable once built.
#[derive(Debug, Clone)]
pub struct Snapshot<Symbol> {
    frequencies: FrequencyTable<Symbol>,
    tree: Tree<Symbol>,
    codes: CodeTable<Symbol>,
    reverse: ReverseCodeTable<Symbol>,
    max_code_len: usize,
}

impl<Symbol> Snapshot<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    fn build(frequencies: FrequencyTable<Symbol>, config: &Config) -> Option<Self> {
        let tree = Tree::build(&frequencies)?;
        let (codes, reverse) = code::generate(Some(&tree), config.single_symbol_code());
        let max_code_len = tree.depth().max(1);

        Some(Self {
            frequencies,
            tree,
            codes,
            reverse,
            max_code_len,
        })
    }

    fn code_for(&self, symbol: &Symbol) -> &BitSlice {
        self.codes
            .get(symbol)
            .unwrap_or_else(|| panic!("symbol missing from code table"))
    }

    /// Encodes `symbols` with this snapshot's codes.
    ///
    /// # Panics
    ///
    /// Panics if a symbol has no code. Symbols taken from the text the
    /// snapshot was built from always have one.
    pub fn encode<'a>(&self, symbols: impl IntoIterator<Item = &'a Symbol>) -> EncodedPayload
    where
        Symbol: 'a,
    {
        let mut out = EncodedPayload::new();
        for s in symbols {
            out.extend_from_bitslice(self.code_for(s));
        }

        out
    }

    /// Decodes `input` bit by bit, emitting a symbol whenever the pending
    /// bits match a code exactly.
    ///
    /// Fails as soon as the pending bits outgrow the longest code, since no
    /// later bit can complete them.
    pub fn decode(&self, input: &BitSlice) -> Result<Vec<Symbol>, HuffmanError> {
        let mut out = Vec::new();

        let mut cursor = BitVec::with_capacity(self.max_code_len);
        for b in input.iter().by_vals() {
            cursor.push(b);
            if let Some(sym) = self.reverse.get(&cursor) {
                cursor.clear();
                out.push(sym.clone());
            } else if cursor.len() >= self.max_code_len {
                return Err(malformed(out.len(), cursor.len()));
            }
        }

        if !cursor.is_empty() {
            return Err(malformed(out.len(), cursor.len()));
        }

        Ok(out)
    }

    /// Length of the longest code in the table.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Bits needed to encode the text this snapshot was built from.
    pub fn encoded_bits(&self) -> usize {
        self.frequencies
            .iter()
            .map(|(s, count)| count * self.code_for(s).len())
            .sum()
    }
}

impl<Symbol> Snapshot<Symbol> {
    pub fn frequencies(&self) -> &FrequencyTable<Symbol> {
        &self.frequencies
    }

    pub fn tree(&self) -> &Tree<Symbol> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<Symbol> {
        &self.codes
    }

    pub fn reverse_codes(&self) -> &ReverseCodeTable<Symbol> {
        &self.reverse
    }
}

fn malformed(decoded: usize, pending_bits: usize) -> HuffmanError {
    warn!(
        "{} unresolved bit(s) after {} decoded symbol(s)",
        pending_bits, decoded
    );
    HuffmanError::MalformedPayload {
        decoded,
        pending_bits,
    }
}

/// Huffman coordinator.
///
/// Each [`encode`](Huffman::encode) replaces the current [`Snapshot`] in one
/// step; [`decode`](Huffman::decode) reads whichever snapshot is current.
#[derive(Debug, Clone)]
pub struct Huffman<Symbol> {
    config: Config,
    snapshot: Option<Arc<Snapshot<Symbol>>>,
}

impl<Symbol> Default for Huffman<Symbol> {
    fn default() -> Self {
        Self {
            config: Config::default(),
            snapshot: None,
        }
    }
}

impl<Symbol> Huffman<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            snapshot: None,
        }
    }

    /// Rebuilds all tables from `symbols` and returns their encoding.
    ///
    /// Empty input yields an empty payload and leaves no tables behind.
    pub fn encode(&mut self, symbols: impl IntoIterator<Item = Symbol>) -> EncodedPayload {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        let frequencies = FrequencyTable::from_symbols(symbols.iter().cloned());

        self.snapshot = Snapshot::build(frequencies, &self.config).map(Arc::new);
        let Some(snapshot) = &self.snapshot else {
            debug!("encoded empty input");
            return EncodedPayload::new();
        };

        trace!(
            "built {} codes, longest {} bit(s)",
            snapshot.codes.len(),
            snapshot.max_code_len
        );

        let payload = snapshot.encode(&symbols);
        debug!(
            "encoded {} symbol(s) ({} distinct) into {} bit(s)",
            symbols.len(),
            snapshot.frequencies.len(),
            payload.len()
        );

        payload
    }

    pub fn decode(&self, payload: &EncodedPayload) -> Result<Vec<Symbol>, HuffmanError> {
        let snapshot = self.snapshot.as_ref().ok_or(HuffmanError::NoTableAvailable)?;
        let out = snapshot.decode(payload.bits())?;
        debug!("decoded {} bit(s) into {} symbol(s)", payload.len(), out.len());
        Ok(out)
    }

    /// Statistics for the most recent encode.
    pub fn report(&self) -> Report<Symbol> {
        match &self.snapshot {
            Some(snapshot) => Report::from_snapshot(snapshot),
            None => Report::empty(),
        }
    }
}

impl<Symbol> Huffman<Symbol> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current code table, if a non-empty text has been encoded.
    pub fn codes(&self) -> Option<&CodeTable<Symbol>> {
        self.snapshot.as_deref().map(Snapshot::codes)
    }

    /// A handle to the current tables that stays valid across later encodes.
    pub fn snapshot(&self) -> Option<Arc<Snapshot<Symbol>>> {
        self.snapshot.clone()
    }

    /// Drops all tables, returning to the state of a fresh coordinator.
    pub fn reset(&mut self) {
        debug!("reset");
        self.snapshot = None;
    }
}

impl Huffman<char> {
    pub fn encode_str(&mut self, text: &str) -> EncodedPayload {
        self.encode(text.chars())
    }

    pub fn decode_to_string(&self, payload: &EncodedPayload) -> Result<String, HuffmanError> {
        self.decode(payload).map(|chars| chars.into_iter().collect())
    }

    /// Decodes a `'0'`/`'1'` bitstring.
    pub fn decode_str(&self, bits: &str) -> Result<String, HuffmanError> {
        let payload: EncodedPayload = bits.parse()?;
        self.decode_to_string(&payload)
    }
}
