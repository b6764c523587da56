use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::payload::{bits_to_string, write_bits};
use crate::tree::{Node, Tree};

/// Symbol to code mapping used for encoding.
#[derive(Debug, Clone)]
pub struct CodeTable<Symbol> {
    encode_table: HashMap<Symbol, BitBox>,
}

/// Code to symbol mapping used for decoding; the exact inverse of a [`CodeTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseCodeTable<Symbol> {
    decode_table: HashMap<BitVec, Symbol>,
}

/// Walks `tree` and assigns each leaf its root-to-leaf path, left = 0 and
/// right = 1. A tree that is a single leaf gets the one-bit code
/// `single_symbol_bit`.
pub fn generate<Symbol>(
    tree: Option<&Tree<Symbol>>,
    single_symbol_bit: bool,
) -> (CodeTable<Symbol>, ReverseCodeTable<Symbol>)
where
    Symbol: Eq + Hash + Clone,
{
    fn traverse<Symbol: Clone>(
        node: &Node<Symbol>,
        v: &mut BitVec,
        dec: &mut HashMap<BitVec, Symbol>,
    ) {
        match node {
            Node::Leaf { symbol, .. } => {
                dec.insert(v.clone(), symbol.clone());
            }
            Node::Internal { left, right, .. } => {
                v.push(false);
                traverse(left, v, dec);
                v.pop();

                v.push(true);
                traverse(right, v, dec);
                v.pop();
            }
        }
    }

    let mut dec = HashMap::new();
    if let Some(tree) = tree {
        let mut bv = BitVec::new();
        if tree.root().is_leaf() {
            bv.push(single_symbol_bit);
        }
        traverse(tree.root(), &mut bv, &mut dec);
    }

    let enc = dec
        .iter()
        .map(|(k, v)| (v.clone(), k.clone().into_boxed_bitslice()))
        .collect();

    (
        CodeTable { encode_table: enc },
        ReverseCodeTable { decode_table: dec },
    )
}

impl<Symbol> CodeTable<Symbol>
where
    Symbol: Eq + Hash,
{
    pub fn get(&self, symbol: &Symbol) -> Option<&BitSlice> {
        self.encode_table.get(symbol).map(|b| b.as_bitslice())
    }

    /// The code for `symbol` as a string of `'0'`/`'1'` digits.
    pub fn code_string(&self, symbol: &Symbol) -> Option<String> {
        self.get(symbol).map(bits_to_string)
    }

    /// Entries ordered by code length, then by code value.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice)> {
        let mut entries: Vec<_> = self
            .encode_table
            .iter()
            .map(|(s, b)| (s, b.as_bitslice()))
            .collect();
        entries.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(b.1)));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.encode_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode_table.is_empty()
    }
}

impl<Symbol> fmt::Display for CodeTable<Symbol>
where
    Symbol: Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (s, bits)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: ", s)?;
            write_bits(f, bits)?;
        }
        f.write_str("}")
    }
}

impl<Symbol> ReverseCodeTable<Symbol> {
    pub fn get(&self, code: &BitSlice) -> Option<&Symbol> {
        self.decode_table.get(code)
    }

    pub fn len(&self) -> usize {
        self.decode_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decode_table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn tables(text: &str) -> (CodeTable<char>, ReverseCodeTable<char>) {
        let tree = Tree::build(&FrequencyTable::from_symbols(text.chars()));
        generate(tree.as_ref(), false)
    }

    #[test]
    fn aab_codes() {
        let (enc, dec) = tables("aab");
        assert_eq!(enc.code_string(&'b').as_deref(), Some("0"));
        assert_eq!(enc.code_string(&'a').as_deref(), Some("1"));
        assert_eq!(dec.get(bits![0]), Some(&'b'));
        assert_eq!(dec.get(bits![1]), Some(&'a'));
        assert_eq!(enc.to_string(), "{'b': 0, 'a': 1}");
    }

    #[test]
    fn codes_are_prefix_free() {
        let (enc, _) = tables("she sells sea shells by the sea shore, 12345!");
        let codes: Vec<_> = enc.iter().map(|(_, b)| b).collect();

        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(*a), "{:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn reverse_is_inverse() {
        let (enc, dec) = tables("hello, world");
        assert_eq!(enc.len(), dec.len());
        for (s, bits) in enc.iter() {
            assert_eq!(dec.get(bits), Some(s));
        }
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let (enc, dec) = tables("aaaa");
        assert_eq!(enc.code_string(&'a').as_deref(), Some("0"));
        assert_eq!(dec.get(bits![0]), Some(&'a'));

        let tree = Tree::build(&FrequencyTable::from_symbols("zz".chars()));
        let (enc, _) = generate(tree.as_ref(), true);
        assert_eq!(enc.code_string(&'z').as_deref(), Some("1"));
    }

    #[test]
    fn code_string_spells_multi_bit_codes() {
        let (enc, _) = tables("abcabcaab");
        assert_eq!(enc.code_string(&'a').as_deref(), Some("0"));
        assert_eq!(enc.code_string(&'c').as_deref(), Some("10"));
        assert_eq!(enc.code_string(&'b').as_deref(), Some("11"));
        assert_eq!(enc.code_string(&'z'), None);
    }

    #[test]
    fn no_tree_gives_empty_tables() {
        let (enc, dec) = generate::<char>(None, false);
        assert!(enc.is_empty());
        assert!(dec.is_empty());
        assert_eq!(enc.to_string(), "{}");
    }

    #[test]
    fn iter_orders_short_codes_first() {
        let (enc, _) = tables("aaaaaaaabbbbccd");
        let lens: Vec<_> = enc.iter().map(|(_, b)| b.len()).collect();
        let mut sorted = lens.clone();
        sorted.sort();
        assert_eq!(lens, sorted);
        assert_eq!(enc.iter().next().map(|(s, _)| *s), Some('a'));
    }
}
