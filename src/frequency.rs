use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of each distinct symbol, in order of first appearance.
#[derive(Debug, Clone)]
pub struct FrequencyTable<Symbol> {
    counts: Vec<(Symbol, usize)>,
    index: HashMap<Symbol, usize>,
}

impl<Symbol> FrequencyTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut counts: Vec<(Symbol, usize)> = Vec::new();
        let mut index: HashMap<Symbol, usize> = HashMap::new();

        for s in symbols {
            match index.get(&s) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(s.clone(), counts.len());
                    counts.push((s, 1));
                }
            }
        }

        Self { counts, index }
    }

    pub fn get(&self, symbol: &Symbol) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.counts[i].1)
    }
}

impl<Symbol> FrequencyTable<Symbol> {
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, usize)> {
        self.counts.iter().map(|(s, c)| (s, *c))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analysed input.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_symbols() {
        let f = FrequencyTable::from_symbols("abracadabra".chars());
        assert_eq!(f.get(&'a'), Some(5));
        assert_eq!(f.get(&'b'), Some(2));
        assert_eq!(f.get(&'r'), Some(2));
        assert_eq!(f.get(&'c'), Some(1));
        assert_eq!(f.get(&'d'), Some(1));
        assert_eq!(f.get(&'z'), None);
        assert_eq!(f.len(), 5);
    }

    #[test]
    fn first_appearance_order() {
        let f = FrequencyTable::from_symbols("cabbac".chars());
        let order: Vec<_> = f.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn total_matches_input_length() {
        let text = "the quick brown fox jumps over the lazy dog";
        let f = FrequencyTable::from_symbols(text.chars());
        assert_eq!(f.total(), text.chars().count());
    }

    #[test]
    fn empty_input() {
        let f = FrequencyTable::from_symbols(Vec::<u8>::new());
        assert!(f.is_empty());
        assert_eq!(f.total(), 0);
    }
}
