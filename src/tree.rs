use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: Box<Node<Symbol>>,
        right: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    fn leaf(symbol: Symbol, frequency: usize) -> Self {
        Node::Leaf { symbol, frequency }
    }

    fn from_children(left: Node<Symbol>, right: Node<Symbol>) -> Self {
        Node::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn frequency(&self) -> usize {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Queue entry. Ordered by frequency, then by the order nodes entered the queue.
#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending<Symbol> {
    frequency: usize,
    sequence: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<Symbol> {
    root: Node<Symbol>,
}

impl<Symbol> Tree<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    /// Builds the Huffman tree for `freq`, or `None` if the table is empty.
    ///
    /// Leaves enter the queue in first-appearance order and every merged node
    /// is queued after all existing entries, so equal frequencies are always
    /// resolved the same way. The first node removed becomes the left child.
    pub fn build(freq: &FrequencyTable<Symbol>) -> Option<Self> {
        let mut sequence = 0;
        let mut pq: BinaryHeap<_> = freq
            .iter()
            .map(|(s, count)| {
                let entry = Pending {
                    frequency: count,
                    sequence,
                    node: Node::leaf(s.clone(), count),
                };
                sequence += 1;
                Reverse(entry)
            })
            .collect();

        while pq.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (pq.pop(), pq.pop()) else {
                unreachable!("queue holds at least two nodes");
            };

            let node = Node::from_children(left.node, right.node);
            pq.push(Reverse(Pending {
                frequency: node.frequency(),
                sequence,
                node,
            }));
            sequence += 1;
        }

        pq.pop().map(|Reverse(p)| Tree { root: p.node })
    }
}

impl<Symbol> Tree<Symbol> {
    pub fn root(&self) -> &Node<Symbol> {
        &self.root
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(text: &str) -> Option<Tree<char>> {
        Tree::build(&FrequencyTable::from_symbols(text.chars()))
    }

    #[test]
    fn node_from_children() {
        let left = Node::leaf('a', 2);
        let right = Node::leaf('b', 3);

        let n = Node::from_children(left.clone(), right.clone());

        assert_eq!(n.frequency(), 5);
        assert!(!n.is_leaf());
        assert_eq!(
            n,
            Node::Internal {
                frequency: 5,
                left: Box::new(left),
                right: Box::new(right),
            }
        );
    }

    #[test]
    fn pending_compares_frequency_then_sequence() {
        let a = Pending { frequency: 1, sequence: 7, node: Node::leaf('a', 1) };
        let b = Pending { frequency: 2, sequence: 0, node: Node::leaf('b', 2) };
        let c = Pending { frequency: 1, sequence: 3, node: Node::leaf('c', 1) };

        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert_eq!(tree(""), None);
    }

    #[test]
    fn single_symbol_is_a_bare_leaf() {
        let t = tree("aaaa").unwrap();
        assert_eq!(t.root(), &Node::leaf('a', 4));
        assert_eq!(t.depth(), 0);
    }

    #[test]
    fn root_frequency_is_input_length() {
        let text = "mississippi river";
        let t = tree(text).unwrap();
        assert_eq!(t.root().frequency(), text.chars().count());
    }

    #[test]
    fn lowest_frequency_goes_left() {
        let t = tree("aab").unwrap();
        match t.root() {
            Node::Internal { frequency, left, right } => {
                assert_eq!(*frequency, 3);
                assert_eq!(**left, Node::leaf('b', 1));
                assert_eq!(**right, Node::leaf('a', 2));
            }
            leaf => panic!("expected internal root, got {:?}", leaf),
        }
    }

    #[test]
    fn ties_resolve_by_first_appearance() {
        let t = tree("xy").unwrap();
        match t.root() {
            Node::Internal { left, right, .. } => {
                assert_eq!(**left, Node::leaf('x', 1));
                assert_eq!(**right, Node::leaf('y', 1));
            }
            leaf => panic!("expected internal root, got {:?}", leaf),
        }
    }
}
