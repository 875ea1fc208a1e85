//! Huffman tree construction and the decode tree.
//!
//! Both trees live in a flat arena (`Vec` of nodes addressed by index) and
//! are walked with explicit stacks, so depth never touches the call stack.
//!
//! # Tie-breaking
//!
//! The min-heap is ordered by `(weight, creation index)`. Leaves are created
//! in ascending symbol order, and every merged node takes the next index.
//! Of the two nodes popped per merge, the first becomes the `0` branch.
//! The resulting tree, and therefore every artifact, is fully determined by
//! the frequency table.

use crate::code::{Code, CodeTable};
use crate::frequency::FrequencyTable;
use oxipack_core::error::{OxiPackError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A node of the encode-side tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    /// A symbol with no children.
    Leaf { symbol: u8, weight: u64 },
    /// Exactly two children and no symbol.
    Internal {
        left: usize,
        right: usize,
        weight: u64,
    },
}

impl Node {
    fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }
}

/// A frequency-weighted binary prefix-code tree.
///
/// Ephemeral: exists for the duration of one encode only.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<Node> = freq
            .iter()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect();

        if nodes.is_empty() {
            return Err(OxiPackError::invalid_input(
                "cannot build a Huffman tree without symbols",
            ));
        }

        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| Reverse((node.weight(), index)))
            .collect();

        while heap.len() > 1 {
            let (Some(Reverse((w0, left))), Some(Reverse((w1, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };

            let weight = w0.saturating_add(w1);
            nodes.push(Node::Internal {
                left,
                right,
                weight,
            });
            heap.push(Reverse((weight, nodes.len() - 1)));
        }

        // The last node created is the root (or the lone leaf).
        let root = nodes.len() - 1;
        Ok(Self { nodes, root })
    }

    /// Check whether the tree is a single leaf (one distinct symbol).
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Weight of the root, i.e. the number of input bytes.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Assign `0`/`1` per branch in a depth-first walk from the root.
    ///
    /// A single-leaf tree gets the one-bit code `"0"`: an empty code would
    /// leave the decoder unable to make progress.
    pub fn codes(&self) -> CodeTable {
        let mut table = CodeTable::new();

        if let Node::Leaf { symbol, .. } = self.nodes[self.root] {
            table.insert(symbol, Code::empty().with(false));
            return table;
        }

        let mut stack = vec![(self.root, Code::empty())];
        while let Some((index, code)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf { symbol, .. } => {
                    table.insert(symbol, code);
                }
                Node::Internal { left, right, .. } => {
                    stack.push((right, code.with(true)));
                    stack.push((left, code.with(false)));
                }
            }
        }

        table
    }
}

/// Index of the root in a [`DecodeTree`].
pub const ROOT: usize = 0;

#[derive(Debug, Clone, Copy, Default)]
struct DecodeNode {
    children: [Option<usize>; 2],
    symbol: Option<u8>,
}

/// Decode-side tree rebuilt from a [`CodeTable`] by inserting one path per code.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    nodes: Vec<DecodeNode>,
}

impl DecodeTree {
    /// Rebuild the tree from `table`.
    ///
    /// Fails with `CorruptArchive` if the table is empty, holds an empty
    /// code, or is not prefix-free.
    pub fn from_table(table: &CodeTable) -> Result<Self> {
        if table.is_empty() {
            return Err(OxiPackError::corrupt_archive("code table is empty"));
        }

        let mut tree = Self {
            nodes: vec![DecodeNode::default()],
        };

        for (symbol, code) in table.iter() {
            tree.insert(symbol, code)?;
        }

        Ok(tree)
    }

    fn insert(&mut self, symbol: u8, code: &Code) -> Result<()> {
        if code.is_empty() {
            return Err(OxiPackError::corrupt_archive(format!(
                "symbol {} has an empty code",
                symbol
            )));
        }

        let mut node = ROOT;
        for bit in code.iter() {
            if self.nodes[node].symbol.is_some() {
                return Err(Self::conflict(symbol, code));
            }

            node = match self.nodes[node].children[bit as usize] {
                Some(child) => child,
                None => {
                    self.nodes.push(DecodeNode::default());
                    let child = self.nodes.len() - 1;
                    self.nodes[node].children[bit as usize] = Some(child);
                    child
                }
            };
        }

        let end = &mut self.nodes[node];
        if end.symbol.is_some() || end.children.iter().any(Option::is_some) {
            return Err(Self::conflict(symbol, code));
        }
        end.symbol = Some(symbol);

        Ok(())
    }

    fn conflict(symbol: u8, code: &Code) -> OxiPackError {
        OxiPackError::corrupt_archive(format!(
            "code {} for symbol {} collides with another code",
            code, symbol
        ))
    }

    /// Follow one branch from `node`, if it exists.
    #[inline]
    pub fn child(&self, node: usize, bit: bool) -> Option<usize> {
        self.nodes[node].children[bit as usize]
    }

    /// Symbol stored at `node`, if it is a leaf.
    #[inline]
    pub fn symbol(&self, node: usize) -> Option<u8> {
        self.nodes[node].symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_data(data).unwrap()).unwrap()
    }

    #[test]
    fn test_single_leaf_gets_one_bit_code() {
        let tree = tree_for(b"aaaa");
        assert!(tree.is_single_leaf());
        assert_eq!(tree.leaf_count(), 1);

        let codes = tree.codes();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
    }

    #[test]
    fn test_two_symbols() {
        // 'b' (weight 1) is popped first and becomes the 0 branch
        let codes = tree_for(b"aab").codes();
        assert_eq!(codes.get(b'b').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'a').unwrap().to_string(), "1");
    }

    #[test]
    fn test_tie_break_by_symbol() {
        // Equal weights: lower symbol is created first and wins the 0 branch
        let codes = tree_for(b"ba").codes();
        assert_eq!(codes.get(b'a').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'b').unwrap().to_string(), "1");
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let tree = tree_for(b"aaaaaaaabbbbccd");
        let codes = tree.codes();
        assert_eq!(tree.weight(), 15);

        let a = codes.get(b'a').unwrap().len();
        let b = codes.get(b'b').unwrap().len();
        let c = codes.get(b'c').unwrap().len();
        let d = codes.get(b'd').unwrap().len();
        assert!(a <= b && b <= c && c <= d);
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_skewed_tree_depth() {
        // Fibonacci weights produce the deepest possible tree
        let mut counts = [0u64; 256];
        let (mut x, mut y) = (1u64, 1u64);
        for slot in counts.iter_mut().take(40) {
            *slot = x;
            (x, y) = (y, x + y);
        }
        let tree = HuffmanTree::build(&FrequencyTable::from_counts(counts).unwrap()).unwrap();
        let codes = tree.codes();
        assert_eq!(codes.len(), 40);
        assert_eq!(codes.max_len(), 39);
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_all_symbols_balanced() {
        let data: Vec<u8> = (0..=255).collect();
        let codes = tree_for(&data).codes();
        assert_eq!(codes.len(), 256);
        assert!(codes.iter().all(|(_, c)| c.len() == 8));
    }

    #[test]
    fn test_decode_tree_walk() {
        let codes = tree_for(b"aaaaaaaabbbbccd").codes();
        let tree = DecodeTree::from_table(&codes).unwrap();

        for (symbol, code) in codes.iter() {
            let mut node = ROOT;
            for bit in code.iter() {
                assert_eq!(tree.symbol(node), None);
                node = tree.child(node, bit).unwrap();
            }
            assert_eq!(tree.symbol(node), Some(symbol));
        }
    }

    #[test]
    fn test_decode_tree_rejects_conflicts() {
        let mut table = CodeTable::new();
        table.insert(1, "0".parse().unwrap());
        table.insert(2, "01".parse().unwrap());
        assert!(DecodeTree::from_table(&table).is_err());

        let mut table = CodeTable::new();
        table.insert(1, "01".parse().unwrap());
        table.insert(2, "0".parse().unwrap());
        assert!(DecodeTree::from_table(&table).is_err());

        assert!(DecodeTree::from_table(&CodeTable::new()).is_err());
    }
}
