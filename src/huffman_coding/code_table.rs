//! This helper derives the per-symbol bit codes from a built Huffman tree.
//!
//! The path from the root to each leaf is that leaf's code: a 0 for every step to the
//! left, a 1 for every step to the right. Because codes are exactly the leaves of a full
//! binary tree, no code is a prefix of another.

use log::trace;
use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, Node, NodeData};
use crate::bitstream::BitSequence;
use crate::tools::freq_count::FrequencyTable;

/// Map from symbol to its prefix code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: FxHashMap<u8, BitSequence>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut codes = FxHashMap::default();
        let mut path = BitSequence::new();
        return_leaves(tree.root(), &mut path, &mut codes);
        trace!("Derived {} codes", codes.len());
        Self { codes }
    }

    /// The code for symbol, if it has one.
    pub fn get(&self, symbol: u8) -> Option<&[bool]> {
        self.codes.get(&symbol).map(|code| code.as_slice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn sorted(&self) -> Vec<(u8, &[bool])> {
        let mut pairs = self
            .codes
            .iter()
            .map(|(&sym, code)| (sym, code.as_slice()))
            .collect::<Vec<_>>();
        pairs.sort_unstable_by_key(|&(sym, _)| sym);
        pairs
    }

    /// Total bits needed to encode data with these frequencies, or None if some
    /// symbol in the table has no code.
    pub fn encoded_len(&self, table: &FrequencyTable) -> Option<u64> {
        table.iter().try_fold(0_u64, |acc, (sym, count)| {
            self.get(sym).map(|code| acc + count * code.len() as u64)
        })
    }
}

/// Recursively walk the tree, left before right, pushing each leaf's path into codes.
/// The first code seen for a symbol is kept.
fn return_leaves(node: &Node, path: &mut BitSequence, codes: &mut FxHashMap<u8, BitSequence>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push(false);
            return_leaves(left, path, codes);
            path.pop();
            path.push(true);
            return_leaves(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            codes.entry(*sym).or_insert_with(|| path.clone());
        }
    }
}
