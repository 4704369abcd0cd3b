use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

/// One node of a Huffman tree. Every node has either two kids or none.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Creation order, used to break weight ties.
    seq: usize,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    fn new(weight: u64, seq: usize, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol carried by a leaf. Internal nodes carry none.
    pub fn symbol(&self) -> Option<u8> {
        match self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Move one step down: left on a 0 bit, right on a 1 bit. None at a leaf.
    pub fn child(&self, bit: bool) -> Option<&Node> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some(if bit { &**right } else { &**left }),
            NodeData::Leaf(_) => None,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing creation order, so the
    /// lightest (and oldest, on a tie) node is at the end of a sorted vec.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of reading one code from a bit source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A full code was read and resolved to this symbol.
    Symbol(u8),
    /// The bits ran out before a leaf was reached.
    Exhausted,
}

/// A full binary tree of weighted symbols. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties are broken by creation order: leaves are created in ascending symbol
    /// order and each merged node is newer than everything before it. The first
    /// node removed becomes the left child. A table with a single symbol gets a
    /// synthetic root so that symbol still has a one bit code. Its zero weight right
    /// leaf carries the same symbol, so either bit value decodes to that symbol.
    pub fn construct(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffError::EmptyAlphabet);
        }

        // Turn the table into a forest of leaves
        let mut tree: Vec<Node> = table
            .iter()
            .enumerate()
            .map(|(seq, (sym, weight))| Node::new(weight, seq, NodeData::Leaf(sym)))
            .collect();
        let mut seq = tree.len();

        // A lone symbol needs at least one bit to move off the root, so wrap it
        // with a zero weight twin on the right. Both bits then lead to the symbol:
        // its code is 0, but a stray 1 also decodes to it.
        if tree.len() == 1 {
            let leaf = tree.pop().ok_or(HuffError::EmptyAlphabet)?;
            let twin = Node::new(0, seq + 1, leaf.node_data.clone());
            debug!("Single symbol alphabet, forcing a synthetic root");
            return Ok(Self {
                root: Node::new(leaf.weight, seq, NodeData::Kids(Box::new(leaf), Box::new(twin))),
            });
        }

        // ...then pare it down to one single node with child nodes - keep it sorted.
        while tree.len() > 1 {
            tree.sort_unstable();

            // Pull off the two lightest nodes and make a new parent
            let (Some(left), Some(right)) = (tree.pop(), tree.pop()) else {
                break;
            };
            trace!(
                "Merging weights {} and {} into node {}",
                left.weight,
                right.weight,
                seq
            );
            tree.push(Node::new(
                left.weight + right.weight,
                seq,
                NodeData::Kids(Box::new(left), Box::new(right)),
            ));
            seq += 1;
        }

        let root = tree.pop().ok_or(HuffError::EmptyAlphabet)?;
        let result = Self { root };
        debug!(
            "Built tree over {} symbols, depth {}, weight {}",
            table.len(),
            result.depth(),
            result.root.weight
        );
        Ok(result)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Read one code from bits, starting at the root. Returns Exhausted if the
    /// bits run out first (including when there are no bits at all).
    pub fn code_lookup<I>(&self, bits: &mut I) -> Lookup
    where
        I: Iterator<Item = bool>,
    {
        let mut node = &self.root;
        // The tree is full and the root always has kids, so every code is at least one bit
        loop {
            match &node.node_data {
                NodeData::Leaf(sym) => return Lookup::Symbol(*sym),
                NodeData::Kids(left, right) => match bits.next() {
                    Some(bit) => node = if bit { &**right } else { &**left },
                    None => return Lookup::Exhausted,
                },
            }
        }
    }

    /// Sum over all leaves of weight × depth, i.e. the encoded length in bits of
    /// the data this tree was built from.
    pub fn weighted_path_length(&self) -> u64 {
        fn walk(node: &Node, depth: u64) -> u64 {
            match &node.node_data {
                NodeData::Kids(left, right) => walk(left, depth + 1) + walk(right, depth + 1),
                NodeData::Leaf(_) => node.weight * depth,
            }
        }
        walk(&self.root, 0)
    }

    /// Length of the longest root to leaf path.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Kids(left, right) => 1 + walk(left).max(walk(right)),
                NodeData::Leaf(_) => 0,
            }
        }
        walk(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Kids(left, right) => walk(left) + walk(right),
                NodeData::Leaf(_) => 1,
            }
        }
        walk(&self.root)
    }
}

impl fmt::Display for HuffmanTree {
    /// Level order dump of the tree, one `weight symbol` line per node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut queue = VecDeque::from([(&self.root, 0_usize)]);
        let mut current_level = None;
        while let Some((node, level)) = queue.pop_front() {
            if current_level != Some(level) {
                current_level = Some(level);
                writeln!(f, "Level {}", level)?;
            }
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    writeln!(f, "{} *", node.weight)?;
                    queue.push_back((&**left, level + 1));
                    queue.push_back((&**right, level + 1));
                }
                NodeData::Leaf(sym) => {
                    writeln!(f, "{} {}", node.weight, (*sym as char).escape_default())?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, Lookup, Node, NodeData};
    use crate::error::HuffError;
    use crate::tools::freq_count::FrequencyTable;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    /// Reference optimal cost: the sum of all merged weights.
    fn optimal_cost(table: &FrequencyTable) -> u64 {
        let mut heap = table.iter().map(|(_, w)| Reverse(w)).collect::<BinaryHeap<_>>();
        let mut cost = 0;
        while heap.len() > 1 {
            let (Reverse(a), Reverse(b)) = (heap.pop().unwrap(), heap.pop().unwrap());
            cost += a + b;
            heap.push(Reverse(a + b));
        }
        cost
    }

    fn assert_full(node: &Node) {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(node.symbol(), None);
                assert_full(left);
                assert_full(right);
            }
            NodeData::Leaf(_) => assert!(node.child(false).is_none() && node.child(true).is_none()),
        }
    }

    #[test]
    fn abracadabra_test() {
        let table = FrequencyTable::build(b"abracadabra");
        let tree = HuffmanTree::construct(&table).unwrap();
        assert_eq!(tree.weighted_path_length(), 23);
        assert_eq!(tree.weighted_path_length(), optimal_cost(&table));
        // Fixed 3 bit codes would take 33 bits
        assert!(tree.weighted_path_length() <= 33);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.root().weight, 11);
        assert_full(tree.root());
    }

    #[test]
    fn empty_alphabet_test() {
        let table = FrequencyTable::build(b"");
        assert!(matches!(
            HuffmanTree::construct(&table),
            Err(HuffError::EmptyAlphabet)
        ));
    }

    #[test]
    fn single_symbol_test() {
        let table = FrequencyTable::build(b"aaaa");
        let tree = HuffmanTree::construct(&table).unwrap();
        assert!(!tree.root().is_leaf());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.weighted_path_length(), 4);
        assert_eq!(tree.root().weight, 4);
        assert_eq!(tree.root().child(false).and_then(|n| n.symbol()), Some(b'a'));
        assert_eq!(tree.root().child(true).and_then(|n| n.symbol()), Some(b'a'));
        assert_eq!(tree.root().child(true).map(|n| n.weight), Some(0));
        assert_full(tree.root());

        // Either bit value reads back as the symbol
        let mut bits = vec![false, true].into_iter();
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Symbol(b'a'));
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Symbol(b'a'));
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Exhausted);
    }

    #[test]
    fn deterministic_test() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::build(data);
        let first = HuffmanTree::construct(&table).unwrap();
        let second = HuffmanTree::construct(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn tie_break_test() {
        // All weights equal: the two lowest symbols are merged first, left to right
        let table = FrequencyTable::from_counts(vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
        let tree = HuffmanTree::construct(&table).unwrap();
        let root = tree.root();
        assert_eq!(root.child(false).and_then(|n| n.symbol()), Some(b'c'));
        let inner = root.child(true).unwrap();
        assert_eq!(inner.child(false).and_then(|n| n.symbol()), Some(b'a'));
        assert_eq!(inner.child(true).and_then(|n| n.symbol()), Some(b'b'));
    }

    #[test]
    fn optimal_test() {
        // Fibonacci weights make the deepest possible tree
        let fib = [1_u64, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        let table =
            FrequencyTable::from_counts(fib.iter().enumerate().map(|(i, &w)| (i as u8, w)));
        let tree = HuffmanTree::construct(&table).unwrap();
        assert_eq!(tree.weighted_path_length(), optimal_cost(&table));
        assert_eq!(tree.depth(), 9);

        let mut state = 0x2545_f491_u32;
        let data = (0..5000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state % 40) as u8 * (state % 3) as u8
            })
            .collect::<Vec<u8>>();
        let table = FrequencyTable::build(&data);
        let tree = HuffmanTree::construct(&table).unwrap();
        assert_eq!(tree.weighted_path_length(), optimal_cost(&table));
        assert_full(tree.root());
    }

    #[test]
    fn code_lookup_test() {
        let table = FrequencyTable::from_counts(vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
        let tree = HuffmanTree::construct(&table).unwrap();
        // c = 0, a = 10, b = 11
        let mut bits = vec![true, true, false, true, false, true].into_iter();
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Symbol(b'b'));
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Symbol(b'c'));
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Symbol(b'a'));
        // A lone 1 bit is half a code
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Exhausted);
        assert_eq!(tree.code_lookup(&mut bits), Lookup::Exhausted);
    }

    #[test]
    fn display_test() {
        let tree = HuffmanTree::construct(&FrequencyTable::build(b"aab")).unwrap();
        let dump = tree.to_string();
        assert_eq!(dump, "Level 0\n3 *\nLevel 1\n1 b\n2 a\n");
    }
}
