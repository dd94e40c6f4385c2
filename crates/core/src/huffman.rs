//! Minimum-redundancy (Huffman) prefix coding.
//!
//! The simulation keeps an append-only text log of trades and, on
//! demand, asks this module how small that log would be under an
//! optimal prefix code. The coder builds a fresh tree per call from
//! the symbol frequencies of the input, assigns root-to-leaf codes,
//! and reports the encoded bit string alongside the code table.
//!
//! The bit string is left unpacked (a `String` of `'0'`/`'1'`):
//! packing into bytes, if a caller ever wants it, is the caller's
//! concern. Size accounting still uses whole bytes
//! (`ceil(bit_length / 8)`).
//!
//! # Determinism
//!
//! Equal frequencies are tied by insertion order: leaves enter the
//! queue in ascending character order and merged nodes take the next
//! sequence number, so the same input always yields the same code
//! table on every run and platform.

use crate::error::{HuffmanError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

/// Mapping from symbol to its binary code (a string over '0'/'1').
///
/// Invariant: no code is a prefix of another. This is structural —
/// codes are only ever assigned at leaves of a binary tree.
pub type CodeTable = HashMap<char, String>;

/// Count the occurrences of each distinct character in `text`.
///
/// The map iterates in ascending character order, which fixes the
/// order leaves enter the build queue.
pub fn frequencies(text: &str) -> BTreeMap<char, u64> {
    let mut freqs = BTreeMap::new();
    for ch in text.chars() {
        *freqs.entry(ch).or_insert(0) += 1;
    }
    freqs
}

/// A node of the (private) code tree.
///
/// Leaves hold a symbol; internal nodes hold only their children.
/// Weights live in the queue wrapper, not the tree: once the tree is
/// built they are no longer needed.
#[derive(Debug)]
enum Node {
    Leaf(char),
    Internal { left: Box<Node>, right: Box<Node> },
}

/// Queue wrapper ordering nodes by `(weight, seq)`.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// lightest node first. `seq` is the insertion sequence number and
/// breaks frequency ties deterministically.
#[derive(Debug)]
struct QueuedNode {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for a min-heap (lighter node = higher priority)
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// The result of compressing one text.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Encoded bit string, one '0'/'1' per bit, unpacked
    bits: String,

    /// Symbol-to-code table used to produce `bits`
    codes: CodeTable,

    /// UTF-8 byte length of the original text
    original_bytes: usize,
}

impl Compressed {
    /// The encoded bit string.
    pub fn bits(&self) -> &str {
        &self.bits
    }

    /// The code table that produced the bit string.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Number of bits in the encoded stream.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Encoded size in whole bytes: `ceil(bit_len / 8)`.
    pub fn compressed_bytes(&self) -> usize {
        (self.bits.len() + 7) / 8
    }

    /// Byte length of the original (decompressed) text.
    pub fn original_bytes(&self) -> usize {
        self.original_bytes
    }

    /// Compressed-to-original size ratio.
    pub fn ratio(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            self.compressed_bytes() as f64 / self.original_bytes as f64
        }
    }
}

/// Build a prefix code for `text` and encode it.
///
/// # Errors
/// [`HuffmanError::EmptyInput`] if `text` has no characters.
pub fn compress(text: &str) -> Result<Compressed> {
    let freqs = frequencies(text);
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }

    let tree = build_tree(&freqs);

    let mut codes = CodeTable::new();
    assign_codes(&tree, &mut String::new(), &mut codes);

    let mut bits = String::new();
    for ch in text.chars() {
        let code = codes
            .get(&ch)
            .ok_or(HuffmanError::UnknownSymbol { symbol: ch })?;
        bits.push_str(code);
    }

    Ok(Compressed {
        bits,
        codes,
        original_bytes: text.len(),
    })
}

/// Decode a bit string against a code table.
///
/// Rebuilds the code trie from the table and walks the bits, emitting
/// a symbol at each leaf. The encoded stream must end exactly on a
/// codeword boundary.
///
/// # Errors
/// - [`HuffmanError::MalformedCode`] if a table entry contains a
///   character other than '0'/'1'
/// - [`HuffmanError::InvalidCode`] if the stream walks off the trie
///   (including non-bit characters in the stream)
/// - [`HuffmanError::TruncatedStream`] if the stream ends mid-codeword
pub fn decode(bits: &str, codes: &CodeTable) -> Result<String> {
    let root = build_trie(codes)?;

    let mut out = String::new();
    let mut node = &root;
    let mut pending = 0usize;

    for (position, bit) in bits.chars().enumerate() {
        let next = match bit {
            '0' => node.zero.as_deref(),
            '1' => node.one.as_deref(),
            _ => None,
        };

        node = next.ok_or(HuffmanError::InvalidCode { position })?;
        pending += 1;

        if let Some(symbol) = node.symbol {
            out.push(symbol);
            node = &root;
            pending = 0;
        }
    }

    if pending != 0 {
        return Err(HuffmanError::TruncatedStream {
            position: bits.len(),
        }
        .into());
    }

    Ok(out)
}

/// Merge the two lightest nodes until one root remains.
///
/// Caller guarantees `freqs` is non-empty.
fn build_tree(freqs: &BTreeMap<char, u64>) -> Node {
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    let mut seq = 0u64;

    for (&ch, &weight) in freqs {
        heap.push(QueuedNode {
            weight,
            seq,
            node: Node::Leaf(ch),
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let lighter = heap.pop().unwrap();
        let heavier = heap.pop().unwrap();

        heap.push(QueuedNode {
            weight: lighter.weight + heavier.weight,
            seq,
            node: Node::Internal {
                left: Box::new(lighter.node),
                right: Box::new(heavier.node),
            },
        });
        seq += 1;
    }

    heap.pop().unwrap().node
}

/// Walk the tree, accumulating '0' per left edge and '1' per right
/// edge, and record the accumulated path at each leaf.
///
/// A root that is itself a leaf (single distinct symbol) gets the
/// explicit one-bit code "0": an empty code could not distinguish
/// occurrences.
fn assign_codes(node: &Node, prefix: &mut String, codes: &mut CodeTable) {
    match node {
        Node::Leaf(ch) => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix.clone()
            };
            codes.insert(*ch, code);
        }
        Node::Internal { left, right } => {
            prefix.push('0');
            assign_codes(left, prefix, codes);
            prefix.pop();

            prefix.push('1');
            assign_codes(right, prefix, codes);
            prefix.pop();
        }
    }
}

/// Decoding trie node rebuilt from a code table.
#[derive(Debug, Default)]
struct TrieNode {
    symbol: Option<char>,
    zero: Option<Box<TrieNode>>,
    one: Option<Box<TrieNode>>,
}

fn build_trie(codes: &CodeTable) -> Result<TrieNode> {
    let mut root = TrieNode::default();

    for (&symbol, code) in codes {
        let mut node = &mut root;
        for bit in code.chars() {
            node = match bit {
                '0' => node.zero.get_or_insert_with(Default::default),
                '1' => node.one.get_or_insert_with(Default::default),
                _ => {
                    return Err(HuffmanError::MalformedCode {
                        symbol,
                        code: code.clone(),
                    }
                    .into())
                }
            };
        }
        node.symbol = Some(symbol);
    }

    Ok(root)
}
