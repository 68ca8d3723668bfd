//! Sentinel trie.
//!
//! A [`Trie`] is built once from a fixed set of candidate strings and is
//! immutable afterwards. Each candidate ends on a *terminal* node that carries
//! the value bound to that candidate; all values in one trie share the type
//! `T`.
//!
//! ```text
//! candidates: "NA" "NULL" "N"
//!
//! (root)
//!   └─ 'N'*            * = terminal
//!        ├─ 'A'*
//!        └─ 'U'
//!             └─ 'L'
//!                  └─ 'L'*
//! ```
//!
//! Two matchers walk the same node arena:
//!
//! - `stream_match.rs`: greedy longest match against a [`ByteStream`], falling
//!   back one level to the deepest terminal node when extension fails, and
//!   rolling the stream back to where it started when nothing matches.
//! - `exact.rs`: whole-buffer match against an in-memory slice, no fallback.
//!
//! Construction lives in `build.rs`.
//!
//! ## Invariants
//!
//! - Node `0` is the root; its label and value are unused.
//! - Siblings never share a label.
//! - Every non-root node without children is terminal (empty candidates are
//!   skipped, so the root is never terminal).
//!
//! [`ByteStream`]: crate::ByteStream

#[path = "trie/build.rs"]
mod build;
#[path = "trie/exact.rs"]
mod exact;
#[path = "trie/stream_match.rs"]
mod stream_match;

#[cfg(test)]
#[path = "trie/tests.rs"]
mod tests;

pub use stream_match::{MatchOptions, StreamMatch};

/// Index of a node in the trie arena.
pub(crate) type NodeId = usize;

pub(crate) const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub label: u8,
    pub terminal: bool,
    pub value: Option<T>,
    pub children: Vec<NodeId>,
}

impl<T> Node<T> {
    fn new(label: u8) -> Self {
        Node { label, terminal: false, value: None, children: Vec::new() }
    }
}

/// Immutable byte trie mapping candidate strings to values of type `T`.
#[derive(Debug, Clone)]
pub struct Trie<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Trie<T> {
    /// True when the root has no children, i.e. the trie stands for the
    /// empty-string sentinel.
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    /// Number of distinct candidate strings.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.terminal).count()
    }

    /// Length in bytes of the longest candidate.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, d)) = stack.pop() {
            deepest = deepest.max(d);
            stack.extend(self.nodes[id].children.iter().map(|&c| (c, d + 1)));
        }
        deepest
    }

    /// Find the child of `parent` labelled `b`.
    ///
    /// With `ignore_case`, ASCII letters are compared after lowercasing both
    /// sides; no other folding is done.
    pub(crate) fn child(&self, parent: NodeId, b: u8, ignore_case: bool) -> Option<NodeId> {
        let children = &self.nodes[parent].children;
        if ignore_case {
            let folded = b.to_ascii_lowercase();
            children.iter().copied().find(|&c| self.nodes[c].label.to_ascii_lowercase() == folded)
        } else {
            children.iter().copied().find(|&c| self.nodes[c].label == b)
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }
}
