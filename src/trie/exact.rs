//! Buffer matcher.
//!
//! The strict sibling of the stream matcher, for candidates that are already
//! fully in memory: the whole buffer must spell one candidate. There is no
//! fallback to a shorter candidate and nothing to roll back.
//!
//! The empty trie matches only the empty buffer. This differs on purpose from
//! the stream matcher, where the empty trie matches anywhere.

use super::{NodeId, ROOT, Trie};

impl<T> Trie<T> {
    /// True when `buf` is exactly one of the candidates.
    pub fn matches_exactly(&self, buf: &[u8]) -> bool {
        if self.is_empty() {
            return buf.is_empty();
        }
        self.exact_node(buf).is_some()
    }

    /// Value bound to the candidate spelled by `buf`, if any.
    pub fn lookup_exact(&self, buf: &[u8]) -> Option<&T> {
        self.node(self.exact_node(buf)?).value.as_ref()
    }

    fn exact_node(&self, buf: &[u8]) -> Option<NodeId> {
        let mut current = ROOT;
        for (i, &b) in buf.iter().enumerate() {
            current = self.child(current, b, false)?;
            if self.node(current).children.is_empty() {
                return (i + 1 == buf.len()).then_some(current);
            }
        }
        self.node(current).terminal.then_some(current)
    }
}
