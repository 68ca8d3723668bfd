//! Trie construction.
//!
//! All three constructors funnel into [`Trie::insert`], which walks the path
//! for one candidate from the root, reusing an existing child when one owns
//! the next byte and appending a new node otherwise. Insertion is private: once
//! a constructor returns, the trie is frozen.
//!
//! Empty candidates contribute no path. They do not make the root terminal;
//! a trie whose candidates are all empty is simply a trie with no children,
//! which the stream matcher treats as the empty-string sentinel.

use super::{Node, NodeId, ROOT, Trie};

impl Trie<()> {
    /// Build a trie with no payload, for pure membership tests (sentinels,
    /// delimiters).
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Trie::with_value(candidates, ())
    }
}

impl<T> Trie<T> {
    /// Build a trie where every candidate maps to a clone of `value`.
    pub fn with_value<I, S>(candidates: I, value: T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
        T: Clone,
    {
        Trie::from_pairs(candidates.into_iter().map(|s| (s, value.clone())))
    }

    /// Build a trie from `(candidate, value)` pairs.
    ///
    /// The value type is fixed by `T` for the whole trie, so a pair whose value
    /// does not fit is a compile error rather than a match-time surprise. When
    /// a candidate repeats, the later value wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<[u8]>,
    {
        let mut trie = Trie { nodes: vec![Node::new(0)] };
        for (candidate, value) in pairs {
            trie.insert(candidate.as_ref(), value);
        }
        trie
    }

    fn insert(&mut self, candidate: &[u8], value: T) {
        if candidate.is_empty() {
            return;
        }

        let mut current: NodeId = ROOT;
        for &b in candidate {
            current = match self.child(current, b, false) {
                Some(existing) => existing,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::new(b));
                    self.nodes[current].children.push(id);
                    id
                }
            };
        }

        let end = &mut self.nodes[current];
        end.terminal = true;
        end.value = Some(value);
    }
}

impl<S: AsRef<[u8]>, T> FromIterator<(S, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Trie::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = Trie::new(["NA", "NULL", "N"]);

        // root, N, A, U, L, L
        assert_eq!(trie.nodes.len(), 6);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.depth(), 4);

        let n = trie.child(ROOT, b'N', false).unwrap();
        assert!(trie.node(n).terminal);
        assert_eq!(trie.node(n).children.len(), 2);
    }

    #[test]
    fn empty_candidates_are_skipped() {
        let trie = Trie::new([""]);
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(!trie.node(ROOT).terminal);

        let mixed = Trie::new(["", "x"]);
        assert!(!mixed.is_empty());
        assert!(!mixed.node(ROOT).terminal);
    }

    #[test]
    fn later_duplicate_overwrites_value_only_at_its_node() {
        let trie: Trie<i32> = vec![("ab", 1), ("abc", 2), ("ab", 3)].into_iter().collect();

        let a = trie.child(ROOT, b'a', false).unwrap();
        let b = trie.child(a, b'b', false).unwrap();
        let c = trie.child(b, b'c', false).unwrap();

        assert_eq!(trie.node(b).value, Some(3));
        assert_eq!(trie.node(c).value, Some(2));
        assert!(!trie.node(a).terminal);
    }

    #[test]
    fn with_value_shares_one_payload() {
        let trie = Trie::with_value(["t", "true"], true);
        let t = trie.child(ROOT, b't', false).unwrap();
        assert_eq!(trie.node(t).value, Some(true));
        assert_eq!(trie.len(), 2);
    }
}
