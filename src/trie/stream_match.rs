//! Stream matcher.
//!
//! Walks the trie against a [`ByteStream`] one byte at a time:
//!
//! ```text
//! candidates {"ab", "abc"}
//!
//! input "abc"  a -> b* -> c*          leaf reached      => "abc", 3 bytes
//! input "abx"  a -> b* -> (x peeked)  fall back to b*   => "ab",  2 bytes, x left
//! input "a"    a -> (end of input)    a not terminal    => no match, rewind to 0
//! ```
//!
//! Bytes are only consumed once a child is known to match, so the fallback to
//! the deepest node never needs to un-read anything. Only a complete failure
//! seeks the stream, and always back to the offset where the attempt began.

use super::{ROOT, Trie};
use crate::{ByteStream, FieldResult, Status};

/// Knobs for [`Trie::match_stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Write the matched value into the result. When false the match is
    /// still reported and the stream still advances.
    pub set_value: bool,
    /// Fold ASCII `A`-`Z` to lowercase before comparing.
    pub ignore_case: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions { set_value: true, ignore_case: false }
    }
}

impl MatchOptions {
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn set_value(mut self, set_value: bool) -> Self {
        self.set_value = set_value;
        self
    }
}

/// A successful stream match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMatch<'t, T> {
    /// Value of the matched candidate, `None` for the empty-string sentinel.
    pub value: Option<&'t T>,
    /// Last byte consumed, `None` when nothing was consumed.
    pub last_byte: Option<u8>,
}

impl<T> Trie<T> {
    /// Greedy longest match at the current stream position.
    ///
    /// On failure the stream is left exactly where it was.
    pub fn longest_match<S>(&self, stream: &mut S, ignore_case: bool) -> Option<StreamMatch<'_, T>>
    where
        S: ByteStream + ?Sized,
    {
        if self.is_empty() {
            return Some(StreamMatch { value: None, last_byte: None });
        }

        let start = stream.position();
        let mut current = ROOT;
        let mut last_byte = None;

        while let Some(b) = stream.peek_byte() {
            let Some(next) = self.child(current, b, ignore_case) else {
                break;
            };
            stream.read_byte();
            last_byte = Some(b);
            current = next;

            let node = self.node(current);
            if node.children.is_empty() {
                return Some(StreamMatch { value: node.value.as_ref(), last_byte });
            }
        }

        // Either the input ended or the peeked byte extends no path: settle
        // for the node just consumed if a candidate ends there. A peeked
        // mismatch reports the node's own label as the last byte.
        let node = self.node(current);
        if node.terminal {
            if !stream.at_end() {
                last_byte = Some(node.label);
            }
            return Some(StreamMatch { value: node.value.as_ref(), last_byte });
        }

        stream.seek(start);
        None
    }

    /// Match a candidate at the current stream position and record it in
    /// `result`.
    ///
    /// On success `result.status` is replaced by [`Status::OK`], `last_byte`
    /// is recorded and, when `opts.set_value` is set, the candidate's value is
    /// stored. The empty-string trie succeeds without touching the stream or
    /// the result. On failure neither the stream nor `result` changes.
    pub fn match_stream<S, U>(&self, stream: &mut S, result: &mut FieldResult<U>, opts: MatchOptions) -> bool
    where
        S: ByteStream + ?Sized,
        T: Clone,
        U: From<T>,
    {
        if !opts.set_value {
            return self.detect(stream, result, opts.ignore_case);
        }
        let Some(hit) = self.longest_match(stream, opts.ignore_case) else {
            return false;
        };
        if hit.last_byte.is_some() {
            result.value = hit.value.cloned().map(U::from);
            result.status = Status::OK;
            result.last_byte = hit.last_byte;
        }
        true
    }

    /// Like [`match_stream`](Trie::match_stream) with `set_value = false`.
    ///
    /// The result's value type is unconstrained since it is never written.
    pub fn detect<S, U>(&self, stream: &mut S, result: &mut FieldResult<U>, ignore_case: bool) -> bool
    where
        S: ByteStream + ?Sized,
    {
        let Some(hit) = self.longest_match(stream, ignore_case) else {
            return false;
        };
        if hit.last_byte.is_some() {
            result.status = Status::OK;
            result.last_byte = hit.last_byte;
        }
        true
    }
}
