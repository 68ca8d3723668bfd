//! Field layer stack.
//!
//! A field is parsed by a fixed nesting of layers, outermost first:
//!
//! ```text
//! delimiter ─ quote ─ strip ─ sentinel ─ value
//!    │          │        │        │         └─ raw bytes -> String
//!    │          │        │        └─ Trie stream match, counts only if the
//!    │          │        │           field ends right after it
//!    │          │        └─ spaces/tabs around the value
//!    │          └─ open/close/escape bytes
//!    └─ delimiter trie, newline, end of input
//! ```
//!
//! Every layer is pass-through when its feature is not configured, and every
//! layer reports through the shared [`FieldResult`] using only the status bits
//! it owns (see [`Status`](crate::Status)).
//!
//! [`FieldParser`] is the uniform contract: the string stack implements it, and
//! so does the typed leaf in `typed.rs`, which calls into the string stack.

#[path = "layers/config.rs"]
mod config;
#[path = "layers/field.rs"]
mod field;

pub use config::{LayerConfig, Quoting};
pub use field::StringField;

use crate::{ByteStream, FieldResult};

/// Parse one field from a stream into a result carrier.
///
/// Implementations never panic or return errors for malformed input: the
/// outcome is carried entirely by `result.status`.
pub trait FieldParser {
    type Output;

    fn parse_field<S>(&self, stream: &mut S, result: &mut FieldResult<Self::Output>)
    where
        S: ByteStream + ?Sized;
}
