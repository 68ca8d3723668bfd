//! Sentinel recognition and typed field conversion for streaming tokenizers.
//!
//! The crate has two cores:
//!
//! - [`Trie`]: an immutable byte trie built from a fixed set of sentinel
//!   strings (`NA`, `NULL`, `true`/`false`, ...) with a greedy stream matcher
//!   that never over-consumes and rolls back exactly on failure, plus a strict
//!   whole-buffer matcher.
//! - [`parse_typed`]: the typed leaf that lets the string layer stack
//!   (delimiters, quotes, whitespace, sentinels) find a field, then converts
//!   the text into a typed value, reporting failures through [`Status`] bits
//!   instead of errors.
//!
//! # Example
//! ```
//! use sentrie::{Options, Status, tokenize};
//!
//! let opts = Options::csv().sentinels(["NA"]);
//! let fields = tokenize::<i64>(b"1,NA,x", &opts);
//!
//! assert_eq!(fields[0].value, Some(1));
//! assert!(fields[1].status.contains(Status::SENTINEL));
//! assert!(fields[2].status.contains(Status::INVALID));
//! ```
//!
//! ## Debugging
//!
//! Set `SENTRIE_DEBUG=1` to print conversion and tokenizer traces to stderr.

#[macro_use]
mod macros;
mod api;
mod layers;
mod result;
mod status;
mod stream;
mod trie;
mod typed;

use once_cell::sync::Lazy;

pub use api::{FieldSummary, Options, parse_field, summarize, tokenize, tokenize_with};
pub use layers::{FieldParser, LayerConfig, Quoting, StringField};
pub use result::FieldResult;
pub use status::Status;
pub use stream::{ByteStream, SliceStream};
pub use trie::{MatchOptions, StreamMatch, Trie};
pub use typed::{BoolFormat, DateFormat, FormatError, FromField, Typed, parse_typed};

static DEBUG: Lazy<bool> = Lazy::new(|| std::env::var_os("SENTRIE_DEBUG").is_some());

pub(crate) fn debug_enabled() -> bool {
    *DEBUG
}
