//! Typed leaf parsing.
//!
//! A typed leaf lets the string layer stack find the field text, then
//! reinterprets that text as a `T` through a format descriptor:
//!
//! ```text
//! stream ──▶ StringField ──▶ FieldResult<String> ──▶ T::from_field(text, format)
//!                                   │                          │
//!                                   └─ inner status ───────────┴─▶ FieldResult<T>
//! ```
//!
//! Status rules, applied in [`parse_typed`]:
//!
//! - inner not `OK`, or empty text: value missing, status passed through as is;
//! - conversion succeeds: value set, status = inner | `OK`;
//! - conversion fails: value missing, status = (inner - `OK`) | `INVALID`
//!   (plus whatever the converter reports, e.g. `OVERFLOW`).
//!
//! Conversions live in `convert.rs`; format descriptors in `format.rs`.

#[path = "typed/convert.rs"]
mod convert;
#[path = "typed/format.rs"]
mod format;

pub use format::{BoolFormat, DateFormat, FormatError};

use crate::layers::{FieldParser, LayerConfig, StringField};
use crate::{ByteStream, FieldResult, Status};

/// A value that can be converted from field text.
pub trait FromField: Sized {
    /// Format descriptor consulted by the conversion (`()` when none is needed).
    type Format: 'static;

    /// Format used when the caller supplies none.
    fn default_format() -> &'static Self::Format;

    /// Convert non-empty field text.
    ///
    /// On failure, returns the status bits the converter wants to add to the
    /// rejection (usually none). `OK` and `INVALID` are handled by the caller.
    fn from_field(text: &str, format: &Self::Format) -> Result<Self, Status>;
}

/// Parse one typed field.
///
/// Records `result.start`, runs the string stack over the stream with
/// `config`, then converts the produced text with `format` (or
/// `T::default_format()`). Returns the final status.
pub fn parse_typed<T, S>(
    stream: &mut S,
    result: &mut FieldResult<T>,
    config: &LayerConfig,
    format: Option<&T::Format>,
) -> Status
where
    T: FromField,
    S: ByteStream + ?Sized,
{
    result.start = stream.position();

    let mut inner: FieldResult<String> = FieldResult::new(result.start);
    StringField::new(config).parse_field(stream, &mut inner);

    result.value = None;
    result.last_byte = inner.last_byte;
    let code = inner.status;

    result.status = match inner.value.as_deref() {
        Some(text) if code.is_ok() && !text.is_empty() => {
            let format = format.unwrap_or_else(|| T::default_format());
            match T::from_field(text, format) {
                Ok(value) => {
                    result.value = Some(value);
                    code.accepted()
                }
                Err(extra) => {
                    debug_trace!(
                        "[typed] {} rejected {:?} at {} ({})",
                        std::any::type_name::<T>(),
                        text,
                        result.start,
                        code.rejected(extra).describe()
                    );
                    code.rejected(extra)
                }
            }
        }
        _ => code,
    };
    result.status
}

/// A typed leaf bundled with its layer configuration and format.
#[derive(Debug, Clone)]
pub struct Typed<T: FromField> {
    config: LayerConfig,
    format: Option<T::Format>,
}

impl<T: FromField> Typed<T> {
    pub fn new(config: LayerConfig) -> Self {
        Typed { config, format: None }
    }

    pub fn with_format(mut self, format: T::Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }
}

impl<T: FromField> FieldParser for Typed<T> {
    type Output = T;

    fn parse_field<S>(&self, stream: &mut S, result: &mut FieldResult<T>)
    where
        S: ByteStream + ?Sized,
    {
        parse_typed(stream, result, &self.config, self.format.as_ref());
    }
}
