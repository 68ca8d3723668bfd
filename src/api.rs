use crate::{ByteStream, FieldResult, FromField, LayerConfig, Quoting, SliceStream, Status, parse_typed};
use std::fmt::Display;

/// Tokenizer options.
///
/// A thin wrapper around [`LayerConfig`] with presets for common layouts.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub layers: LayerConfig,
}

impl Options {
    /// Comma delimited, `"` quoted.
    pub fn csv() -> Self {
        Options { layers: LayerConfig::new().delimiter(b',').quoting(Quoting::default()) }
    }

    /// Tab delimited, unquoted.
    pub fn tsv() -> Self {
        Options { layers: LayerConfig::new().delimiter(b'\t') }
    }

    /// Runs of spaces and tabs separate fields.
    pub fn whitespace() -> Self {
        Options { layers: LayerConfig::new().delimiters([" ", "\t"]).collapse_delimiters(true) }
    }

    pub fn sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.layers = self.layers.sentinels(sentinels);
        self
    }

    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.layers = self.layers.strip_whitespace(strip);
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.layers = self.layers.ignore_case(ignore_case);
        self
    }
}

impl From<LayerConfig> for Options {
    fn from(layers: LayerConfig) -> Self {
        Options { layers }
    }
}

/// Parse the first field of `input` as a `T` with the default format.
pub fn parse_field<T: FromField>(input: &[u8], options: &Options) -> FieldResult<T> {
    let mut stream = SliceStream::new(input);
    let mut result = FieldResult::new(0);
    parse_typed(&mut stream, &mut result, &options.layers, None);
    result
}

/// Split one row of `input` into typed fields using default formats.
///
/// Stops after the field that ends on a newline or the end of input.
pub fn tokenize<T: FromField>(input: &[u8], options: &Options) -> Vec<FieldResult<T>> {
    tokenize_row(input, options, None)
}

/// Like [`tokenize`] with an explicit format for every field.
pub fn tokenize_with<T: FromField>(input: &[u8], options: &Options, format: &T::Format) -> Vec<FieldResult<T>> {
    tokenize_row(input, options, Some(format))
}

fn tokenize_row<T: FromField>(input: &[u8], options: &Options, format: Option<&T::Format>) -> Vec<FieldResult<T>> {
    let mut stream = SliceStream::new(input);
    let mut fields = Vec::new();

    loop {
        let before = stream.position();
        let mut result = FieldResult::new(before);
        let status = parse_typed(&mut stream, &mut result, &options.layers, format);
        fields.push(result);

        if status.ends_row() || stream.position() == before {
            break;
        }
    }

    debug_trace!("[tokenize] {} fields, {} of {} bytes consumed", fields.len(), stream.position(), input.len());
    fields
}

/// A display-ready view of one parsed field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub index: usize,
    /// Start byte offset of the field (inclusive).
    pub start: usize,
    /// End byte offset, including the consumed terminator (exclusive).
    pub end: usize,
    pub status: Status,
    pub value: Option<String>,
}

/// Build summaries for fields produced by [`tokenize`] over an input of
/// `input_len` bytes.
pub fn summarize<T: Display>(fields: &[FieldResult<T>], input_len: usize) -> Vec<FieldSummary> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| FieldSummary {
            index,
            start: field.start,
            end: fields.get(index + 1).map_or(input_len, |next| next.start),
            status: field.status,
            value: field.value.as_ref().map(|v| v.to_string()),
        })
        .collect()
}
