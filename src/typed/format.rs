//! Format descriptors.
//!
//! [`DateFormat`] normalizes a textual date/time specification into a reusable
//! chrono strftime pattern. Two spellings are accepted:
//!
//! - strftime, recognised by the presence of `%`: `%Y-%m-%d`
//! - letter codes: `yyyy-mm-dd HH:MM:SS.s`
//!
//! | code | meaning | strftime |
//! |---|---|---|
//! | `yyyy` / `yy` | year | `%Y` / `%y` |
//! | `m`, `mm` | month | `%m` |
//! | `d`, `dd` | day | `%d` |
//! | `H`, `HH` | hour | `%H` |
//! | `M`, `MM` | minute | `%M` |
//! | `S`, `SS` | second | `%S` |
//! | `.s` | fractional seconds | `%.f` |
//! | `u` / `U` | month name, short / long | `%b` / `%B` |
//! | `e` / `E` | weekday name, short / long | `%a` / `%A` |
//! | `p` | AM/PM | `%p` |
//! | `z` | UTC offset | `%z` |
//!
//! Any other byte is a literal.
//!
//! [`BoolFormat`] is a trie of accepted spellings for `true` and `false`.

use crate::Trie;
use chrono::format::{Item, StrftimeItems};
use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("empty format specification")]
    Empty,
    #[error("unsupported format code '{0}'")]
    UnsupportedCode(String),
    #[error("invalid strftime pattern '{0}'")]
    InvalidPattern(String),
}

/// A normalized date/time format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

pub(crate) static DEFAULT_DATE: Lazy<DateFormat> = Lazy::new(|| DateFormat { pattern: "%Y-%m-%d".to_string() });
pub(crate) static DEFAULT_TIME: Lazy<DateFormat> = Lazy::new(|| DateFormat { pattern: "%H:%M:%S".to_string() });
pub(crate) static DEFAULT_DATETIME: Lazy<DateFormat> =
    Lazy::new(|| DateFormat { pattern: "%Y-%m-%dT%H:%M:%S".to_string() });
pub(crate) static DEFAULT_ZONED: Lazy<DateFormat> =
    Lazy::new(|| DateFormat { pattern: "%Y-%m-%dT%H:%M:%S%z".to_string() });

impl DateFormat {
    pub fn new(spec: &str) -> Result<Self, FormatError> {
        if spec.is_empty() {
            return Err(FormatError::Empty);
        }
        let pattern = if spec.contains('%') { spec.to_string() } else { translate(spec)? };

        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidPattern(pattern));
        }
        Ok(DateFormat { pattern })
    }

    /// The chrono strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::new(s)
    }
}

fn translate(spec: &str) -> Result<String, FormatError> {
    let codes = regex!(r"\.s+|y+|m+|d+|H+|M+|S+|s+|u+|U+|e+|E+|p+|z+");

    let mut out = String::with_capacity(spec.len() + 8);
    let mut tail = 0;
    for m in codes.find_iter(spec) {
        push_literal(&mut out, &spec[tail..m.start()]);
        tail = m.end();

        let code = m.as_str();
        let directive = match code {
            "yyyy" => "%Y",
            "yy" => "%y",
            "m" | "mm" => "%m",
            "d" | "dd" => "%d",
            "H" | "HH" => "%H",
            "M" | "MM" => "%M",
            "S" | "SS" => "%S",
            "u" => "%b",
            "U" => "%B",
            "e" => "%a",
            "E" => "%A",
            "p" => "%p",
            "z" => "%z",
            _ if code.starts_with(".s") => "%.f",
            _ => return Err(FormatError::UnsupportedCode(code.to_string())),
        };
        out.push_str(directive);
    }
    push_literal(&mut out, &spec[tail..]);
    Ok(out)
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

/// Accepted spellings for booleans.
#[derive(Debug, Clone)]
pub struct BoolFormat {
    pub(crate) spellings: Trie<bool>,
    pub(crate) ignore_case: bool,
}

pub(crate) static DEFAULT_BOOL: Lazy<BoolFormat> = Lazy::new(|| BoolFormat::new(["true", "1"], ["false", "0"]));

impl BoolFormat {
    /// Case-insensitive by default.
    pub fn new<I, J, S>(trues: I, falses: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let pairs = trues.into_iter().map(|s| (s, true)).chain(falses.into_iter().map(|s| (s, false)));
        BoolFormat { spellings: Trie::from_pairs(pairs), ignore_case: true }
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_codes_translate_to_strftime() {
        // (spec, expected pattern)
        let cases = vec![
            ("yyyy-mm-dd", "%Y-%m-%d"),
            ("dd/mm/yy", "%d/%m/%y"),
            ("yyyy-mm-ddTHH:MM:SS", "%Y-%m-%dT%H:%M:%S"),
            ("HH:MM:SS.s", "%H:%M:%S%.f"),
            ("e, d U yyyy", "%a, %d %B %Y"),
            ("H:MM p", "%H:%M %p"),
            ("yyyy-mm-dd HH:MMz", "%Y-%m-%d %H:%M%z"),
        ];

        for (spec, expected) in cases {
            let fmt = DateFormat::new(spec).unwrap();
            assert_eq!(fmt.pattern(), expected, "spec {spec:?}");
        }
    }

    #[test]
    fn strftime_spec_is_kept() {
        let fmt: DateFormat = "%d.%m.%Y".parse().unwrap();
        assert_eq!(fmt.pattern(), "%d.%m.%Y");
    }

    #[test]
    fn invalid_specs_are_rejected_at_construction() {
        assert_eq!(DateFormat::new(""), Err(FormatError::Empty));
        assert_eq!(DateFormat::new("yyy-mm"), Err(FormatError::UnsupportedCode("yyy".to_string())));
        assert_eq!(DateFormat::new("mmm"), Err(FormatError::UnsupportedCode("mmm".to_string())));
        assert_eq!(DateFormat::new("HH:MM:SS s"), Err(FormatError::UnsupportedCode("s".to_string())));
        assert!(matches!(DateFormat::new("%Y-%Q"), Err(FormatError::InvalidPattern(_))));
    }

    #[test]
    fn defaults_are_valid() {
        for fmt in [&*DEFAULT_DATE, &*DEFAULT_TIME, &*DEFAULT_DATETIME, &*DEFAULT_ZONED] {
            assert_eq!(DateFormat::new(fmt.pattern()).as_ref(), Ok(fmt));
        }
    }
}
