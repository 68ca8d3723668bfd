//! The string layer stack.
//!
//! Produces the raw text of one field together with the structural status bits
//! (delimiter, newline, quoting, sentinel). Typed leaves build on top of this.

use super::{FieldParser, LayerConfig, Quoting};
use crate::{ByteStream, FieldResult, SliceStream, Status};

/// Parses one field as a `String` using a [`LayerConfig`].
#[derive(Debug, Clone, Copy)]
pub struct StringField<'c> {
    config: &'c LayerConfig,
}

impl<'c> StringField<'c> {
    pub fn new(config: &'c LayerConfig) -> Self {
        StringField { config }
    }

    /// Consume the field terminator at the current position, if there is one.
    ///
    /// Delimiters win over newlines. Returns false, consuming nothing, when the
    /// next bytes do not end the field.
    fn end_of_field<S>(&self, stream: &mut S, status: &mut Status, last: &mut Option<u8>) -> bool
    where
        S: ByteStream + ?Sized,
    {
        let Some(b) = stream.peek_byte() else {
            *status |= Status::EOF;
            return true;
        };

        if let Some(delims) = &self.config.delimiters {
            let mut hit: FieldResult<()> = FieldResult::new(stream.position());
            if delims.detect(stream, &mut hit, false) {
                *status |= Status::DELIMITED;
                if self.config.collapse_delimiters {
                    while delims.detect(stream, &mut hit, false) {}
                }
                *last = hit.last_byte;
                return true;
            }
        }

        match b {
            b'\n' => {
                stream.read_byte();
            }
            b'\r' => {
                stream.read_byte();
                if stream.peek_byte() == Some(b'\n') {
                    stream.read_byte();
                }
            }
            _ => return false,
        }
        *status |= Status::NEWLINE;
        *last = Some(b'\n');
        true
    }

    /// Match a sentinel at the start of an unquoted field.
    ///
    /// The match only counts when the field ends right after it; otherwise
    /// the stream is rewound to `field_start` and the caller reads a value.
    fn sentinel<S>(&self, stream: &mut S, status: &mut Status, last: &mut Option<u8>) -> bool
    where
        S: ByteStream + ?Sized,
    {
        let Some(sentinels) = &self.config.sentinels else {
            return false;
        };

        let field_start = stream.position();
        let mut hit: FieldResult<()> = FieldResult::new(field_start);
        if !sentinels.detect(stream, &mut hit, self.config.ignore_case) {
            return false;
        }

        let mut tail = hit.last_byte.or(*last);
        if self.config.strip_whitespace {
            skip_blanks(stream, &mut tail);
        }
        let mut ending = Status::empty();
        if self.end_of_field(stream, &mut ending, &mut tail) {
            *status |= ending | Status::SENTINEL | Status::OK;
            *last = tail;
            return true;
        }

        stream.seek(field_start);
        false
    }

    /// True when the unquoted content of a quoted field spells a sentinel.
    fn quoted_sentinel(&self, text: &[u8]) -> bool {
        let Some(sentinels) = &self.config.sentinels else {
            return false;
        };
        let mut content = SliceStream::new(text);
        let mut hit: FieldResult<()> = FieldResult::new(0);
        sentinels.detect(&mut content, &mut hit, self.config.ignore_case) && content.at_end()
    }

    fn unquoted<S>(&self, stream: &mut S, status: &mut Status, last: &mut Option<u8>) -> Vec<u8>
    where
        S: ByteStream + ?Sized,
    {
        let mut buf = Vec::new();
        while !self.end_of_field(stream, status, last) {
            let Some(b) = stream.read_byte() else {
                break;
            };
            buf.push(b);
            *last = Some(b);
        }
        if self.config.strip_whitespace {
            trim_blanks_end(&mut buf);
        }
        buf
    }

    /// Read a quoted field; the opening byte has already been consumed.
    ///
    /// Returns `None` when the input ends before the closing byte.
    fn quoted<S>(&self, stream: &mut S, q: Quoting, status: &mut Status, last: &mut Option<u8>) -> Option<Vec<u8>>
    where
        S: ByteStream + ?Sized,
    {
        let mut buf = Vec::new();
        loop {
            let b = stream.read_byte()?;
            *last = Some(b);

            let escapes = b == q.escape && (q.escape != q.close || stream.peek_byte() == Some(q.close));
            if escapes {
                let next = stream.read_byte()?;
                *last = Some(next);
                *status |= Status::ESCAPED_STRING;
                buf.push(next);
            } else if b == q.close {
                break;
            } else {
                buf.push(b);
            }
        }

        if self.config.ignore_quoted_whitespace {
            let leading = buf.iter().take_while(|b| is_blank(**b)).count();
            buf.drain(..leading);
            trim_blanks_end(&mut buf);
        }
        Some(buf)
    }
}

impl FieldParser for StringField<'_> {
    type Output = String;

    fn parse_field<S>(&self, stream: &mut S, result: &mut FieldResult<String>)
    where
        S: ByteStream + ?Sized,
    {
        result.reset(stream.position());
        let mut status = Status::empty();
        let mut last = None;

        if self.config.strip_whitespace {
            skip_blanks(stream, &mut last);
        }

        let quoting = self.config.quoting.filter(|q| stream.peek_byte() == Some(q.open));
        let text = match quoting {
            Some(q) => {
                stream.read_byte();
                last = Some(q.open);
                status |= Status::QUOTED;

                let Some(text) = self.quoted(stream, q, &mut status, &mut last) else {
                    result.status = status | Status::INVALID_QUOTED_FIELD | Status::INVALID | Status::EOF;
                    result.last_byte = last;
                    return;
                };

                if self.config.strip_whitespace {
                    skip_blanks(stream, &mut last);
                }
                if !self.end_of_field(stream, &mut status, &mut last) {
                    status |= Status::INVALID_DELIMITER | Status::INVALID;
                    while !self.end_of_field(stream, &mut status, &mut last) {
                        last = stream.read_byte();
                    }
                }
                if !status.is_invalid() && self.quoted_sentinel(&text) {
                    result.status = status | Status::SENTINEL | Status::OK;
                    result.last_byte = last;
                    return;
                }
                text
            }
            None => {
                if self.sentinel(stream, &mut status, &mut last) {
                    result.status = status;
                    result.last_byte = last;
                    return;
                }
                self.unquoted(stream, &mut status, &mut last)
            }
        };

        if !status.is_invalid() {
            status |= Status::OK;
            result.value = Some(String::from_utf8_lossy(&text).into_owned());
        }
        result.status = status;
        result.last_byte = last;
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn skip_blanks<S>(stream: &mut S, last: &mut Option<u8>)
where
    S: ByteStream + ?Sized,
{
    while let Some(b) = stream.peek_byte().filter(|b| is_blank(*b)) {
        stream.read_byte();
        *last = Some(b);
    }
}

fn trim_blanks_end(buf: &mut Vec<u8>) {
    while buf.last().is_some_and(|b| is_blank(*b)) {
        buf.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SliceStream;

    fn field(config: &LayerConfig, input: &str) -> (FieldResult<String>, usize) {
        let mut stream = SliceStream::from(input);
        let mut res = FieldResult::new(0);
        StringField::new(config).parse_field(&mut stream, &mut res);
        (res, stream.position())
    }

    #[test]
    fn delimited_field() {
        let cfg = LayerConfig::new().delimiter(b',');
        let (res, pos) = field(&cfg, "abc,def");

        assert_eq!(res.value.as_deref(), Some("abc"));
        assert_eq!(res.status, Status::OK | Status::DELIMITED);
        assert_eq!(res.last_byte, Some(b','));
        assert_eq!(pos, 4);
    }

    #[test]
    fn last_field_hits_eof() {
        let cfg = LayerConfig::new().delimiter(b',');
        let (res, _) = field(&cfg, "xyz");
        assert_eq!(res.value.as_deref(), Some("xyz"));
        assert_eq!(res.status, Status::OK | Status::EOF);
        assert_eq!(res.last_byte, Some(b'z'));
    }

    #[test]
    fn no_delimiters_runs_to_newline() {
        let cfg = LayerConfig::new();
        let (res, pos) = field(&cfg, "a,b\r\nc");
        assert_eq!(res.value.as_deref(), Some("a,b"));
        assert_eq!(res.status, Status::OK | Status::NEWLINE);
        assert_eq!(pos, 5);
    }

    #[test]
    fn multibyte_and_collapsed_delimiters() {
        let cfg = LayerConfig::new().delimiters(["::"]).collapse_delimiters(true);
        let (res, pos) = field(&cfg, "a:b::::c");
        assert_eq!(res.value.as_deref(), Some("a:b"));
        assert!(res.status.contains(Status::DELIMITED));
        assert_eq!(pos, 7);
    }

    #[test]
    fn strip_whitespace_around_value() {
        let cfg = LayerConfig::new().delimiter(b',').strip_whitespace(true);
        let (res, _) = field(&cfg, "  hi there \t,x");
        assert_eq!(res.value.as_deref(), Some("hi there"));
    }

    #[test]
    fn quoted_field_with_doubled_quote() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::default());
        let (res, pos) = field(&cfg, r#""say ""hi"", ok",next"#);

        assert_eq!(res.value.as_deref(), Some(r#"say "hi", ok"#));
        assert_eq!(res.status, Status::OK | Status::QUOTED | Status::ESCAPED_STRING | Status::DELIMITED);
        assert_eq!(pos, 17);
    }

    #[test]
    fn quoted_field_with_backslash_escape() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::new(b'\'').with_escape(b'\\'));
        let (res, _) = field(&cfg, r"'it\'s',");
        assert_eq!(res.value.as_deref(), Some("it's"));
    }

    #[test]
    fn ignore_whitespace_inside_quotes() {
        let cfg = LayerConfig::new().quoting(Quoting::default()).ignore_quoted_whitespace(true);
        let (res, _) = field(&cfg, "\"  padded \"");
        assert_eq!(res.value.as_deref(), Some("padded"));
        assert_eq!(res.status, Status::OK | Status::QUOTED | Status::EOF);
    }

    #[test]
    fn unterminated_quote_is_invalid() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::default());
        let (res, _) = field(&cfg, "\"open,field");
        assert_eq!(res.value, None);
        assert!(res.status.contains(Status::INVALID_QUOTED_FIELD | Status::INVALID | Status::EOF | Status::QUOTED));
        assert!(!res.status.is_ok());
    }

    #[test]
    fn garbage_after_closing_quote_is_skipped() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::default());
        let (res, pos) = field(&cfg, "\"a\"bc,d");
        assert_eq!(res.value, None);
        assert!(res.status.contains(Status::INVALID_DELIMITER | Status::INVALID | Status::DELIMITED));
        assert_eq!(pos, 6);
    }

    #[test]
    fn sentinel_needs_field_end() {
        let cfg = LayerConfig::new().delimiter(b',').sentinels(["NA"]);

        let (res, pos) = field(&cfg, "NA,1");
        assert_eq!(res.value, None);
        assert_eq!(res.status, Status::OK | Status::SENTINEL | Status::DELIMITED);
        assert_eq!(pos, 3);

        let (res, _) = field(&cfg, "NAB,1");
        assert_eq!(res.value.as_deref(), Some("NAB"));
        assert!(!res.status.is_sentinel());
    }

    #[test]
    fn sentinel_ignore_case_and_trailing_blanks() {
        let cfg = LayerConfig::new().delimiter(b',').sentinels(["null"]).ignore_case(true).strip_whitespace(true);
        let (res, _) = field(&cfg, "  NULL  ,");
        assert!(res.status.is_sentinel());
        assert_eq!(res.value, None);
    }

    #[test]
    fn empty_sentinel_marks_empty_fields() {
        let cfg = LayerConfig::new().delimiter(b',').sentinels([""]);

        let (res, _) = field(&cfg, ",x");
        assert_eq!(res.status, Status::OK | Status::SENTINEL | Status::DELIMITED);

        let (res, _) = field(&cfg, "x,");
        assert_eq!(res.value.as_deref(), Some("x"));
    }

    #[test]
    fn quoted_sentinel_is_recognised() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::default()).sentinels(["NA"]);

        let (res, pos) = field(&cfg, "\"NA\",1");
        assert_eq!(res.value, None);
        assert_eq!(res.status, Status::OK | Status::QUOTED | Status::SENTINEL | Status::DELIMITED);
        assert_eq!(res.last_byte, Some(b','));
        assert_eq!(pos, 5);

        let (res, _) = field(&cfg, "\"NAB\",1");
        assert_eq!(res.value.as_deref(), Some("NAB"));
        assert_eq!(res.status, Status::OK | Status::QUOTED | Status::DELIMITED);
    }

    #[test]
    fn quoted_sentinel_honours_ignore_case() {
        let cfg = LayerConfig::new().delimiter(b',').quoting(Quoting::default()).sentinels(["null"]).ignore_case(true);
        let (res, _) = field(&cfg, "\"NULL\"");
        assert_eq!(res.value, None);
        assert_eq!(res.status, Status::OK | Status::QUOTED | Status::SENTINEL | Status::EOF);
    }

    #[test]
    fn empty_field_without_sentinels_is_empty_string() {
        let cfg = LayerConfig::new().delimiter(b',');
        let (res, _) = field(&cfg, ",");
        assert_eq!(res.value.as_deref(), Some(""));
        assert_eq!(res.status, Status::OK | Status::DELIMITED);
    }
}
