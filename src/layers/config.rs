use crate::Trie;

/// Quote handling for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quoting {
    pub open: u8,
    pub close: u8,
    /// When equal to `close`, a doubled close byte is a literal close byte.
    pub escape: u8,
}

impl Quoting {
    /// Same byte opens, closes and escapes (CSV style `"a ""b"" c"`).
    pub fn new(quote: u8) -> Self {
        Quoting { open: quote, close: quote, escape: quote }
    }

    pub fn with_close(mut self, close: u8) -> Self {
        self.close = close;
        self
    }

    pub fn with_escape(mut self, escape: u8) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for Quoting {
    fn default() -> Self {
        Quoting::new(b'"')
    }
}

/// Configuration shared by every layer of the stack.
///
/// The default is fully pass-through: no delimiters (fields run to a newline
/// or the end of input), no quoting, no stripping and no sentinels.
#[derive(Debug, Clone, Default)]
pub struct LayerConfig {
    pub delimiters: Option<Trie<()>>,
    /// Treat a run of delimiters as one.
    pub collapse_delimiters: bool,
    pub quoting: Option<Quoting>,
    /// Trim spaces and tabs just inside the quotes.
    pub ignore_quoted_whitespace: bool,
    /// Trim spaces and tabs around the field.
    pub strip_whitespace: bool,
    pub sentinels: Option<Trie<()>>,
    /// Case-insensitive sentinel matching.
    pub ignore_case: bool,
}

impl LayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter strings. Empty strings are ignored; an all-empty set
    /// means "no delimiters".
    pub fn delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let trie = Trie::new(delimiters);
        self.delimiters = (!trie.is_empty()).then_some(trie);
        self
    }

    pub fn delimiter(self, delimiter: u8) -> Self {
        self.delimiters([[delimiter]])
    }

    pub fn collapse_delimiters(mut self, collapse: bool) -> Self {
        self.collapse_delimiters = collapse;
        self
    }

    pub fn quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = Some(quoting);
        self
    }

    pub fn ignore_quoted_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_quoted_whitespace = ignore;
        self
    }

    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }

    /// Set the sentinel strings. Unlike delimiters, a set holding only the
    /// empty string is kept: it marks empty fields as sentinels.
    pub fn sentinels<I, S>(mut self, sentinels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.sentinels = Some(Trie::new(sentinels));
        self
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}
