//! Parse status flags.
//!
//! Every layer in the field-parsing stack reports its outcome through a
//! [`Status`] set. Layers own disjoint bits: a layer may add or clear the bits
//! it owns, and must carry every other bit through untouched.
//!
//! ```text
//! delimiter layer  -> DELIMITED, NEWLINE, EOF, INVALID_DELIMITER
//! quote layer      -> QUOTED, ESCAPED_STRING, INVALID_QUOTED_FIELD
//! sentinel layer   -> SENTINEL
//! typed leaf       -> OK, INVALID, OVERFLOW
//! ```

bitflags::bitflags! {
    /// Outcome bits for a single field attempt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u16 {
        const OK                   = 1 << 0;
        const SENTINEL             = 1 << 1;
        const QUOTED               = 1 << 2;
        const DELIMITED            = 1 << 3;
        const NEWLINE              = 1 << 4;
        const EOF                  = 1 << 5;
        const ESCAPED_STRING       = 1 << 6;
        const INVALID_QUOTED_FIELD = 1 << 7;
        const INVALID_DELIMITER    = 1 << 8;
        const OVERFLOW             = 1 << 9;
        const INVALID              = 1 << 15;
    }
}

impl Status {
    pub fn is_ok(self) -> bool {
        self.contains(Status::OK)
    }

    pub fn is_invalid(self) -> bool {
        self.contains(Status::INVALID)
    }

    pub fn is_sentinel(self) -> bool {
        self.contains(Status::SENTINEL)
    }

    pub fn at_eof(self) -> bool {
        self.contains(Status::EOF)
    }

    /// True when the field ended the current row (newline or end of input).
    pub fn ends_row(self) -> bool {
        self.intersects(Status::NEWLINE | Status::EOF)
    }

    /// Status for a successful conversion: the inner bits plus `OK`.
    pub fn accepted(self) -> Status {
        self | Status::OK
    }

    /// Status for a failed conversion.
    ///
    /// `OK` is cleared, `INVALID` is set, and `extra` (bits owned by the
    /// converter, such as `OVERFLOW`) is merged in. All other bits survive.
    pub fn rejected(self, extra: Status) -> Status {
        (self - Status::OK) | Status::INVALID | extra
    }

    /// Short flag names for reports, e.g. `OK|DELIMITED`.
    pub fn describe(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        self.iter_names().map(|(name, _)| name).collect::<Vec<_>>().join("|")
    }
}
