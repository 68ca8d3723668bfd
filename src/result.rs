use crate::Status;

/// The carrier threaded through every layer of a field parse.
///
/// One instance is created per field attempt. Layers fill `value` and
/// `status`; `start` is the stream offset where the attempt began and
/// `last_byte` the last byte physically consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult<T> {
    /// Parsed value, `None` when missing (empty field, sentinel, or failure).
    pub value: Option<T>,
    pub status: Status,
    /// Stream offset recorded when the attempt began.
    pub start: usize,
    pub last_byte: Option<u8>,
}

impl<T> FieldResult<T> {
    pub fn new(start: usize) -> Self {
        FieldResult { value: None, status: Status::empty(), start, last_byte: None }
    }

    /// Clear the carrier so it can be reused for the next field.
    pub fn reset(&mut self, start: usize) {
        self.value = None;
        self.status = Status::empty();
        self.start = start;
        self.last_byte = None;
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Move the value out, leaving it missing.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Number of bytes consumed between `start` and `end`.
    pub fn span_len(&self, end: usize) -> usize {
        end.saturating_sub(self.start)
    }
}

impl<T> Default for FieldResult<T> {
    fn default() -> Self {
        FieldResult::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_everything() {
        let mut res: FieldResult<i64> = FieldResult::new(3);
        res.value = Some(7);
        res.status = Status::OK | Status::DELIMITED;
        res.last_byte = Some(b',');

        res.reset(10);

        assert_eq!(res, FieldResult::new(10));
        assert_eq!(res.span_len(14), 4);
    }
}
