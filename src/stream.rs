//! Byte stream cursor.
//!
//! The matchers and the layer stack only need five operations from their
//! input: the current offset, a one-byte lookahead, a one-byte read, an
//! end-of-input test and an absolute seek (used for rollback). [`ByteStream`]
//! captures exactly that, so in-memory slices and `std::io::Cursor` can be
//! parsed the same way.

use std::io::Cursor;

pub trait ByteStream {
    /// Current offset from the beginning of the input.
    fn position(&self) -> usize;

    /// Next byte without consuming it, `None` at end of input.
    fn peek_byte(&self) -> Option<u8>;

    /// Consume and return the next byte, `None` at end of input.
    fn read_byte(&mut self) -> Option<u8>;

    fn at_end(&self) -> bool {
        self.peek_byte().is_none()
    }

    /// Move to an absolute offset. Offsets past the end clamp to the end.
    fn seek(&mut self, offset: usize);
}

/// Cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct SliceStream<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceStream { bytes, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl<'a> From<&'a str> for SliceStream<'a> {
    fn from(s: &'a str) -> Self {
        SliceStream::new(s.as_bytes())
    }
}

impl ByteStream for SliceStream<'_> {
    fn position(&self) -> usize {
        self.pos
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte()?;
        self.pos += 1;
        Some(b)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn seek(&mut self, offset: usize) {
        self.pos = offset.min(self.bytes.len());
    }
}

impl<T: AsRef<[u8]>> ByteStream for Cursor<T> {
    fn position(&self) -> usize {
        Cursor::position(self) as usize
    }

    fn peek_byte(&self) -> Option<u8> {
        let pos = Cursor::position(self) as usize;
        self.get_ref().as_ref().get(pos).copied()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let b = ByteStream::peek_byte(self)?;
        self.set_position(Cursor::position(self) + 1);
        Some(b)
    }

    fn seek(&mut self, offset: usize) {
        let len = self.get_ref().as_ref().len();
        self.set_position(offset.min(len) as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_stream_peek_read_seek() {
        let mut s = SliceStream::from("ab");
        assert_eq!(s.peek_byte(), Some(b'a'));
        assert_eq!(s.position(), 0);
        assert_eq!(s.read_byte(), Some(b'a'));
        assert_eq!(s.read_byte(), Some(b'b'));
        assert!(s.at_end());
        assert_eq!(s.read_byte(), None);

        s.seek(1);
        assert_eq!(s.remaining(), b"b");
        s.seek(99);
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn io_cursor_behaves_like_slice_stream() {
        let mut c = Cursor::new(b"xy".to_vec());
        assert_eq!(ByteStream::read_byte(&mut c), Some(b'x'));
        assert_eq!(ByteStream::position(&c), 1);
        assert!(!ByteStream::at_end(&c));
        ByteStream::seek(&mut c, 0);
        assert_eq!(ByteStream::peek_byte(&c), Some(b'x'));
        ByteStream::seek(&mut c, 5);
        assert!(ByteStream::at_end(&c));
    }
}
