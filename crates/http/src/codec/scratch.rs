//! Formatting into the shared line buffer.
//!
//! The line buffer that stages incoming lines is also where outgoing status and
//! header lines are formatted before they are written. A [`ScratchWriter`] holds the
//! buffer exclusively until the formatted bytes are taken out with
//! [`ScratchWriter::into_bytes`]; the next line formatted or read overwrites them.

use std::fmt;

/// A `fmt::Write` sink over a fixed byte slice.
///
/// Formatting past the end of the slice fails instead of truncating.
#[derive(Debug)]
pub(crate) struct ScratchWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> ScratchWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn into_bytes(self) -> &'a [u8] {
        let Self { buf, len } = self;
        &buf[..len]
    }
}

impl fmt::Write for ScratchWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len.checked_add(s.len()).ok_or(fmt::Error)?;
        let dst = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn format_into_buffer() {
        let mut buf = [0u8; 32];
        let mut scratch = ScratchWriter::new(&mut buf);
        write!(scratch, "Content-Length: {}\r\n", 42).unwrap();
        assert_eq!(scratch.into_bytes(), b"Content-Length: 42\r\n");
    }

    #[test]
    fn exact_fit() {
        let mut buf = [0u8; 4];
        let mut scratch = ScratchWriter::new(&mut buf);
        write!(scratch, "{}", 1234).unwrap();
        assert_eq!(scratch.into_bytes(), b"1234");
    }

    #[test]
    fn overflow_fails() {
        let mut buf = [0u8; 4];
        let mut scratch = ScratchWriter::new(&mut buf);
        assert!(write!(scratch, "{}", 12345).is_err());
        assert_eq!(scratch.capacity(), 4);
    }
}
