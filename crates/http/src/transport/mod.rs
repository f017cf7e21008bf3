//! The seam between the codec and the host's byte stream.
//!
//! The codec never touches sockets or UARTs itself. Instead the host implements
//! [`Transport`], which reads one line at a time into a buffer the codec hands it
//! and writes byte slices out. Any per-connection context the host needs (a socket
//! handle, a peripheral) lives inside the transport value.
//!
//! [`IoTransport`] adapts any `std::io::BufRead` + `std::io::Write` pair.

mod io;

pub use io::IoTransport;

use crate::protocol::TransportError;

/// Outcome of a successful [`Transport::read_line`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// `n` bytes were stored and the last one is the line feed
    Complete(usize),
    /// `n` bytes were stored but no line feed was found: the buffer filled up or
    /// the stream ended mid-line
    Incomplete(usize),
    /// Nothing was stored because the stream has ended
    EndOfStream,
}

impl LineRead {
    /// Number of bytes stored into the buffer.
    pub fn len(&self) -> usize {
        match self {
            Self::Complete(n) | Self::Incomplete(n) => *n,
            Self::EndOfStream => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Line-oriented byte stream provided by the host.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Stores the next line, line feed included, at the start of `buf`.
    ///
    /// At most `buf.len()` bytes are stored. Bytes past the first line feed must be
    /// kept for the next call.
    ///
    /// # Errors
    ///
    /// Any failure other than a clean end of stream.
    fn read_line(&mut self, buf: &mut [u8]) -> Result<LineRead, TransportError>;

    /// Writes all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if not every byte could be written.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Pushes out anything the transport buffers internally.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffered bytes could not be written.
    fn flush(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read_line(&mut self, buf: &mut [u8]) -> Result<LineRead, TransportError> {
        (**self).read_line(buf)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        (**self).write(bytes)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        (**self).flush()
    }
}
