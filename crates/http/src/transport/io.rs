use std::io::{self, BufRead, ErrorKind, Write};

use tracing::trace;

use crate::protocol::TransportError;
use crate::transport::{LineRead, Transport};

/// A [`Transport`] over a buffered std reader and a std writer.
///
/// Lines are copied straight from the reader's internal buffer into the codec's
/// line buffer, so reading does not allocate.
#[derive(Debug)]
pub struct IoTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> IoTransport<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> Transport for IoTransport<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, buf: &mut [u8]) -> Result<LineRead, TransportError> {
        let mut filled = 0;

        while filled < buf.len() {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                // eof
                break;
            }

            let room = buf.len() - filled;
            let (take, found_line_feed) = match available.iter().position(|b| *b == b'\n') {
                Some(i) if i < room => (i + 1, true),
                _ => (available.len().min(room), false),
            };

            buf[filled..filled + take].copy_from_slice(&available[..take]);
            self.reader.consume(take);
            filled += take;

            if found_line_feed {
                trace!(line_size = filled, "read line");
                return Ok(LineRead::Complete(filled));
            }
        }

        if filled == 0 && !buf.is_empty() {
            return Ok(LineRead::EndOfStream);
        }

        trace!(line_size = filled, "read partial line");
        Ok(LineRead::Incomplete(filled))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.writer.write_all(bytes).map_err(map_write_error)
    }

    fn flush(&mut self) -> Result<(), TransportError> {
        self.writer.flush().map_err(map_write_error)
    }
}

fn map_write_error(e: io::Error) -> TransportError {
    match e.kind() {
        ErrorKind::WriteZero | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => TransportError::Closed,
        _ => TransportError::Io { source: e },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn transport(input: &[u8]) -> IoTransport<&[u8], Vec<u8>> {
        IoTransport::new(input, Vec::new())
    }

    #[test]
    fn read_lines_one_by_one() {
        let mut transport = transport(b"GET / HTTP/1.1\r\n\r\nbody");
        let mut buf = [0u8; 64];

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Complete(16));
        assert_eq!(&buf[..16], b"GET / HTTP/1.1\r\n");

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Complete(2));
        assert_eq!(&buf[..2], b"\r\n");

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Incomplete(4));
        assert_eq!(&buf[..4], b"body");

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::EndOfStream);
    }

    #[test]
    fn line_longer_than_buffer_is_incomplete() {
        let mut transport = transport(b"0123456789\n");
        let mut buf = [0u8; 4];

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Incomplete(4));
        assert_eq!(&buf, b"0123");
        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Incomplete(4));
        assert_eq!(&buf, b"4567");
        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Complete(3));
        assert_eq!(&buf[..3], b"89\n");
    }

    #[test]
    fn line_spanning_reader_refills() {
        // a tiny internal buffer forces several fill_buf calls per line
        let reader = BufReader::with_capacity(3, Cursor::new(b"Host: thing\r\nnext\r\n".to_vec()));
        let mut transport = IoTransport::new(reader, Vec::new());
        let mut buf = [0u8; 32];

        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Complete(13));
        assert_eq!(&buf[..13], b"Host: thing\r\n");
        assert_eq!(transport.read_line(&mut buf).unwrap(), LineRead::Complete(6));
        assert_eq!(&buf[..6], b"next\r\n");
    }

    #[test]
    fn write_and_flush() {
        let mut transport = transport(b"");
        transport.write(b"HTTP/1.1 200 OK\r\n").unwrap();
        transport.write(b"\r\n").unwrap();
        transport.flush().unwrap();

        let (_, written) = transport.into_inner();
        assert_eq!(written, b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn write_into_full_sink_reports_closed() {
        let mut sink = [0u8; 4];
        let mut transport = IoTransport::new(&b""[..], &mut sink[..]);

        let result = transport.write(b"HTTP/1.1 200 OK\r\n");
        assert!(matches!(result, Err(TransportError::Closed)));
    }
}
