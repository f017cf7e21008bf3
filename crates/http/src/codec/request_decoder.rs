//! HTTP request decoder module
//!
//! This module decodes a complete Thing request from a line-oriented transport.
//! All state lives in two caller-provided buffers: the line buffer, refilled for
//! every line and finally holding the body, and the path buffer, which keeps the
//! request path alive while the line buffer is reused.
//!
//! # Components
//!
//! - [`RequestDecoder`]: Drives the transport and coordinates the parsers
//! - Request line parsing: the method, path and version of the first line
//! - Header parsing: uses [`decode_header_field`] for every following line
//! - Body capture: governed by [`BodyPolicy`]
//!
//! # Example
//!
//! ```no_run
//! use micro_wot_http::codec::RequestDecoder;
//! use micro_wot_http::transport::IoTransport;
//!
//! let mut transport = IoTransport::new(&b"GET /status HTTP/1.1\r\n\r\n"[..], Vec::new());
//! let mut line_buf = [0u8; 256];
//! let mut path_buf = [0u8; 64];
//!
//! let request = RequestDecoder::new().decode(&mut transport, &mut line_buf, &mut path_buf);
//! ```

use std::str;

use tracing::{debug, trace};

use crate::codec::header::{HeaderFieldState, decode_header_field};
use crate::codec::request_line::parse_request_line;
use crate::ensure;
use crate::protocol::{ParseError, Request, RequestHead};
use crate::transport::{LineRead, Transport};

/// How the request body is read once the header section has ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Read exactly `Content-Length` bytes, across as many line reads as needed.
    ///
    /// No read happens when the length is zero. A body larger than the line buffer
    /// is rejected rather than truncated.
    #[default]
    ContentLength,
    /// Perform exactly one more line read and take whatever it stores as the body,
    /// regardless of `Content-Length`. End of stream yields an empty body and
    /// anything longer than the line buffer is cut off.
    SingleRead,
}

/// A decoder for Thing requests.
///
/// The decoder works in three phases:
/// 1. Request line: one complete line, parsed into the operation and the path
/// 2. Header fields: complete lines until the empty line ending the section
/// 3. Body: read into the line buffer according to the [`BodyPolicy`]
#[derive(Debug, Copy, Clone, Default)]
pub struct RequestDecoder {
    body_policy: BodyPolicy,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` reading bodies by `Content-Length`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_policy(body_policy: BodyPolicy) -> Self {
        Self { body_policy }
    }

    /// Decodes one request.
    ///
    /// The returned request borrows its path from `path_buf` and its content from
    /// `line_buf`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - the transport fails, or the stream ends before the request is complete
    /// - a request or header line does not fit into `line_buf`
    /// - the request line or a header line is malformed
    /// - the method is not `GET`, `PUT` or `POST`
    /// - the path does not fit into `path_buf` or is not UTF-8
    /// - `Content-Length` is invalid, overflows, or exceeds `line_buf`
    pub fn decode<'buf, T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        line_buf: &'buf mut [u8],
        path_buf: &'buf mut [u8],
    ) -> Result<Request<'buf>, ParseError> {
        let line_size = read_complete_line(transport, line_buf)?;
        let (operation, path_size) = parse_request_line(&line_buf[..line_size], path_buf)?;

        let path_buf: &'buf [u8] = path_buf;
        let path = str::from_utf8(&path_buf[..path_size]).map_err(|_| ParseError::InvalidPath)?;

        let mut head = RequestHead::new(operation);
        loop {
            let line_size = read_complete_line(transport, line_buf)?;
            match decode_header_field(&line_buf[..line_size], &mut head)? {
                HeaderFieldState::Continue => {}
                HeaderFieldState::End => break,
            }
        }

        let content_size = match self.body_policy {
            BodyPolicy::ContentLength => read_content_length(transport, line_buf, head.content_length)?,
            BodyPolicy::SingleRead => read_single(transport, line_buf)?,
        };

        let line_buf: &'buf [u8] = line_buf;
        let request = head.into_request(path, &line_buf[..content_size]);

        debug!(
            method = %request.operation.method(),
            path = request.path,
            content_type = ?request.content_type,
            content_length = request.content_length,
            content_size,
            "decoded request"
        );
        Ok(request)
    }
}

/// Reads a line that must end with a line feed.
fn read_complete_line<T: Transport + ?Sized>(transport: &mut T, line_buf: &mut [u8]) -> Result<usize, ParseError> {
    match transport.read_line(line_buf)? {
        LineRead::Complete(n) => Ok(n),
        LineRead::Incomplete(n) if n >= line_buf.len() => Err(ParseError::line_too_long(line_buf.len())),
        LineRead::Incomplete(_) | LineRead::EndOfStream => Err(ParseError::UnexpectedEof),
    }
}

fn read_content_length<T: Transport + ?Sized>(
    transport: &mut T,
    line_buf: &mut [u8],
    content_length: u32,
) -> Result<usize, ParseError> {
    let length = usize::try_from(content_length).unwrap_or(usize::MAX);
    ensure!(length <= line_buf.len(), ParseError::body_too_large(length, line_buf.len()));

    let mut filled = 0;
    while filled < length {
        // bounding the region keeps bytes past the body in the transport
        let read = transport.read_line(&mut line_buf[filled..length])?;
        ensure!(!read.is_empty(), ParseError::UnexpectedEof);
        filled += read.len();
        trace!(filled, length, "read body");
    }

    Ok(length)
}

fn read_single<T: Transport + ?Sized>(transport: &mut T, line_buf: &mut [u8]) -> Result<usize, ParseError> {
    let read = transport.read_line(line_buf)?;
    if read == LineRead::EndOfStream {
        trace!("no body before end of stream");
    }
    Ok(read.len())
}
