//! HTTP status line and header line encoding.
//!
//! Status lines and `Content-Type` lines are fixed strings written straight from
//! static storage. Only the decimal `Content-Length` value is formatted, into the
//! scratch buffer, and it is formatted before the first byte of a response goes out.
//!
//! # Reason phrases
//!
//! Whether a status line carries a reason phrase is decided by a [`StatusLine`]
//! strategy type: [`Verbose`] writes `HTTP/1.1 200 OK`, [`Terse`] writes
//! `HTTP/1.1 200 ` and saves the bytes. [`DefaultStatusLine`] follows the
//! `reason-phrase` cargo feature.

use std::fmt::Write;

use crate::codec::scratch::ScratchWriter;
use crate::protocol::{ContentType, SendError, Status};
use crate::transport::Transport;

const CRLF: &[u8] = b"\r\n";
const CONTENT_LENGTH_PREFIX: &[u8] = b"Content-Length: ";

/// Chooses the status line written for a [`Status`].
pub trait StatusLine {
    /// The complete status line, CRLF included.
    fn status_line(status: Status) -> &'static str;
}

/// Writes the canonical reason phrase, e.g. `HTTP/1.1 404 Not Found`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Verbose;

/// Writes an empty reason phrase, e.g. `HTTP/1.1 404 `.
#[derive(Debug, Copy, Clone, Default)]
pub struct Terse;

impl StatusLine for Verbose {
    fn status_line(status: Status) -> &'static str {
        match status {
            Status::Ok => "HTTP/1.1 200 OK\r\n",
            Status::BadRequest => "HTTP/1.1 400 Bad Request\r\n",
            Status::Unsupported => "HTTP/1.1 404 Not Found\r\n",
            Status::MethodNotAllowed => "HTTP/1.1 405 Method Not Allowed\r\n",
            Status::NotImplemented => "HTTP/1.1 501 Not Implemented\r\n",
            Status::Error | Status::Unknown => "HTTP/1.1 500 Internal Server Error\r\n",
        }
    }
}

impl StatusLine for Terse {
    fn status_line(status: Status) -> &'static str {
        match status {
            Status::Ok => "HTTP/1.1 200 \r\n",
            Status::BadRequest => "HTTP/1.1 400 \r\n",
            Status::Unsupported => "HTTP/1.1 404 \r\n",
            Status::MethodNotAllowed => "HTTP/1.1 405 \r\n",
            Status::NotImplemented => "HTTP/1.1 501 \r\n",
            Status::Error | Status::Unknown => "HTTP/1.1 500 \r\n",
        }
    }
}

#[cfg(feature = "reason-phrase")]
pub type DefaultStatusLine = Verbose;

#[cfg(not(feature = "reason-phrase"))]
pub type DefaultStatusLine = Terse;

/// Encoder for the status line and the payload header fields.
#[derive(Debug, Default)]
pub struct HeaderEncoder;

impl HeaderEncoder {
    pub fn encode_status_line<S: StatusLine, T: Transport + ?Sized>(&self, status: Status, transport: &mut T) -> Result<(), SendError> {
        transport.write(S::status_line(status).as_bytes())?;
        Ok(())
    }

    /// Writes the `Content-Type` line; [`ContentType::Unknown`] is sent as `text/plain`.
    pub fn encode_content_type<T: Transport + ?Sized>(&self, content_type: ContentType, transport: &mut T) -> Result<(), SendError> {
        transport.write(content_type_line(content_type).as_bytes())?;
        Ok(())
    }

    /// Formats `content_length` as decimal digits at the start of `scratch`.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::ScratchTooSmall`] if the digits do not fit. At most ten
    /// bytes are needed.
    pub fn format_content_length<'s>(&self, content_length: u32, scratch: &'s mut [u8]) -> Result<&'s [u8], SendError> {
        let mut writer = ScratchWriter::new(scratch);
        if write!(writer, "{content_length}").is_err() {
            return Err(SendError::scratch_too_small(writer.capacity()));
        }
        Ok(writer.into_bytes())
    }

    /// Writes the `Content-Length` line around digits from [`HeaderEncoder::format_content_length`].
    pub fn encode_content_length<T: Transport + ?Sized>(&self, digits: &[u8], transport: &mut T) -> Result<(), SendError> {
        transport.write(CONTENT_LENGTH_PREFIX)?;
        transport.write(digits)?;
        transport.write(CRLF)?;
        Ok(())
    }

    pub fn encode_end_of_header<T: Transport + ?Sized>(&self, transport: &mut T) -> Result<(), SendError> {
        transport.write(CRLF)?;
        Ok(())
    }
}

fn content_type_line(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::OctetStream => "Content-Type: application/octet-stream\r\n",
        ContentType::Json => "Content-Type: application/json\r\n",
        ContentType::TdJson => "Content-Type: application/td+json\r\n",
        ContentType::TextPlain | ContentType::Unknown => "Content-Type: text/plain\r\n",
    }
}
