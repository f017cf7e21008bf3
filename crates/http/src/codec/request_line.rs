//! Request line parsing.
//!
//! A request line has the shape `<METHOD> SP <PATH> SP HTTP/<version> CRLF`. The
//! method selects the [`Operation`], the path is copied out of the line buffer into
//! the caller's path buffer so it survives the line buffer being refilled by the
//! header loop, and the version is only checked for its `HTTP/` prefix.

use tracing::trace;

use crate::ensure;
use crate::protocol::{Operation, ParseError};

const VERSION_PREFIX: &[u8] = b"HTTP/";

/// Parses `line` and copies the path into `path_buf`.
///
/// Returns the operation and the number of path bytes stored at the start of
/// `path_buf`. A NUL is stored right after the path, so `path_buf` must be at least
/// one byte longer than the path.
///
/// # Errors
///
/// - [`ParseError::UnsupportedMethod`] for methods other than `GET`, `PUT`, `POST`
/// - [`ParseError::PathTooLong`] if the path and its terminator do not fit
/// - [`ParseError::MalformedRequestLine`] for any other structural mismatch
///
/// On error `path_buf` may hold a partial copy and must not be trusted.
pub(crate) fn parse_request_line(line: &[u8], path_buf: &mut [u8]) -> Result<(Operation, usize), ParseError> {
    let (method, rest) = split_at_space(line).ok_or(ParseError::malformed_request_line("missing space after method"))?;
    let operation = Operation::from_method(method).ok_or(ParseError::UnsupportedMethod)?;

    let (path, version) = split_at_space(rest).ok_or(ParseError::malformed_request_line("missing space after path"))?;
    ensure!(!path.is_empty(), ParseError::malformed_request_line("empty path"));
    ensure!(path_buf.len() > path.len(), ParseError::path_too_long(path.len(), path_buf.len()));

    ensure!(version.starts_with(VERSION_PREFIX), ParseError::malformed_request_line("missing HTTP/ version prefix"));
    let cr = version
        .iter()
        .position(|b| *b == b'\r')
        .ok_or(ParseError::malformed_request_line("missing CRLF"))?;
    ensure!(&version[cr..] == b"\r\n", ParseError::malformed_request_line("CR not followed by LF at line end"));

    path_buf[..path.len()].copy_from_slice(path);
    path_buf[path.len()] = 0;

    trace!(?operation, path_size = path.len(), "parsed request line");
    Ok((operation, path.len()))
}

fn split_at_space(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = bytes.iter().position(|b| *b == b' ')?;
    Some((&bytes[..i], &bytes[i + 1..]))
}
