//! HTTP header field decoding, one line at a time.
//!
//! The request decoder refills the line buffer for every header line and hands each
//! line to [`decode_header_field`]. Recognized fields are folded into the
//! [`RequestHead`]; everything else is skipped. A bare CRLF ends the header section.
//!
//! # Recognized fields
//!
//! - `Content-Type`: one of the four supported media types, anything else is kept
//!   as [`ContentType::Unknown`]
//! - `Content-Length`: a decimal `u32`
//!
//! Keys and `Content-Type` values are matched ignoring ASCII case.

use http::header;
use tracing::trace;

use crate::ensure;
use crate::protocol::{ContentType, ParseError, RequestHead};
use crate::utils::{token_eq_ignore_ascii_case, trim_ows};

/// What the caller should do after a header line has been decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeaderFieldState {
    /// More header lines follow
    Continue,
    /// The empty line ending the header section was seen
    End,
}

/// A header line split into its key and trimmed value.
///
/// Both are views into the line they were parsed from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HeaderField<'line> {
    pub key: &'line [u8],
    pub value: &'line [u8],
}

impl<'line> HeaderField<'line> {
    /// Splits `line` into a key and a value.
    ///
    /// Returns `Ok(None)` for the empty line ending the header section.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHeader`] if the line has no `:` or if its first
    /// CR after the `:` is not followed by LF.
    pub fn parse(line: &'line [u8]) -> Result<Option<Self>, ParseError> {
        if line.starts_with(b"\r\n") {
            return Ok(None);
        }

        let colon = line
            .iter()
            .position(|b| *b == b':')
            .ok_or(ParseError::malformed_header("missing colon"))?;
        let key = &line[..colon];
        let rest = &line[colon + 1..];

        let cr = rest
            .iter()
            .position(|b| *b == b'\r')
            .ok_or(ParseError::malformed_header("missing CRLF"))?;
        ensure!(rest.get(cr + 1) == Some(&b'\n'), ParseError::malformed_header("CR not followed by LF"));

        Ok(Some(Self { key, value: trim_ows(&rest[..cr]) }))
    }
}

/// Decodes one header line into `head`.
///
/// # Errors
///
/// - [`ParseError::MalformedHeader`] if the line is not a header field
/// - [`ParseError::InvalidContentLength`] if `Content-Length` is empty or not decimal
/// - [`ParseError::ContentLengthOverflow`] if `Content-Length` does not fit a `u32`
pub fn decode_header_field(line: &[u8], head: &mut RequestHead) -> Result<HeaderFieldState, ParseError> {
    let Some(field) = HeaderField::parse(line)? else {
        trace!("end of header section");
        return Ok(HeaderFieldState::End);
    };

    if token_eq_ignore_ascii_case(field.key, header::CONTENT_TYPE.as_str().as_bytes()) {
        let content_type = ContentType::from_header_value(field.value);
        trace!(?content_type, "parsed content-type");
        head.content_type = Some(content_type);
    } else if token_eq_ignore_ascii_case(field.key, header::CONTENT_LENGTH.as_str().as_bytes()) {
        let content_length = parse_content_length(field.value)?;
        trace!(content_length, "parsed content-length");
        head.content_length = content_length;
    }

    Ok(HeaderFieldState::Continue)
}

fn parse_content_length(value: &[u8]) -> Result<u32, ParseError> {
    ensure!(!value.is_empty(), ParseError::invalid_content_length("empty value"));

    value.iter().try_fold(0u32, |length, b| {
        ensure!(b.is_ascii_digit(), ParseError::invalid_content_length("value is not a decimal number"));
        length
            .checked_mul(10)
            .and_then(|length| length.checked_add(u32::from(b - b'0')))
            .ok_or(ParseError::ContentLengthOverflow)
    })
}
