use std::marker::PhantomData;

use tracing::{debug, error};

use crate::codec::header::{DefaultStatusLine, HeaderEncoder, StatusLine};
use crate::protocol::{ContentType, Response, SendError};
use crate::transport::Transport;

/// An encoder for Thing responses.
///
/// Writes, in order: the status line; then either a blank line alone when the
/// response has no content, or `Content-Type`, `Content-Length`, a blank line and
/// the raw content. The first failed write aborts the encode.
///
/// Everything that can be checked up front is checked before the first write, so a
/// response is never cut short by the encoder itself.
///
/// The type parameter picks the reason phrase style, see [`StatusLine`].
#[derive(Debug)]
pub struct ResponseEncoder<S = DefaultStatusLine> {
    header_encoder: HeaderEncoder,
    status_line: PhantomData<S>,
}

impl<S: StatusLine> ResponseEncoder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `response` into `transport`, formatting the `Content-Length` value in
    /// `scratch`.
    ///
    /// # Errors
    ///
    /// Returns `SendError` if:
    /// - `content_length` is larger than the content slice
    /// - the `Content-Length` digits do not fit into `scratch`
    /// - a transport write fails
    pub fn encode<T: Transport + ?Sized>(&self, response: &Response<'_>, transport: &mut T, scratch: &mut [u8]) -> Result<(), SendError> {
        let Some(content) = response.content else {
            self.header_encoder.encode_status_line::<S, _>(response.status, transport)?;
            self.header_encoder.encode_end_of_header(transport)?;
            debug!(status = %response.status.status_code(), "encoded response without content");
            return Ok(());
        };

        let length = usize::try_from(response.content_length).unwrap_or(usize::MAX);
        let Some(payload) = content.get(..length) else {
            error!(content_length = response.content_length, content_size = content.len(), "content shorter than content-length");
            return Err(SendError::content_length_mismatch(response.content_length, content.len()));
        };
        let digits = self.header_encoder.format_content_length(response.content_length, scratch)?;

        let content_type = response.content_type.unwrap_or(ContentType::TextPlain);
        self.header_encoder.encode_status_line::<S, _>(response.status, transport)?;
        self.header_encoder.encode_content_type(content_type, transport)?;
        self.header_encoder.encode_content_length(digits, transport)?;
        self.header_encoder.encode_end_of_header(transport)?;
        transport.write(payload)?;

        debug!(status = %response.status.status_code(), ?content_type, content_length = response.content_length, "encoded response");
        Ok(())
    }
}

impl<S> Default for ResponseEncoder<S> {
    fn default() -> Self {
        Self { header_encoder: HeaderEncoder, status_line: PhantomData }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::header::{HeaderField, Terse, Verbose};
    use crate::codec::request_line::parse_request_line;
    use crate::protocol::{ParseError, Status, TransportError};
    use crate::transport::{IoTransport, MockTransport};
    use bytes::BufMut;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn encode<S: StatusLine>(response: &Response<'_>) -> Vec<u8> {
        let mut transport = IoTransport::new(&b""[..], Vec::new());
        let mut scratch = [0u8; 64];
        ResponseEncoder::<S>::new().encode(response, &mut transport, &mut scratch).unwrap();
        transport.into_inner().1
    }

    #[test]
    fn ok_without_content() {
        assert_eq!(encode::<Verbose>(&Response::new(Status::Ok)), b"HTTP/1.1 200 OK\r\n\r\n");
        assert_eq!(encode::<Terse>(&Response::new(Status::Ok)), b"HTTP/1.1 200 \r\n\r\n");
    }

    #[test]
    fn ok_with_json_content() {
        let response = Response::with_content(Status::Ok, ContentType::Json, b"{}");
        assert_eq!(
            encode::<Verbose>(&response),
            b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\n\r\n{}"
        );
    }

    #[test]
    fn missing_or_unknown_content_type_is_text_plain() {
        let mut response = Response::with_content(Status::BadRequest, ContentType::Unknown, b"oops");
        let expected = b"HTTP/1.1 400 \r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\noops";
        assert_eq!(encode::<Terse>(&response), expected);

        response.content_type = None;
        assert_eq!(encode::<Terse>(&response), expected);
    }

    #[test]
    fn content_is_written_verbatim() {
        let content = b"\x00\x01line\r\n\xff";
        let response = Response::with_content(Status::Ok, ContentType::OctetStream, content);
        let written = encode::<Verbose>(&response);
        assert!(written.ends_with(b"Content-Length: 9\r\n\r\n\x00\x01line\r\n\xff"));
    }

    #[test]
    fn content_length_selects_a_prefix() {
        let mut response = Response::with_content(Status::Ok, ContentType::TextPlain, b"hello world");
        response.content_length = 5;
        assert!(encode::<Terse>(&response).ends_with(b"Content-Length: 5\r\n\r\nhello"));
    }

    #[test]
    fn content_length_beyond_content_fails_before_writing() {
        let mut response = Response::with_content(Status::Ok, ContentType::TextPlain, b"hi");
        response.content_length = 3;

        let mut transport = MockTransport::new();
        transport.expect_write().never();
        let mut scratch = [0u8; 64];
        let result = ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch);

        assert!(matches!(result, Err(SendError::ContentLengthMismatch { declared: 3, actual: 2 })));
    }

    #[test]
    fn writes_in_order() {
        let response = Response::with_content(Status::Unsupported, ContentType::TdJson, b"[]");

        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        for chunk in [
            &b"HTTP/1.1 404 Not Found\r\n"[..],
            b"Content-Type: application/td+json\r\n",
            b"Content-Length: ",
            b"2",
            b"\r\n",
            b"\r\n",
            b"[]",
        ] {
            transport.expect_write().with(eq(chunk)).times(1).in_sequence(&mut seq).returning(|_| Ok(()));
        }

        let mut scratch = [0u8; 64];
        ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch).unwrap();
    }

    #[test]
    fn first_failed_write_aborts() {
        let response = Response::with_content(Status::Ok, ContentType::Json, b"{}");

        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();
        transport.expect_write().times(1).in_sequence(&mut seq).returning(|_| Ok(()));
        transport.expect_write().times(1).in_sequence(&mut seq).returning(|_| Err(TransportError::Closed));

        let mut scratch = [0u8; 64];
        let result = ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch);

        assert!(matches!(result, Err(SendError::Transport { source: TransportError::Closed })));
    }

    #[test]
    fn scratch_only_holds_content_length_digits() {
        let response = Response::with_content(Status::MethodNotAllowed, ContentType::OctetStream, b"\x01");
        let mut transport = IoTransport::new(&b""[..], Vec::new());
        let mut scratch = [0u8; 1];
        ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch).unwrap();

        assert_eq!(&scratch, b"1");
        assert_eq!(
            transport.writer(),
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Type: application/octet-stream\r\nContent-Length: 1\r\n\r\n\x01"
        );
    }

    #[test]
    fn response_without_content_needs_no_scratch() {
        let mut transport = IoTransport::new(&b""[..], Vec::new());
        ResponseEncoder::<Verbose>::new().encode(&Response::new(Status::NotImplemented), &mut transport, &mut []).unwrap();
        assert_eq!(transport.writer(), b"HTTP/1.1 501 Not Implemented\r\n\r\n");
    }

    #[test]
    fn scratch_too_small_for_digits_fails_before_writing() {
        let response = Response::with_content(Status::Ok, ContentType::TextPlain, b"0123456789");

        let mut transport = MockTransport::new();
        transport.expect_write().never();
        let mut scratch = [0u8; 1];
        let result = ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch);

        assert!(matches!(result, Err(SendError::ScratchTooSmall { capacity: 1 })));
    }

    #[test]
    fn encoded_headers_parse_back() {
        let response = Response::with_content(Status::Ok, ContentType::TdJson, b"{\"title\":\"lamp\"}");

        let mut sink = bytes::BytesMut::new().writer();
        let mut transport = IoTransport::new(&b""[..], &mut sink);
        let mut scratch = [0u8; 64];
        ResponseEncoder::<Verbose>::new().encode(&response, &mut transport, &mut scratch).unwrap();
        let written = sink.into_inner().freeze();

        // the status line is no request line
        let mut lines = written.split_inclusive(|b| *b == b'\n');
        let status_line = lines.next().unwrap();
        assert_eq!(status_line, b"HTTP/1.1 200 OK\r\n");
        let mut path_buf = [0u8; 16];
        assert!(matches!(parse_request_line(status_line, &mut path_buf), Err(ParseError::UnsupportedMethod)));

        // walk the header lines the way a request is decoded
        let mut fields = Vec::new();
        for line in lines.by_ref() {
            match HeaderField::parse(line).unwrap() {
                Some(field) => fields.push((field.key, field.value)),
                None => break,
            }
        }
        assert_eq!(fields, [(&b"Content-Type"[..], &b"application/td+json"[..]), (&b"Content-Length"[..], &b"16"[..])]);
        assert_eq!(lines.next(), Some(&b"{\"title\":\"lamp\"}"[..]));

        // and an independent parser agrees
        let mut headers = [httparse::EMPTY_HEADER; 4];
        let mut parsed = httparse::Response::new(&mut headers);
        let status = parsed.parse(&written).unwrap();
        assert_eq!(parsed.code, Some(200));
        assert_eq!(parsed.reason, Some("OK"));
        assert_eq!(parsed.headers.len(), 2);
        assert_eq!(&written[status.unwrap()..], b"{\"title\":\"lamp\"}");
    }
}
