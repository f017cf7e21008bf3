//! HTTP codec module for decoding Thing requests and encoding Thing responses
//!
//! Both directions work line by line over a [`Transport`](crate::transport::Transport)
//! and keep all of their state in buffers owned by the caller.
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: Decodes an incoming request
//!   - Request line parsing of method, path and version
//!   - Header parsing via the [`header`] module
//!   - Body capture governed by [`BodyPolicy`]
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: Encodes an outgoing response
//!   - Status line and header encoding via the [`header`] module
//!   - Only the `Content-Length` digits are formatted, into the scratch buffer
//!
//! # Example
//!
//! ```no_run
//! use micro_wot_http::codec::{RequestDecoder, ResponseEncoder};
//! use micro_wot_http::protocol::{ContentType, Response, Status};
//! use micro_wot_http::transport::IoTransport;
//!
//! let mut transport = IoTransport::new(&b"GET /properties/on HTTP/1.1\r\n\r\n"[..], Vec::new());
//! let mut line_buf = [0u8; 256];
//! let mut path_buf = [0u8; 64];
//!
//! // Decode incoming request
//! let request = RequestDecoder::new().decode(&mut transport, &mut line_buf, &mut path_buf);
//!
//! // Encode outgoing response
//! let response = Response::with_content(Status::Ok, ContentType::Json, b"true");
//! let encoder: ResponseEncoder = ResponseEncoder::new();
//! encoder.encode(&response, &mut transport, &mut line_buf);
//! ```

pub mod header;
mod request_decoder;
mod request_line;
mod response_encoder;
mod scratch;

pub use header::{DefaultStatusLine, HeaderField, HeaderFieldState, StatusLine, Terse, Verbose, decode_header_field};
pub use request_decoder::{BodyPolicy, RequestDecoder};
pub use response_encoder::ResponseEncoder;
