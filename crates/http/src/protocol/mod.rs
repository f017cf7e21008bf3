//! Core Thing protocol abstractions.
//!
//! This module holds the values the codec produces and consumes. None of them own
//! heap memory: strings and payloads are borrowed views into buffers the caller
//! provides, so the types can live on a device without an allocator.
//!
//! # Architecture
//!
//! - **Request Processing** ([`request`]): decoded request values
//!   - [`Operation`]: the Web of Things operation derived from the HTTP method
//!   - [`RequestHead`]: fields collected while decoding the request line and headers
//!   - [`Request`]: the complete request, borrowing its path and content
//!
//! - **Response Processing** ([`response`]): values handed to the encoder
//!   - [`Status`]: operation outcome mapped to a status code
//!   - [`Response`]: status, content type and borrowed content
//!
//! - **Content Types** ([`content_type`]): the four supported media types
//!
//! - **Error Handling** ([`error`]): error types
//!   - [`HttpError`]: Top-level error type
//!   - [`ParseError`]: Request decoding errors
//!   - [`SendError`]: Response encoding errors
//!   - [`TransportError`]: Failures reported by the host transport

mod content_type;
pub use content_type::ContentType;
pub use content_type::{APPLICATION_JSON, APPLICATION_OCTET_STREAM, APPLICATION_TD_JSON, TEXT_PLAIN};

mod request;
pub use request::Operation;
pub use request::Request;
pub use request::RequestHead;

mod response;
pub use response::Response;
pub use response::Status;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
pub use error::TransportError;
