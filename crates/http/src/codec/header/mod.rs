//! HTTP header processing module for encoding and decoding headers
//!
//! # Components
//!
//! - [`decode_header_field`]: Decodes a single request header line
//!   - Splits the line into a [`HeaderField`] key and trimmed value
//!   - Folds `Content-Type` and `Content-Length` into the request head
//!   - Reports the end of the header section through [`HeaderFieldState`]
//!
//! - [`HeaderEncoder`]: Encodes the response status line and header lines
//!   - Reason phrase verbosity chosen by a [`StatusLine`] strategy
//!   - Fixed lines come from static tables, only the `Content-Length` digits are
//!     formatted into the scratch buffer

mod header_decoder;
mod header_encoder;

pub use header_decoder::{HeaderField, HeaderFieldState, decode_header_field};
pub use header_encoder::{DefaultStatusLine, HeaderEncoder, StatusLine, Terse, Verbose};
