//! An allocation-free HTTP/1.1 codec for Web of Things devices
//!
//! This crate translates between a line-oriented byte stream and a small "Thing"
//! request/response model. It understands just enough HTTP/1.1 for a device to
//! expose properties and actions: the `GET`, `PUT` and `POST` methods, a handful of
//! status codes and four content types.
//!
//! All state lives in fixed-size buffers supplied by the caller and the codec path
//! never allocates, which makes it usable on devices with a few kilobytes of RAM.
//!
//! # Features
//!
//! - `GET`/`PUT`/`POST` mapped to read property, write property and invoke action
//! - `Content-Type` and `Content-Length` header handling
//! - Body capture by `Content-Length` or by a single read
//! - Borrowed request views checked by the borrow checker
//! - Reason phrases switchable with the `reason-phrase` cargo feature
//! - Host I/O behind a small [`transport::Transport`] trait
//!
//! # Example
//!
//! ```no_run
//! use std::io::BufReader;
//! use std::net::TcpListener;
//!
//! use micro_wot_http::connection::ThingConnection;
//! use micro_wot_http::handler::make_handler;
//! use micro_wot_http::protocol::{ContentType, Request, Response, Status};
//! use micro_wot_http::transport::IoTransport;
//! use tracing::{error, info};
//!
//! fn thing(request: &Request<'_>) -> Response<'static> {
//!     info!(path = request.path, "request path");
//!     match request.path {
//!         "/properties/on" => Response::with_content(Status::Ok, ContentType::Json, b"true"),
//!         _ => Response::new(Status::Unsupported),
//!     }
//! }
//!
//! fn main() -> std::io::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080")?;
//!     let mut handler = make_handler(thing);
//!
//!     let mut line_buf = [0u8; 512];
//!     let mut path_buf = [0u8; 64];
//!
//!     for stream in listener.incoming() {
//!         let stream = stream?;
//!         let transport = IoTransport::new(BufReader::new(stream.try_clone()?), stream);
//!         let mut connection = ThingConnection::new(transport, &mut line_buf, &mut path_buf);
//!         if let Err(e) = connection.process(&mut handler) {
//!             error!(cause = %e, "exchange failed");
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`transport`]: The seam to the host byte stream
//! - [`protocol`]: Request, response and error types
//! - [`codec`]: Request decoding and response encoding
//! - [`connection`]: One request/response exchange over a transport
//! - [`handler`]: The Thing dispatcher trait and utilities
//!
//! # Core Components
//!
//! ## Buffers
//!
//! A connection works with two buffers. The line buffer receives every request line,
//! then the body, and later holds the formatted `Content-Length` of the response. The path
//! buffer keeps a copy of the request path while the line buffer is refilled. A
//! decoded [`protocol::Request`] borrows both, so it must be dropped before the
//! buffers are used again.
//!
//! ## Error Handling
//!
//! The crate uses custom error types that implement `std::error::Error`:
//!
//! - [`protocol::HttpError`]: Top-level error type
//! - [`protocol::ParseError`]: Request decoding errors
//! - [`protocol::SendError`]: Response encoding errors
//! - [`protocol::TransportError`]: Failures of the host transport
//!
//! # Limitations
//!
//! - One exchange per call, no keep-alive or pipelining
//! - No chunked transfer encoding
//! - Only `Content-Type` and `Content-Length` are interpreted
//! - Bodies must fit into the line buffer

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;
pub mod transport;

mod utils;
pub(crate) use utils::ensure;
