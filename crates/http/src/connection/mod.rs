//! Thing connection handling module
//!
//! This module ties the codec to a transport and a handler. It implements the
//! request/response exchange a device runs for every incoming request.
//!
//! # Components
//!
//! - [`ThingConnection`]: Main connection handler that:
//!   - Owns the transport and borrows the line and path buffers
//!   - Decodes incoming requests
//!   - Encodes and flushes responses
//!   - Answers undecodable requests with an error status
//!
//! # Features
//!
//! - Synchronous, blocking I/O through the host transport
//! - One exchange in flight at a time, enforced by `&mut` access to the buffers
//! - No allocation on the exchange path

mod thing_connection;

pub use thing_connection::ThingConnection;
