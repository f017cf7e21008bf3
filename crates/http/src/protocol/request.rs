//! Thing request representation.
//!
//! A decoded request never owns its data: the path is a view into the caller's
//! path buffer and the content a view into the line buffer. Both views end when
//! the connection reuses its buffers for the next exchange.

use http::Method;

use crate::protocol::ContentType;

/// The Web of Things operation a request asks for, derived from its HTTP method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET`
    ReadProperty,
    /// `PUT`
    WriteProperty,
    /// `POST`
    InvokeAction,
}

impl Operation {
    /// Maps a request method token to an operation.
    ///
    /// Methods are case-sensitive; anything outside `GET`, `PUT` and `POST` is `None`.
    pub fn from_method(token: &[u8]) -> Option<Self> {
        if token == Method::GET.as_str().as_bytes() {
            Some(Self::ReadProperty)
        } else if token == Method::PUT.as_str().as_bytes() {
            Some(Self::WriteProperty)
        } else if token == Method::POST.as_str().as_bytes() {
            Some(Self::InvokeAction)
        } else {
            None
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::ReadProperty => Method::GET,
            Self::WriteProperty => Method::PUT,
            Self::InvokeAction => Method::POST,
        }
    }
}

/// Everything a request carries besides its borrowed views.
///
/// The decoder fills this in while walking the request line and the header
/// section, then attaches the path and content with [`RequestHead::into_request`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestHead {
    pub operation: Operation,
    /// `None` when no `Content-Type` header was present
    pub content_type: Option<ContentType>,
    pub content_length: u32,
}

impl RequestHead {
    pub fn new(operation: Operation) -> Self {
        Self { operation, content_type: None, content_length: 0 }
    }

    pub fn into_request<'buf>(self, path: &'buf str, content: &'buf [u8]) -> Request<'buf> {
        Request {
            operation: self.operation,
            path,
            content_type: self.content_type,
            content_length: self.content_length,
            content,
        }
    }
}

/// A decoded Thing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request<'buf> {
    pub operation: Operation,
    pub path: &'buf str,
    pub content_type: Option<ContentType>,
    pub content_length: u32,
    pub content: &'buf [u8],
}

impl Request<'_> {
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}
