//! Thing response representation.
//!
//! Responses borrow their content from the caller; the encoder writes it out
//! verbatim and never copies it.

use http::StatusCode;

use crate::protocol::ContentType;

/// Outcome of a Thing operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Status {
    Ok,
    BadRequest,
    /// The addressed affordance does not exist
    Unsupported,
    MethodNotAllowed,
    NotImplemented,
    Error,
    #[default]
    Unknown,
}

impl Status {
    /// The HTTP status code sent for this outcome. `Error` and `Unknown` both map to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unsupported => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::Error | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A Thing response ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response<'a> {
    pub status: Status,
    /// `None` is written as `text/plain`
    pub content_type: Option<ContentType>,
    pub content_length: u32,
    /// `None` sends no `Content-Type`/`Content-Length` headers at all
    pub content: Option<&'a [u8]>,
}

impl<'a> Response<'a> {
    /// A response with no payload.
    pub fn new(status: Status) -> Self {
        Self { status, ..Default::default() }
    }

    /// A response carrying `content`. The content length is taken from the slice.
    ///
    /// Content longer than `u32::MAX` bytes is sent as its first `u32::MAX` bytes.
    pub fn with_content(status: Status, content_type: ContentType, content: &'a [u8]) -> Self {
        let content_length = saturating_content_length(content.len());
        Self { status, content_type: Some(content_type), content_length, content: Some(content) }
    }
}

fn saturating_content_length(size: usize) -> u32 {
    u32::try_from(size).unwrap_or(u32::MAX)
}
