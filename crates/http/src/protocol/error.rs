use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },
}

/// Failure reported by the host transport.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("transport closed")]
    Closed,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },

    #[error("unexpected end of stream")]
    UnexpectedEof,

    #[error("line does not fit into the {capacity} bytes line buffer")]
    LineTooLong { capacity: usize },

    #[error("malformed request line: {reason}")]
    MalformedRequestLine { reason: &'static str },

    #[error("unsupported http method")]
    UnsupportedMethod,

    #[error("path of {length} bytes does not fit into the {capacity} bytes path buffer")]
    PathTooLong { length: usize, capacity: usize },

    #[error("path is not valid utf-8")]
    InvalidPath,

    #[error("malformed header field: {reason}")]
    MalformedHeader { reason: &'static str },

    #[error("invalid content-length header: {reason}")]
    InvalidContentLength { reason: &'static str },

    #[error("content-length exceeds {max}", max = u32::MAX)]
    ContentLengthOverflow,

    #[error("body of {length} bytes does not fit into the {capacity} bytes line buffer")]
    BodyTooLarge { length: usize, capacity: usize },
}

impl ParseError {
    pub fn line_too_long(capacity: usize) -> Self {
        Self::LineTooLong { capacity }
    }

    pub fn malformed_request_line(reason: &'static str) -> Self {
        Self::MalformedRequestLine { reason }
    }

    pub fn path_too_long(length: usize, capacity: usize) -> Self {
        Self::PathTooLong { length, capacity }
    }

    pub fn malformed_header(reason: &'static str) -> Self {
        Self::MalformedHeader { reason }
    }

    pub fn invalid_content_length(reason: &'static str) -> Self {
        Self::InvalidContentLength { reason }
    }

    pub fn body_too_large(length: usize, capacity: usize) -> Self {
        Self::BodyTooLarge { length, capacity }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: TransportError,
    },

    #[error("line does not fit into the {capacity} bytes scratch buffer")]
    ScratchTooSmall { capacity: usize },

    #[error("content-length {declared} exceeds the {actual} bytes of content")]
    ContentLengthMismatch { declared: u32, actual: usize },
}

impl SendError {
    pub fn scratch_too_small(capacity: usize) -> Self {
        Self::ScratchTooSmall { capacity }
    }

    pub fn content_length_mismatch(declared: u32, actual: usize) -> Self {
        Self::ContentLengthMismatch { declared, actual }
    }
}
