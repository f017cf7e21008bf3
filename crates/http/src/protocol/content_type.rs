//! Content types understood by a Thing.
//!
//! Only four media types are recognized; anything else a client sends is kept as
//! [`ContentType::Unknown`] so the dispatcher can reject it.

use crate::utils::token_eq_ignore_ascii_case;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
pub const APPLICATION_JSON: &str = "application/json";
/// The Thing Description media type.
pub const APPLICATION_TD_JSON: &str = "application/td+json";

/// Media type of a request or response payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    TextPlain,
    OctetStream,
    Json,
    TdJson,
    /// Header was present but named an unsupported media type
    Unknown,
}

impl ContentType {
    const KNOWN: [ContentType; 4] = [Self::TextPlain, Self::OctetStream, Self::Json, Self::TdJson];

    /// Matches a trimmed `Content-Type` header value, ignoring ASCII case.
    ///
    /// Never fails: unrecognized values map to [`ContentType::Unknown`].
    pub fn from_header_value(value: &[u8]) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|content_type| token_eq_ignore_ascii_case(value, content_type.as_str().as_bytes()))
            .unwrap_or(Self::Unknown)
    }

    /// The essence string written on the wire.
    ///
    /// [`ContentType::Unknown`] falls back to `text/plain`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OctetStream => APPLICATION_OCTET_STREAM,
            Self::Json => APPLICATION_JSON,
            Self::TdJson => APPLICATION_TD_JSON,
            Self::TextPlain | Self::Unknown => TEXT_PLAIN,
        }
    }
}
