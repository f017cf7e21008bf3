use tracing::{debug, error, warn};

use crate::codec::{BodyPolicy, DefaultStatusLine, RequestDecoder, ResponseEncoder, StatusLine};
use crate::handler::Handler;
use crate::protocol::{HttpError, ParseError, Request, Response, SendError, Status};
use crate::transport::Transport;

/// A Thing connection that runs request/response exchanges over a transport
///
/// `ThingConnection` bundles everything one exchange needs:
/// - the transport the bytes travel through
/// - the line buffer, reused for request lines, the request body and the
///   formatted response `Content-Length`
/// - the path buffer holding the request path
/// - the decoder and encoder configuration
///
/// # Type Parameters
///
/// * `T`: The transport type
/// * `S`: The reason phrase style of status lines, see [`StatusLine`]
#[derive(Debug)]
pub struct ThingConnection<'buf, T, S = DefaultStatusLine> {
    transport: T,
    line_buf: &'buf mut [u8],
    path_buf: &'buf mut [u8],
    decoder: RequestDecoder,
    encoder: ResponseEncoder<S>,
}

impl<'buf, T: Transport> ThingConnection<'buf, T> {
    pub fn new(transport: T, line_buf: &'buf mut [u8], path_buf: &'buf mut [u8]) -> Self {
        Self { transport, line_buf, path_buf, decoder: RequestDecoder::new(), encoder: ResponseEncoder::new() }
    }
}

impl<'buf, T: Transport, S: StatusLine> ThingConnection<'buf, T, S> {
    pub fn with_body_policy(mut self, body_policy: BodyPolicy) -> Self {
        self.decoder = RequestDecoder::with_body_policy(body_policy);
        self
    }

    /// Switches the reason phrase style of status lines.
    pub fn with_status_line<S2: StatusLine>(self) -> ThingConnection<'buf, T, S2> {
        ThingConnection {
            transport: self.transport,
            line_buf: self.line_buf,
            path_buf: self.path_buf,
            decoder: self.decoder,
            encoder: ResponseEncoder::new(),
        }
    }

    pub fn transport(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Receives one request.
    ///
    /// The request borrows the connection's buffers and has to be dropped before the
    /// connection is used again.
    ///
    /// # Errors
    ///
    /// See [`RequestDecoder::decode`].
    pub fn recv(&mut self) -> Result<Request<'_>, ParseError> {
        self.decoder.decode(&mut self.transport, self.line_buf, self.path_buf)
    }

    /// Sends one response and flushes the transport.
    ///
    /// # Errors
    ///
    /// See [`ResponseEncoder::encode`]; a failed flush is reported as well.
    pub fn send(&mut self, response: &Response<'_>) -> Result<(), SendError> {
        self.encoder.encode(response, &mut self.transport, self.line_buf)?;
        self.transport.flush()?;
        Ok(())
    }

    /// Runs a single exchange: receives a request, lets `handler` answer it and sends
    /// the response.
    ///
    /// A request that cannot be decoded is answered with `400 Bad Request`, or
    /// `405 Method Not Allowed` for an unsupported method, unless the transport
    /// itself failed or the stream ended early.
    ///
    /// # Errors
    ///
    /// Returns the decode or send failure. The exchange is over either way.
    pub fn process<H: Handler + ?Sized>(&mut self, handler: &mut H) -> Result<(), HttpError> {
        let request = match self.decoder.decode(&mut self.transport, self.line_buf, self.path_buf) {
            Ok(request) => request,
            Err(e) => {
                error!(cause = %e, "can't receive request");
                self.reject(&e);
                return Err(e.into());
            }
        };

        let response = handler.call(&request);
        debug!(has_content = request.has_content(), status = ?response.status, "handler answered");

        if let Err(e) = self.send(&response) {
            error!(cause = %e, "can't send response");
            return Err(e.into());
        }
        Ok(())
    }

    fn reject(&mut self, e: &ParseError) {
        let status = match e {
            ParseError::Transport { .. } | ParseError::UnexpectedEof => return,
            ParseError::UnsupportedMethod => Status::MethodNotAllowed,
            _ => Status::BadRequest,
        };

        if let Err(send_error) = self.send(&Response::new(status)) {
            warn!(cause = %send_error, "can't send error response");
        }
    }
}
