use std::io::{BufReader, Cursor, Write};
use std::net::TcpListener;

use micro_wot_http::connection::ThingConnection;
use micro_wot_http::handler::Handler;
use micro_wot_http::protocol::{ContentType, Operation, Request, Response, Status};
use micro_wot_http::transport::IoTransport;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

const THING_DESCRIPTION: &[u8] = br#"{"title":"Lamp","properties":{"on":{"type":"boolean"},"brightness":{"type":"integer","minimum":0,"maximum":100}},"actions":{"toggle":{}}}"#;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080") {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return;
        }
    };

    let mut lamp = Lamp { on: false, brightness: 100, value_buf: [0; 16] };
    let mut line_buf = [0u8; 512];
    let mut path_buf = [0u8; 64];

    for tcp_stream in tcp_listener.incoming() {
        let tcp_stream = match tcp_stream {
            Ok(tcp_stream) => tcp_stream,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };
        let reader = match tcp_stream.try_clone() {
            Ok(reader) => BufReader::new(reader),
            Err(e) => {
                warn!(cause = %e, "failed to clone stream");
                continue;
            }
        };

        let mut connection = ThingConnection::new(IoTransport::new(reader, tcp_stream), &mut line_buf, &mut path_buf);
        match connection.process(&mut lamp) {
            Ok(()) => info!("finished exchange, connection shutdown"),
            Err(e) => error!(cause = %e, "exchange failed, connection shutdown"),
        }
    }
}

struct Lamp {
    on: bool,
    brightness: u8,
    value_buf: [u8; 16],
}

impl Lamp {
    fn value(&mut self, value: impl std::fmt::Display) -> Response<'_> {
        let mut cursor = Cursor::new(&mut self.value_buf[..]);
        if write!(cursor, "{value}").is_err() {
            return Response::new(Status::Error);
        }
        let length = usize::try_from(cursor.position()).unwrap_or(0);
        Response::with_content(Status::Ok, ContentType::Json, &self.value_buf[..length])
    }
}

impl Handler for Lamp {
    fn call<'h>(&'h mut self, request: &Request<'_>) -> Response<'h> {
        match (request.operation, request.path) {
            (Operation::ReadProperty, "/") => Response::with_content(Status::Ok, ContentType::TdJson, THING_DESCRIPTION),
            (Operation::ReadProperty, "/properties/on") => self.value(self.on),
            (Operation::ReadProperty, "/properties/brightness") => self.value(self.brightness),
            (Operation::WriteProperty, "/properties/on") => match request.content {
                b"true" => {
                    self.on = true;
                    Response::new(Status::Ok)
                }
                b"false" => {
                    self.on = false;
                    Response::new(Status::Ok)
                }
                _ => Response::new(Status::BadRequest),
            },
            (Operation::WriteProperty, "/properties/brightness") => {
                match std::str::from_utf8(request.content).ok().and_then(|value| value.parse::<u8>().ok()) {
                    Some(brightness) if brightness <= 100 => {
                        self.brightness = brightness;
                        Response::new(Status::Ok)
                    }
                    _ => Response::new(Status::BadRequest),
                }
            }
            (Operation::InvokeAction, "/actions/toggle") => {
                self.on = !self.on;
                self.value(self.on)
            }
            (_, "/" | "/properties/on" | "/properties/brightness" | "/actions/toggle") => Response::new(Status::MethodNotAllowed),
            _ => Response::new(Status::Unsupported),
        }
    }
}
