//! The Thing dispatcher sitting above the codec.
//!
//! A [`Handler`] turns a decoded [`Request`] into a [`Response`]. The response may
//! borrow from the handler itself, so a handler can serialize property values into
//! a buffer it owns and hand out a view of it.

use crate::protocol::{Request, Response};

pub trait Handler {
    fn call<'h>(&'h mut self, request: &Request<'_>) -> Response<'h>;
}

impl<H: Handler + ?Sized> Handler for &mut H {
    fn call<'h>(&'h mut self, request: &Request<'_>) -> Response<'h> {
        (**self).call(request)
    }
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request<'_>) -> Response<'static>,
{
    fn call<'h>(&'h mut self, request: &Request<'_>) -> Response<'h> {
        (self.f)(request)
    }
}

/// Wraps a function answering requests with static content into a [`Handler`].
pub fn make_handler<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request<'_>) -> Response<'static>,
{
    HandlerFn { f }
}
