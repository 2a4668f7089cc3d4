//! Handlers, middleware and the per-request context.

use crate::params::Params;
use http::{Request, Response};
use std::sync::Arc;

/// Everything a handler gets to see for one request.
///
/// The context owns the request and the parameters captured while routing
/// it, so handlers read path parameters directly instead of digging them
/// out of the request.
#[derive(Debug)]
pub struct Context<B> {
    request: Request<B>,
    params: Params,
}

impl<B> Context<B> {
    /// Bundles a request with the parameters captured for it.
    pub fn new(request: Request<B>, params: Params) -> Self {
        Context { request, params }
    }

    /// The request being handled.
    pub fn request(&self) -> &Request<B> {
        &self.request
    }

    /// Mutable access to the request, for middleware that rewrites it.
    pub fn request_mut(&mut self) -> &mut Request<B> {
        &mut self.request
    }

    /// The parameters captured for this request. Empty when the route has
    /// none.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shorthand for `self.params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Consumes the context, dropping the parameters.
    pub fn into_request(self) -> Request<B> {
        self.request
    }

    /// Consumes the context, returning the request and its parameters.
    pub fn into_parts(self) -> (Request<B>, Params) {
        (self.request, self.params)
    }
}

/// Something that turns a request into a response.
///
/// Implemented for every `Fn(Context<B>) -> Response<R>` closure that can be
/// shared across threads.
pub trait Handler<B, R>: Send + Sync + 'static {
    fn call(&self, ctx: Context<B>) -> Response<R>;
}

impl<F, B, R> Handler<B, R> for F
where
    F: Fn(Context<B>) -> Response<R> + Send + Sync + 'static,
{
    fn call(&self, ctx: Context<B>) -> Response<R> {
        self(ctx)
    }
}

/// A shared, type-erased handler.
pub type BoxHandler<B, R> = Arc<dyn Handler<B, R>>;

/// Wraps a handler in another handler.
///
/// ```
/// use charmux::{from_fn, BoxHandler, Context, Handler, Middleware};
/// use http::Response;
///
/// fn server_header(next: BoxHandler<(), String>) -> BoxHandler<(), String> {
///     from_fn(move |ctx: Context<()>| {
///         let mut res = next.call(ctx);
///         res.headers_mut().insert("server", "charmux".parse().unwrap());
///         res
///     })
/// }
///
/// let handler = server_header.wrap(from_fn(|_: Context<()>| Response::new(String::new())));
/// let res = handler.call(Context::new(http::Request::new(()), Default::default()));
/// assert_eq!(res.headers()["server"], "charmux");
/// ```
pub trait Middleware<B, R>: Send + Sync + 'static {
    fn wrap(&self, next: BoxHandler<B, R>) -> BoxHandler<B, R>;
}

impl<F, B, R> Middleware<B, R> for F
where
    F: Fn(BoxHandler<B, R>) -> BoxHandler<B, R> + Send + Sync + 'static,
{
    fn wrap(&self, next: BoxHandler<B, R>) -> BoxHandler<B, R> {
        self(next)
    }
}

/// A shared, type-erased middleware.
pub type BoxMiddleware<B, R> = Arc<dyn Middleware<B, R>>;

/// Boxes a closure into a [`BoxHandler`].
pub fn from_fn<B, R, F>(f: F) -> BoxHandler<B, R>
where
    F: Fn(Context<B>) -> Response<R> + Send + Sync + 'static,
{
    Arc::new(f)
}
