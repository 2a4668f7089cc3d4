use crate::handler::{BoxHandler, BoxMiddleware, Context};
use http::Response;
use std::fmt;

/// Composes `handler` with `middleware` into a single handler.
///
/// The first middleware in the slice ends up outermost: for `[a, b]` the
/// call order is `a`, `b`, `handler`, and the responses travel back through
/// `b` then `a`.
pub fn compose<B: 'static, R: 'static>(
    handler: BoxHandler<B, R>,
    middleware: &[BoxMiddleware<B, R>],
) -> BoxHandler<B, R> {
    middleware
        .iter()
        .rev()
        .fold(handler, |next, m| m.wrap(next))
}

/// A registered route.
///
/// Contains the pattern, the middleware captured when the route was
/// registered, and the handler.
pub struct Route<B, R> {
    pattern: String,
    middleware: Vec<BoxMiddleware<B, R>>,
    handler: BoxHandler<B, R>,
}

impl<B: 'static, R: 'static> Route<B, R> {
    /// Creates a route from its pattern, handler and the middleware that
    /// wraps it, outermost first.
    pub fn new(
        pattern: impl Into<String>,
        handler: BoxHandler<B, R>,
        middleware: Vec<BoxMiddleware<B, R>>,
    ) -> Self {
        Route {
            pattern: pattern.into(),
            middleware,
            handler,
        }
    }

    /// Returns the pattern this route was registered with.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Runs the handler through the middleware chain.
    ///
    /// The chain is rebuilt on every call, so no wrapper state outlives a
    /// request.
    pub fn serve(&self, ctx: Context<B>) -> Response<R> {
        compose(self.handler.clone(), &self.middleware).call(ctx)
    }
}

impl<B, R> fmt::Debug for Route<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("middleware", &self.middleware.len())
            .field("handler", &"<handler>")
            .finish()
    }
}
