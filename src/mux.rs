//! The caller-facing front door.

use crate::error::{MatchError, RouteError};
use crate::handler::{BoxHandler, BoxMiddleware, Context, Handler, Middleware};
use crate::method::Method;
use crate::params::Params;
use crate::path::{clean_path, join};
use crate::route::Route;
use crate::router::MethodRouter;
use http::{Request, Response, StatusCode};
use std::fmt;
use std::sync::Arc;

/// Body of the default not-found response.
pub const NOT_FOUND_BODY: &str = "route not found";

/// A successful lookup: the route and the parameters captured for the path.
#[derive(Debug)]
pub struct Match<B, R> {
    pub route: Arc<Route<B, R>>,
    pub params: Params,
}

/// An HTTP request multiplexer.
///
/// `Mux` matches requests against the registered patterns and calls the
/// handler registered for the request method and path.
///
/// Patterns can contain named parameters:
/// ```text
///   /hello/:name
/// ```
/// matches `/hello/world`, and the handler sees the parameter `name` with
/// the value `world`.
///
/// Catch-all parameters are supported too:
/// ```text
///   /hello/*whatever
/// ```
/// matches `/hello/world`, `/hello/world/tanzania` and
/// `/hello/world/africa/tanzania.png`, binding `whatever` to `world`,
/// `world/tanzania` and `world/africa/tanzania.png`. A catch-all without a
/// name is bound to `catch`.
///
/// ```
/// use charmux::{Context, Mux};
/// use http::{Request, Response};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mux: Mux<(), String> = Mux::new();
/// mux.get("/hello/:name", |ctx: Context<()>| {
///     Response::new(format!("hello, {}", ctx.param("name").unwrap_or("stranger")))
/// })?;
///
/// let res = mux.serve(Request::get("/hello/world").body(())?);
/// assert_eq!(res.body(), "hello, world");
///
/// let res = mux.serve(Request::get("/goodbye").body(())?);
/// assert_eq!(res.status(), 404);
/// # Ok(())
/// # }
/// ```
pub struct Mux<B, R> {
    router: Arc<MethodRouter<Arc<Route<B, R>>>>,
    prefix: String,
    middleware: Vec<BoxMiddleware<B, R>>,
    not_found: BoxHandler<B, R>,

    /// If enabled, request paths are canonicalised before lookup: repeated
    /// slashes are collapsed and `.`/`..` elements are resolved, so
    /// `/a//b/../c` is routed as `/a/c`.
    pub clean_path: bool,
}

impl<B: 'static, R: From<&'static str> + 'static> Mux<B, R> {
    /// Returns a new mux whose unmatched requests get a `404 Not Found`.
    pub fn new() -> Self {
        Mux {
            router: Arc::new(MethodRouter::new()),
            prefix: String::new(),
            middleware: Vec::new(),
            not_found: Arc::new(default_not_found::<B, R>),
            clean_path: true,
        }
    }
}

impl<B: 'static, R: From<&'static str> + 'static> Default for Mux<B, R> {
    fn default() -> Self {
        Self::new()
    }
}

fn default_not_found<B, R: From<&'static str>>(_: Context<B>) -> Response<R> {
    let mut res = Response::new(R::from(NOT_FOUND_BODY));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res
}

impl<B: 'static, R: 'static> Mux<B, R> {
    /// Registers `handler` for `method` and `pattern`.
    ///
    /// The group prefix, if any, is prepended to the pattern, and the
    /// middleware attached so far is captured with the route. Middleware
    /// added later does not affect this route.
    pub fn add_route<H>(&self, method: &str, pattern: &str, handler: H) -> Result<(), RouteError>
    where
        H: Handler<B, R>,
    {
        let pattern = join(&self.prefix, pattern);
        let handler: BoxHandler<B, R> = Arc::new(handler);
        let route = Route::new(pattern.as_str(), handler, self.middleware.clone());
        self.router.insert(method, &pattern, Arc::new(route))?;
        debug!("registered {} {}", method, pattern);
        Ok(())
    }

    /// Registers `handler` for GET requests.
    pub fn get<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Get.as_str(), pattern, handler)
    }

    /// Registers `handler` for POST requests.
    pub fn post<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Post.as_str(), pattern, handler)
    }

    /// Registers `handler` for PUT requests.
    pub fn put<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Put.as_str(), pattern, handler)
    }

    /// Registers `handler` for PATCH requests.
    pub fn patch<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Patch.as_str(), pattern, handler)
    }

    /// Registers `handler` for HEAD requests.
    pub fn head<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Head.as_str(), pattern, handler)
    }

    /// Registers `handler` for CONNECT requests.
    pub fn connect<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Connect.as_str(), pattern, handler)
    }

    /// Registers `handler` for OPTIONS requests.
    pub fn options<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Options.as_str(), pattern, handler)
    }

    /// Registers `handler` for TRACE requests.
    pub fn trace<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Trace.as_str(), pattern, handler)
    }

    /// Registers `handler` for DELETE requests.
    pub fn delete<H: Handler<B, R>>(&self, pattern: &str, handler: H) -> Result<(), RouteError> {
        self.add_route(Method::Delete.as_str(), pattern, handler)
    }

    /// Appends middleware to this mux. Only routes registered afterwards
    /// through this mux are wrapped by it.
    pub fn use_middleware<M: Middleware<B, R>>(&mut self, middleware: M) {
        self.middleware.push(Arc::new(middleware));
    }

    /// Replaces the handler called when no route matches.
    pub fn not_found<H: Handler<B, R>>(&mut self, handler: H) {
        self.not_found = Arc::new(handler);
    }

    /// Creates a group of routes under `prefix`.
    ///
    /// The group shares the routing tables with this mux, so a route
    /// registered through either is visible to both. The group starts with
    /// no middleware of its own; it keeps this mux's not-found handler and
    /// path options.
    ///
    /// ```
    /// use charmux::{Context, Mux};
    /// use http::{Request, Response};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mux: Mux<(), String> = Mux::new();
    /// let home = mux.group("/home");
    /// home.get("/alone", |_: Context<()>| Response::new("alone".to_owned()))?;
    ///
    /// assert_eq!(mux.serve(Request::get("/home/alone").body(())?).status(), 200);
    /// assert_eq!(mux.serve(Request::get("/alone").body(())?).status(), 404);
    /// # Ok(())
    /// # }
    /// ```
    pub fn group(&self, prefix: &str) -> Mux<B, R> {
        Mux {
            router: self.router.clone(),
            prefix: join(&self.prefix, prefix),
            middleware: Vec::new(),
            not_found: self.not_found.clone(),
            clean_path: self.clean_path,
        }
    }

    /// The prefix prepended to every pattern registered through this mux.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn request_path(&self, path: &str) -> String {
        if self.clean_path {
            clean_path(path)
        } else {
            path.to_owned()
        }
    }

    /// Resolves `method` and `path` to a route and its parameters without
    /// calling anything.
    ///
    /// A pattern that cannot be re-aligned with the path yields an empty
    /// parameter set rather than an error.
    pub fn lookup(&self, method: &str, path: &str) -> Result<Match<B, R>, MatchError> {
        let path = self.request_path(path);
        let route = self.router.find(method, &path)?;

        let params = Params::from_match(&path, route.pattern()).unwrap_or_else(|err| {
            warn!("{} {}: {}", method, path, err);
            Params::new()
        });

        Ok(Match { route, params })
    }

    /// Returns the methods with a route matching `path`.
    pub fn allowed(&self, path: &str) -> Vec<Method> {
        self.router.allowed(&self.request_path(path))
    }

    /// Dispatches `req` to the matching route, or to the not-found handler.
    pub fn serve(&self, req: Request<B>) -> Response<R> {
        match self.lookup(req.method().as_str(), req.uri().path()) {
            Ok(Match { route, params }) => {
                trace!("{} {} matched {}", req.method(), req.uri().path(), route.pattern());
                route.serve(Context::new(req, params))
            }
            Err(_) => {
                trace!("{} {} not found", req.method(), req.uri().path());
                self.not_found.call(Context::new(req, Params::new()))
            }
        }
    }
}

impl<B, R> Clone for Mux<B, R> {
    fn clone(&self) -> Self {
        Mux {
            router: self.router.clone(),
            prefix: self.prefix.clone(),
            middleware: self.middleware.clone(),
            not_found: self.not_found.clone(),
            clean_path: self.clean_path,
        }
    }
}

impl<B, R> fmt::Debug for Mux<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mux")
            .field("prefix", &self.prefix)
            .field("middleware", &self.middleware.len())
            .field("clean_path", &self.clean_path)
            .finish()
    }
}
