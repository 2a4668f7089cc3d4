//! A character-level trie HTTP request multiplexer.
//!
//! Routes are stored in one trie per HTTP method. Each trie holds one node
//! per character of the registered patterns, so matching a request costs
//! time proportional to the length of its path, however many routes exist.
//!
//! ```rust
//! use charmux::{Context, Mux};
//! use http::{Request, Response};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mux: Mux<(), String> = Mux::new();
//!
//! mux.get("/", |_: Context<()>| Response::new("Welcome!".to_owned()))?;
//! mux.get("/users/:id", |ctx: Context<()>| {
//!     Response::new(format!("user {}", ctx.param("id").unwrap_or_default()))
//! })?;
//!
//! let res = mux.serve(Request::get("/users/978").body(())?);
//! assert_eq!(res.body(), "user 978");
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns
//!
//! ```text
//!  Syntax    Type
//!  :name     named parameter
//!  *name     catch-all parameter
//! ```
//!
//! Named parameters match anything up to the next `/` or the end of the
//! path:
//!
//! ```text
//!  Pattern: /blog/:category/:post
//!
//!   /blog/rust/request-routers            match: category="rust", post="request-routers"
//!   /blog/rust/                           no match
//!   /blog/rust/request-routers/comments   no match
//! ```
//!
//! Catch-all parameters match everything that is left and must be the final
//! segment. A bare `*` is bound to the name `catch`:
//!
//! ```text
//!  Pattern: /files/*filepath
//!
//!   /files/LICENSE                      match: filepath="LICENSE"
//!   /files/templates/article.html       match: filepath="templates/article.html"
//!   /files                              no match
//! ```
//!
//! A catch-all takes the rest of the path as soon as the walk reaches a
//! node that has one, even if a literal sibling would also match. Otherwise
//! a literal child is preferred, and a parameter is only taken when no
//! literal matches. Matching never backtracks. A pattern ending in `/` also matches the same
//! path without the slash.
//!
//! # Middleware
//!
//! Middleware attached with [`Mux::use_middleware`] wraps every route
//! registered afterwards, the first attached being the outermost.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod handler;
mod method;
mod mux;
pub mod params;
pub mod path;
mod route;
mod router;
mod tree;

pub use error::{InsertError, MatchError, ParamsError, RouteError};
pub use handler::{from_fn, BoxHandler, BoxMiddleware, Context, Handler, Middleware};
pub use method::Method;
pub use mux::{Match, Mux, NOT_FOUND_BODY};
pub use params::Params;
pub use route::{compose, Route};
pub use router::MethodRouter;
pub use tree::{Node, NodeKind};
