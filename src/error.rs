use thiserror::Error;

/// Represents errors that can occur when inserting a new route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum InsertError {
    /// Attempted to insert an empty pattern.
    #[error("empty pattern is not supported")]
    EmptyPattern,
    /// Patterns must begin with a `/`.
    #[error("pattern must start with a slash: {0:?}")]
    MissingLeadingSlash(String),
    /// Insertion is only allowed on the root of a tree.
    #[error("inserting on a non root node")]
    NotRoot,
    /// Catch-all parameters are only allowed in the final segment.
    #[error("catch-all parameters are only allowed at the end of a pattern: {0:?}")]
    CatchAllNotLast(String),
}

/// A failed match attempt.
///
/// ```
/// use charmux::{MatchError, Node};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tree = Node::new();
/// tree.insert("/home", "Welcome!")?;
///
/// // no routes match
/// assert_eq!(tree.at("/foobar"), Err(MatchError::NotFound));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MatchError {
    /// No matching route was found.
    #[error("route not found")]
    NotFound,
}

/// Errors produced while re-aligning a matched path against its pattern.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParamsError {
    /// The path has fewer segments than the pattern.
    #[error("bad pattern: {pattern:?} has more segments than {path:?}")]
    SegmentMismatch { path: String, pattern: String },
    /// A `*` segment appeared before the final segment.
    #[error("bad pattern: catch-all must be the final segment in {0:?}")]
    CatchAllNotLast(String),
}

/// Errors returned when registering a route.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RouteError {
    /// The method is not one of the nine supported verbs.
    #[error("unknown http method: {0:?}")]
    UnknownMethod(String),
    #[error(transparent)]
    Insert(#[from] InsertError),
}
