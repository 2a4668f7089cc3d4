use crate::error::{MatchError, RouteError};
use crate::method::Method;
use crate::tree::Node;
use parking_lot::RwLock;

/// One routing tree per HTTP method.
///
/// Each tree sits behind its own reader/writer lock and is created on the
/// first insert for its method, so traffic on one method never waits on
/// registrations for another.
///
/// ```
/// use charmux::{MatchError, MethodRouter};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let router = MethodRouter::new();
/// router.insert("GET", "/products", "all products")?;
/// router.insert("POST", "/products", "product created")?;
///
/// assert_eq!(router.find("GET", "/products"), Ok("all products"));
/// assert_eq!(router.find("PUT", "/products"), Err(MatchError::NotFound));
/// # Ok(())
/// # }
/// ```
pub struct MethodRouter<T> {
    trees: [RwLock<Option<Node<T>>>; 9],
}

impl<T> Default for MethodRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MethodRouter<T> {
    /// Creates a router with no routes; trees are allocated on first insert.
    pub fn new() -> Self {
        MethodRouter {
            trees: Default::default(),
        }
    }

    fn tree(&self, method: Method) -> &RwLock<Option<Node<T>>> {
        &self.trees[method.index()]
    }

    /// Inserts `value` under `method` and `pattern`.
    pub fn insert(&self, method: &str, pattern: &str, value: T) -> Result<(), RouteError> {
        let method: Method = method.parse()?;
        let mut tree = self.tree(method).write();
        tree.get_or_insert_with(Node::new).insert(pattern, value)?;
        Ok(())
    }

    /// Returns `true` if at least one route is registered for `method`.
    pub fn has_routes(&self, method: Method) -> bool {
        self.tree(method)
            .read()
            .as_ref()
            .is_some_and(|tree| !tree.is_empty())
    }

    /// Returns the methods that have a route matching `path`.
    pub fn allowed(&self, path: &str) -> Vec<Method> {
        Method::ALL
            .iter()
            .copied()
            .filter(|&method| {
                self.tree(method)
                    .read()
                    .as_ref()
                    .is_some_and(|tree| tree.at(path).is_ok())
            })
            .collect()
    }
}

impl<T: Clone> MethodRouter<T> {
    /// Finds the value registered for `method` that matches `path`.
    ///
    /// The value is cloned out so the read lock is released before the
    /// caller uses it. Unknown methods are simply not found.
    pub fn find(&self, method: &str, path: &str) -> Result<T, MatchError> {
        let method: Method = method.parse().map_err(|_| MatchError::NotFound)?;
        let tree = self.tree(method).read();
        match tree.as_ref() {
            Some(tree) => tree.at(path).cloned(),
            None => Err(MatchError::NotFound),
        }
    }
}
