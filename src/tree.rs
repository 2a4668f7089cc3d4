use crate::error::{InsertError, MatchError};

const PARAM: char = ':';
const CATCH_ALL: char = '*';
const SLASH: char = '/';

/// The role a node plays in the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// Entry point of a tree; has no key.
    Root,
    /// Matches its key character verbatim.
    Literal,
    /// A `:name` parameter, absorbs characters up to the next `/`.
    Param,
    /// A `*name` catch-all, absorbs the rest of the path.
    CatchAll,
    /// End of a pattern, holds the registered value.
    End,
}

/// A character-keyed routing tree.
///
/// Every node stands for one character position in the union of the
/// patterns inserted into it. Children are kept in insertion order and a
/// `(parent, character)` pair maps to at most one child.
///
/// ```
/// use charmux::Node;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tree = Node::new();
/// tree.insert("/users/:id", "user")?;
/// tree.insert("/static/*file", "file")?;
///
/// assert_eq!(tree.at("/users/42"), Ok(&"user"));
/// assert_eq!(tree.at("/static/css/site.css"), Ok(&"file"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Node<T> {
    key: Option<char>,
    kind: NodeKind,
    children: Vec<Node<T>>,
    value: Option<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Node {
            key: None,
            kind: NodeKind::Root,
            children: Vec::new(),
            value: None,
        }
    }

    fn branch(key: char) -> Self {
        let kind = match key {
            PARAM => NodeKind::Param,
            CATCH_ALL => NodeKind::CatchAll,
            _ => NodeKind::Literal,
        };

        Node {
            key: Some(key),
            kind,
            children: Vec::new(),
            value: None,
        }
    }

    fn end(value: T) -> Self {
        Node {
            key: None,
            kind: NodeKind::End,
            children: Vec::new(),
            value: Some(value),
        }
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    fn child_index(&self, key: char) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.kind != NodeKind::End && child.key == Some(key))
    }

    fn child(&self, key: char) -> Option<&Node<T>> {
        self.child_index(key).map(|i| &self.children[i])
    }

    // The first end child wins, so duplicate patterns resolve to the
    // earliest registration.
    fn terminal(&self) -> Option<&T> {
        self.children
            .iter()
            .find(|child| child.kind == NodeKind::End)
            .and_then(|child| child.value.as_ref())
    }

    /// Inserts a pattern into the tree.
    ///
    /// Inserting a pattern that already exists does not replace the old
    /// value; both are kept and lookups keep returning the first one.
    pub fn insert(&mut self, pattern: impl AsRef<str>, value: T) -> Result<(), InsertError> {
        let pattern = pattern.as_ref();

        if self.kind != NodeKind::Root {
            return Err(InsertError::NotRoot);
        }

        if pattern.is_empty() {
            return Err(InsertError::EmptyPattern);
        }

        if !pattern.starts_with(SLASH) {
            return Err(InsertError::MissingLeadingSlash(pattern.to_owned()));
        }

        if let Some(i) = pattern.find(CATCH_ALL) {
            if pattern[i..].contains(SLASH) {
                return Err(InsertError::CatchAllNotLast(pattern.to_owned()));
            }
        }

        let mut level = self;
        for ch in pattern.chars() {
            match level.kind {
                NodeKind::Param if ch != SLASH => continue,
                // the catch-all name never becomes part of the tree
                NodeKind::CatchAll => continue,
                _ => {}
            }

            let i = match level.child_index(ch) {
                Some(i) => i,
                None => {
                    level.children.push(Node::branch(ch));
                    level.children.len() - 1
                }
            };
            level = &mut level.children[i];
        }

        level.children.push(Node::end(value));
        Ok(())
    }

    /// Tries to find a value in the tree for the given path.
    pub fn at(&self, path: &str) -> Result<&T, MatchError> {
        if self.kind != NodeKind::Root {
            return Err(MatchError::NotFound);
        }

        let mut level = self;
        let mut in_param = false;

        for ch in path.chars() {
            if in_param {
                if ch != SLASH {
                    continue;
                }
                in_param = false;
            }

            // a catch-all takes the rest of the path as soon as it is reachable
            if let Some(catch_all) = level.child(CATCH_ALL) {
                level = catch_all;
                break;
            }

            let next = level
                .child(ch)
                .or_else(|| match ch {
                    SLASH => None,
                    _ => level.child(PARAM),
                })
                .ok_or(MatchError::NotFound)?;

            level = next;
            match level.kind {
                NodeKind::Param => in_param = true,
                NodeKind::CatchAll => break,
                _ => {}
            }
        }

        level
            .terminal()
            .or_else(|| level.child(SLASH).and_then(Node::terminal))
            .ok_or(MatchError::NotFound)
    }

    /// Returns the number of values stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        let own = usize::from(self.kind == NodeKind::End);
        own + self.children.iter().map(Node::len).sum::<usize>()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
