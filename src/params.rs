//! Path parameters.
//!
//! Parameters are recovered after a match by re-aligning the request path
//! against the pattern the route was registered with. The bindings travel
//! in an encoded form, `name:value` pairs joined by `,`, which [`Params`]
//! decodes back into a map.

use crate::error::ParamsError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::{hash_map, HashMap};
use std::fmt;

/// The name given to a catch-all parameter registered as a bare `*`.
pub const DEFAULT_CATCH_ALL: &str = "catch";

const LIST_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';

/// Characters escaped inside encoded names and values. Non-ASCII characters
/// are always escaped; `/` is not.
const SEPARATORS: &AsciiSet = &CONTROLS.add(b'%').add(b',').add(b':');

/// Captures the parameters found in `matched` according to `pattern`.
///
/// There are two kinds of parameters: `:name` captures one segment and
/// `*name` captures everything that is left.
///
/// ```
/// use charmux::params::extract;
///
/// assert_eq!(extract("/hello/world", "/hello/:name").unwrap(), "name:world");
/// assert_eq!(
///     extract("/let/the/bullet/fly", "/let/the/:which/:what").unwrap(),
///     "which:bullet,what:fly"
/// );
/// assert_eq!(extract("/about", "/about").unwrap(), "");
/// ```
pub fn extract(matched: &str, pattern: &str) -> Result<String, ParamsError> {
    let mut encoded = String::new();

    if !pattern.contains(&[':', '*'][..]) {
        return Ok(encoded);
    }

    let values: Vec<&str> = matched.split('/').collect();
    let segments: Vec<&str> = pattern.split('/').collect();

    if values.len() < segments.len() {
        return Err(ParamsError::SegmentMismatch {
            path: matched.to_owned(),
            pattern: pattern.to_owned(),
        });
    }

    let last = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if let Some(name) = segment.strip_prefix(':') {
            push_pair(&mut encoded, name, values[i]);
        } else if let Some(name) = segment.strip_prefix('*') {
            if i != last {
                return Err(ParamsError::CatchAllNotLast(pattern.to_owned()));
            }

            let name = if name.is_empty() { DEFAULT_CATCH_ALL } else { name };
            push_pair(&mut encoded, name, &values[i..].join("/"));
            break;
        }
    }

    Ok(encoded)
}

/// Encodes a set of bindings the same way [`extract`] does.
pub fn encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut encoded = String::new();
    for (name, value) in pairs {
        push_pair(&mut encoded, name, value);
    }
    encoded
}

fn push_pair(encoded: &mut String, name: &str, value: &str) {
    if !encoded.is_empty() {
        encoded.push(LIST_SEPARATOR);
    }
    escape_into(encoded, name);
    encoded.push(PAIR_SEPARATOR);
    escape_into(encoded, value);
}

fn escape_into(out: &mut String, s: &str) {
    out.extend(utf8_percent_encode(s, SEPARATORS));
}

fn unescape(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Route parameters captured for a single request.
///
/// Keys are unique; when a pattern repeats a name the last segment wins.
///
/// ```
/// use charmux::Params;
///
/// let params = Params::from_match("/hello/to/hell.jpg", "/hello/:name/*else").unwrap();
/// assert_eq!(params.get("name"), Some("to"));
/// assert_eq!(params.get("else"), Some("hell.jpg"));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    map: HashMap<String, String>,
}

impl Params {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes parameters produced by [`extract`].
    ///
    /// Entries without a `:` separator are skipped.
    pub fn decode(src: &str) -> Self {
        let mut params = Params::new();
        params.load(src);
        params
    }

    /// Loads the encoded parameters in `src` into this set.
    pub fn load(&mut self, src: &str) {
        for entry in src.split(LIST_SEPARATOR) {
            if let Some((name, value)) = entry.split_once(PAIR_SEPARATOR) {
                self.map.insert(unescape(name), unescape(value));
            }
        }
    }

    /// Extracts and decodes the parameters of `matched` against `pattern`.
    pub fn from_match(matched: &str, pattern: &str) -> Result<Self, ParamsError> {
        extract(matched, pattern).map(|encoded| Params::decode(&encoded))
    }

    /// Returns the value bound to `key`.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.map.get(key.as_ref()).map(String::as_str)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the names and values, in no particular order.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.map.iter(),
        }
    }

    /// Encodes the parameters, sorted by name.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        pairs.sort_unstable();
        encode(pairs)
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params {
            map: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// An iterator over the keys and values of a [`Params`] set.
pub struct ParamsIter<'p> {
    inner: hash_map::Iter<'p, String, String>,
}

impl<'p> Iterator for ParamsIter<'p> {
    type Item = (&'p str, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'p> IntoIterator for &'p Params {
    type Item = (&'p str, &'p str);
    type IntoIter = ParamsIter<'p>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
