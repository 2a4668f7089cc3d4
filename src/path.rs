/// Returns the canonical form of a URL path.
///
/// The following rules are applied:
///  1. Multiple slashes are replaced with a single slash.
///  2. Each `.` element (the current directory) is removed.
///  3. Each `..` element is removed along with the element that precedes it.
///  4. `..` elements that begin a rooted path are removed.
///
/// The result is always rooted. A trailing slash (or trailing `.`) is kept,
/// and an empty result is `/`.
pub fn clean_path(p: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in p.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let trailing = matches!(p.rsplit('/').next(), Some("") | Some("."));

    let mut cleaned = String::with_capacity(p.len() + 1);
    for segment in &segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }

    if cleaned.is_empty() {
        return "/".to_owned();
    }

    if trailing {
        cleaned.push('/');
    }

    cleaned
}

/// Joins a group prefix and a pattern, collapsing duplicate separators.
pub fn join(prefix: &str, pattern: &str) -> String {
    if prefix.is_empty() {
        return pattern.to_owned();
    }
    clean_path(&format!("{}/{}", prefix, pattern))
}
