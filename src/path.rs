//! Property-path resolution over structured documents.
//!
//! Structural checks against interchange documents are expressed as
//! lists of dotted/bracket-indexed paths
//! (`"output_descriptors[0].schema"`) rather than full JSON Schema.
//! Resolution never fails: a path that does not lead anywhere is
//! absent, not an error.

use serde_json::Value;

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// Splits a path expression into key and index segments. A malformed
/// expression (empty segment, unclosed or non-numeric index) yields
/// `None`.
fn parse_path(path: &str) -> Option<Vec<Segment<'_>>> {
    if path.is_empty() {
        return None;
    }
    let mut segments = Vec::new();
    for part in path.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(i) => part.split_at(i),
            None => (part, ""),
        };
        if key.is_empty() && rest.is_empty() {
            return None;
        }
        if !key.is_empty() {
            segments.push(Segment::Key(key));
        }
        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            let index = inner[..close].parse().ok()?;
            segments.push(Segment::Index(index));
            rest = &inner[close + 1..];
        }
    }
    Some(segments)
}

/// Resolves a path expression against a document, returning the value
/// it leads to. `None` for anything that does not resolve: a missing
/// key, an index past the end of an array, a scalar reached while
/// segments remain, or a malformed expression.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = document;
    for segment in parse_path(path)? {
        node = match segment {
            Segment::Key(key) => node.get(key)?,
            Segment::Index(index) => node.get(index)?,
        };
    }
    Some(node)
}

/// Returns `true` iff every listed path resolves to a present value in
/// the document. A key mapped to `null` is present; only absence
/// counts as missing. An empty path list is vacuously `true`.
pub fn has_paths(document: &Value, paths: &[&str]) -> bool {
    paths
        .iter()
        .all(|path| resolve_path(document, path).is_some())
}
