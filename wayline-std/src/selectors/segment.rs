//! Segment-wise matching with named parameters.

use wayline_core::{Params, Path, RouteMatch, RouteResult, RouteTable, Selector};

/// Selects the first declaration whose pattern matches the path segment by
/// segment.
///
/// Both pattern and path are split on `/`:
///
/// - a literal segment must equal the path segment exactly;
/// - `:name` binds one non-empty path segment to `name`;
/// - `*name` (or a bare `*`) in the last position binds the remainder of
///   the path, possibly empty, and makes the pattern a catch-all.
///
/// A `*` segment anywhere else is compared literally.
///
/// # Example
///
/// ```rust
/// use wayline_core::{Node, Path, RouteTable, Selector};
/// use wayline_std::selectors::SegmentSelector;
///
/// let nodes = vec![
///     Node::route("/users/:id", "user"),
///     Node::route("/*", "not found"),
/// ];
/// let table = RouteTable::from_nodes(&nodes);
///
/// let hit = SegmentSelector.select(&table, &Path::parse("/users/7").unwrap());
/// let hit = hit.matched().unwrap();
/// assert_eq!(hit.params.get("id"), Some("7"));
///
/// let miss = SegmentSelector.select(&table, &Path::parse("/nowhere").unwrap());
/// assert_eq!(miss.view(), Some(&"not found"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentSelector;

impl<V> Selector<V> for SegmentSelector {
    fn select<'a>(&self, table: &RouteTable<'a, V>, path: &Path) -> RouteResult<'a, V> {
        table
            .iter()
            .enumerate()
            .find_map(|(index, route)| {
                match_pattern(route.path(), path).map(|params| RouteMatch {
                    route,
                    index,
                    params,
                })
            })
            .into()
    }
}

/// Matches one pattern against a path, returning the captured parameters.
pub(crate) fn match_pattern(pattern: &str, path: &Path) -> Option<Params> {
    let mut expected = pattern.strip_prefix('/')?.split('/').peekable();
    let mut actual = path.segments();
    let mut params = Params::new();

    while let Some(segment) = expected.next() {
        let is_last = expected.peek().is_none();
        match segment.strip_prefix('*') {
            Some(name) if is_last => {
                let rest: Vec<&str> = actual.by_ref().collect();
                if !name.is_empty() {
                    params.insert(name, rest.join("/"));
                }
                return Some(params);
            }
            _ => {}
        }

        let value = actual.next()?;
        match segment.strip_prefix(':') {
            Some(name) if !name.is_empty() => {
                if value.is_empty() {
                    return None;
                }
                params.insert(name, value);
            }
            _ if segment == value => {}
            _ => return None,
        }
    }

    match actual.next() {
        Some(_) => None,
        None => Some(params),
    }
}
