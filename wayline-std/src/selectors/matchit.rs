//! Matchit-based selector implementation.
//!
//! Provides radix-tree matching for the same `:param` / `*rest` pattern
//! syntax as [`SegmentSelector`](super::SegmentSelector).

use matchit::Router as InnerRouter;
use wayline_core::{Params, Path, RouteMatch, RouteResult, RouteTable, Selector};

const ANONYMOUS_CATCH_ALL: &str = "__wayline_rest";

/// A selector backed by `matchit`.
///
/// Unlike the table-order selectors, `matchit` prefers the most specific
/// pattern (`/users/me` beats `/users/:id` regardless of order). A pattern
/// that conflicts with an earlier one is skipped, so duplicates still
/// resolve to the first declaration. A catch-all needs at least one
/// character to bind: `/files/*rest` does not match `/files/`.
///
/// The radix tree is rebuilt from the table on every selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchitSelector;

impl<V> Selector<V> for MatchitSelector {
    fn select<'a>(&self, table: &RouteTable<'a, V>, path: &Path) -> RouteResult<'a, V> {
        let mut router = InnerRouter::new();
        for (index, route) in table.iter().enumerate() {
            if let Err(err) = router.insert(to_matchit_pattern(route.path()), index) {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(pattern = %route.path(), %err, "skipping conflicting route pattern");
                }
                #[cfg(not(feature = "tracing"))]
                {
                    let _ = err;
                }
            }
        }

        let Ok(matched) = router.at(path.as_str()) else {
            return RouteResult::NotFound;
        };
        let index = *matched.value;
        let params: Params = matched
            .params
            .iter()
            .filter(|(name, _)| *name != ANONYMOUS_CATCH_ALL)
            .collect();

        table
            .get(index)
            .map(|route| RouteMatch {
                route,
                index,
                params,
            })
            .into()
    }
}

/// Rewrites `:name` and trailing `*name` segments into matchit's `{name}`
/// syntax. A `*` segment before the last one stays literal.
fn to_matchit_pattern(pattern: &str) -> String {
    let last = pattern.split('/').count() - 1;
    let segments: Vec<String> = pattern
        .split('/')
        .enumerate()
        .map(|(position, segment)| {
            if let Some(name) = segment.strip_prefix(':').filter(|name| !name.is_empty()) {
                format!("{{{name}}}")
            } else if let Some(name) = segment.strip_prefix('*').filter(|_| position == last) {
                let name = if name.is_empty() {
                    ANONYMOUS_CATCH_ALL
                } else {
                    name
                };
                format!("{{*{name}}}")
            } else {
                segment.replace('{', "{{").replace('}', "}}")
            }
        })
        .collect();
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayline_core::Node;

    fn path(raw: &str) -> Path {
        Path::parse(raw).unwrap()
    }

    #[test]
    fn test_pattern_translation() {
        assert_eq!(to_matchit_pattern("/users/:id"), "/users/{id}");
        assert_eq!(to_matchit_pattern("/files/*rest"), "/files/{*rest}");
        assert_eq!(to_matchit_pattern("/*"), "/{*__wayline_rest}");
        assert_eq!(to_matchit_pattern("/raw/{x}"), "/raw/{{x}}");
        assert_eq!(to_matchit_pattern("/*/x"), "/*/x");
        assert_eq!(to_matchit_pattern("/*rest/x"), "/*rest/x");
    }

    #[test]
    fn test_inner_star_is_literal_like_segment_selector() {
        use crate::selectors::SegmentSelector;

        let nodes = vec![Node::route("/*/x", "literal")];
        let table = RouteTable::from_nodes(&nodes);

        for raw in ["/*/x", "/a/x"] {
            let target = path(raw);
            assert_eq!(
                MatchitSelector.select(&table, &target).view(),
                SegmentSelector.select(&table, &target).view(),
                "{raw}"
            );
        }
        assert_eq!(MatchitSelector.select(&table, &path("/*/x")).view(), Some(&"literal"));
        assert!(!MatchitSelector.matches(&table, &path("/a/x")));
    }

    #[test]
    fn test_matchit_selector() {
        let nodes = vec![
            Node::route("/events/:kind", 1),
            Node::route("/system/*rest", 2),
            Node::route("/", 3),
        ];
        let table = RouteTable::from_nodes(&nodes);

        let matched = MatchitSelector.select(&table, &path("/events/login")).matched().unwrap();
        assert_eq!(*matched.view(), 1);
        assert_eq!(matched.params.get("kind"), Some("login"));

        let matched = MatchitSelector
            .select(&table, &path("/system/error/critical"))
            .matched()
            .unwrap();
        assert_eq!(matched.params.get("rest"), Some("error/critical"));

        assert_eq!(MatchitSelector.select(&table, &path("/")).view(), Some(&3));
        assert!(!MatchitSelector.matches(&table, &path("/files/image.png")));
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let nodes = vec![Node::route("/dup", "first"), Node::route("/dup", "second")];
        let table = RouteTable::from_nodes(&nodes);

        assert_eq!(MatchitSelector.select(&table, &path("/dup")).view(), Some(&"first"));
    }
}
