//! Exact string matching.

use wayline_core::{Path, RouteMatch, RouteResult, RouteTable, Selector};

/// Selects the first declaration whose path equals the current path.
///
/// Comparison is case-sensitive and performs no trailing-slash
/// normalization. Declarations are scanned in table order, so duplicate paths
/// resolve to the first one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSelector;

impl<V> Selector<V> for ExactSelector {
    fn select<'a>(&self, table: &RouteTable<'a, V>, path: &Path) -> RouteResult<'a, V> {
        table
            .iter()
            .enumerate()
            .find(|(_, route)| route.path() == path.as_str())
            .map(|(index, route)| RouteMatch::exact(route, index))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayline_core::Node;

    fn path(raw: &str) -> Path {
        Path::parse(raw).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let nodes = vec![Node::route("/a", "A"), Node::route("/b", "B")];
        let table = RouteTable::from_nodes(&nodes);

        assert_eq!(ExactSelector.select(&table, &path("/a")).view(), Some(&"A"));
        assert_eq!(ExactSelector.select(&table, &path("/b")).view(), Some(&"B"));
        assert!(!ExactSelector.matches(&table, &path("/c")));
    }

    #[test]
    fn test_no_normalization() {
        let nodes = vec![Node::route("/about", "about")];
        let table = RouteTable::from_nodes(&nodes);

        assert!(!ExactSelector.matches(&table, &path("/about/")));
        assert!(!ExactSelector.matches(&table, &path("/About")));
    }

    #[test]
    fn test_duplicate_paths_first_wins() {
        let nodes = vec![Node::route("/dup", "first"), Node::route("/dup", "second")];
        let table = RouteTable::from_nodes(&nodes);

        let matched = ExactSelector.select(&table, &path("/dup")).matched().unwrap();
        assert_eq!(matched.index, 0);
        assert_eq!(*matched.view(), "first");
    }

    #[test]
    fn test_pattern_syntax_is_literal() {
        let nodes = vec![Node::route("/users/:id", "user")];
        let table = RouteTable::from_nodes(&nodes);

        assert!(!ExactSelector.matches(&table, &path("/users/42")));
        assert!(ExactSelector.matches(&table, &path("/users/:id")));
    }
}
