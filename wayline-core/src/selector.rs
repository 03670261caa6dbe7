//! # Route Selection
//!
//! A [`Selector`] picks at most one declaration out of a [`RouteTable`] for
//! the current path. Selection is a pure function: it never mutates the
//! table, never consults the location store, and never fails.
//!
//! Different selectors implement different pattern languages (exact strings,
//! `:param` segments, radix trees) behind the same contract, so swapping one
//! for another does not change the container, the store, or the navigator.

use crate::{
    path::Path,
    route::{RouteMatch, RouteTable},
};

/// Result of a selection.
#[derive(Debug)]
pub enum RouteResult<'a, V> {
    /// A declaration matched.
    Matched(RouteMatch<'a, V>),
    /// No declaration matched.
    NotFound,
}

impl<V> Clone for RouteResult<'_, V> {
    fn clone(&self) -> Self {
        match self {
            RouteResult::Matched(m) => RouteResult::Matched(m.clone()),
            RouteResult::NotFound => RouteResult::NotFound,
        }
    }
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if a declaration matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the match, if any.
    pub fn matched(self) -> Option<RouteMatch<'a, V>> {
        match self {
            RouteResult::Matched(m) => Some(m),
            RouteResult::NotFound => None,
        }
    }

    /// Returns the matched view, if any.
    pub fn view(&self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(m) => Some(m.view()),
            RouteResult::NotFound => None,
        }
    }
}

impl<'a, V> From<Option<RouteMatch<'a, V>>> for RouteResult<'a, V> {
    fn from(value: Option<RouteMatch<'a, V>>) -> Self {
        match value {
            Some(m) => RouteResult::Matched(m),
            None => RouteResult::NotFound,
        }
    }
}

/// Chooses the declaration that renders for a path.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot select routes with views of type `{V}`",
    label = "missing `Selector` implementation",
    note = "Implement `Selector<{V}>` to choose a route for the current path."
)]
pub trait Selector<V>: Send + Sync + 'static {
    /// Returns the declaration `path` resolves to.
    ///
    /// When several declarations match, the selector decides the winner;
    /// table-order selectors return the first.
    fn select<'a>(&self, table: &RouteTable<'a, V>, path: &Path) -> RouteResult<'a, V>;

    /// Check if any declaration matches `path`.
    fn matches(&self, table: &RouteTable<'_, V>, path: &Path) -> bool {
        self.select(table, path).is_matched()
    }
}

impl<V, S: Selector<V> + ?Sized> Selector<V> for Box<S> {
    fn select<'a>(&self, table: &RouteTable<'a, V>, path: &Path) -> RouteResult<'a, V> {
        (**self).select(table, path)
    }
}
