//! # Route Declarations
//!
//! Routes are declared as explicit values, never inferred from rendered
//! output. A container receives an ordered list of [`Node`]s; on each render
//! pass it derives a [`RouteTable`] that borrows the route declarations among
//! them.
//!
//! # Table Rules
//!
//! - **Order**: declarations keep their child order; the first match wins.
//! - **Inert children**: [`Node::Element`] entries are skipped.
//! - **Malformed paths**: declarations whose path is empty or not absolute are
//!   excluded from the table instead of failing the render.
//! - **Duplicates**: allowed; later duplicates are shadowed by the first.

use crate::path::Path;

/// A (path, view) pairing registered with the router.
///
/// The `view` is opaque: the router hands it to the renderer and never looks
/// inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDeclaration<V> {
    path: String,
    view: V,
}

impl<V> RouteDeclaration<V> {
    /// Declares a route. The path is validated when the table is built.
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }

    /// Returns the declared path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the declaration, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Whether the declared path is usable as a routing key.
    pub fn is_well_formed(&self) -> bool {
        Path::parse(self.path.as_str()).is_ok()
    }
}

/// A child of a routes container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<V> {
    /// A route declaration.
    Route(RouteDeclaration<V>),
    /// Any other child. Ignored by the router.
    Element(V),
}

impl<V> Node<V> {
    /// Shorthand for `Node::Route(RouteDeclaration::new(path, view))`.
    pub fn route(path: impl Into<String>, view: V) -> Self {
        Node::Route(RouteDeclaration::new(path, view))
    }

    /// Returns the declaration if this child is a route.
    pub fn as_route(&self) -> Option<&RouteDeclaration<V>> {
        match self {
            Node::Route(route) => Some(route),
            Node::Element(_) => None,
        }
    }
}

impl<V> From<RouteDeclaration<V>> for Node<V> {
    fn from(route: RouteDeclaration<V>) -> Self {
        Node::Route(route)
    }
}

/// An ordered view over the well-formed route declarations of a render pass.
#[derive(Debug)]
pub struct RouteTable<'a, V> {
    routes: Vec<&'a RouteDeclaration<V>>,
}

impl<V> Clone for RouteTable<'_, V> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<'a, V> RouteTable<'a, V> {
    /// Builds the table from a container's children.
    pub fn from_nodes(nodes: &'a [Node<V>]) -> Self {
        Self::from_declarations(nodes.iter().filter_map(Node::as_route))
    }

    /// Builds the table from bare declarations, keeping their order.
    pub fn from_declarations<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = &'a RouteDeclaration<V>>,
    {
        let routes = declarations
            .into_iter()
            .filter(|route| {
                let keep = route.is_well_formed();
                #[cfg(feature = "tracing")]
                {
                    if !keep {
                        tracing::debug!(path = %route.path(), "excluding malformed route declaration");
                    }
                }
                keep
            })
            .collect();
        Self { routes }
    }

    /// Returns the declaration at `index`.
    pub fn get(&self, index: usize) -> Option<&'a RouteDeclaration<V>> {
        self.routes.get(index).copied()
    }

    /// Iterates the declarations in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'a RouteDeclaration<V>> + '_ {
        self.routes.iter().copied()
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Path parameters captured by a parameterized selector, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a captured value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Returns the value captured for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates `(name, value)` pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Get the number of captured parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// The declaration chosen for a path.
#[derive(Debug)]
pub struct RouteMatch<'a, V> {
    /// The matched declaration.
    pub route: &'a RouteDeclaration<V>,
    /// Position of the declaration in its table.
    pub index: usize,
    /// Parameters captured from the path. Empty for exact matches.
    pub params: Params,
}

impl<V> Clone for RouteMatch<'_, V> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            index: self.index,
            params: self.params.clone(),
        }
    }
}

impl<'a, V> RouteMatch<'a, V> {
    /// A match without captured parameters.
    pub fn exact(route: &'a RouteDeclaration<V>, index: usize) -> Self {
        Self {
            route,
            index,
            params: Params::new(),
        }
    }

    /// Returns the matched view.
    pub fn view(&self) -> &'a V {
        self.route.view()
    }
}
