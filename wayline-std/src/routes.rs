//! # Routes Container
//!
//! Renders exactly one of its route children, chosen by the current path.
//!
//! A [`Routes`] container owns an ordered list of [`Node`] children and a
//! [`Selector`]. Every evaluation rebuilds the [`RouteTable`] from the
//! children, selects against the live path in the [`LocationStore`], records
//! the resulting [`RouteState`], and hands the chosen view to the render
//! callback.
//!
//! # Lifecycle
//!
//! - **Mount**: subscribes to the store and evaluates once.
//! - **Notification**: each path change re-evaluates.
//! - **Children change**: [`Routes::set_children`] re-evaluates.
//! - **Unmount / drop**: unsubscribes. The subscriber only holds weak
//!   references, so a dropped container is never notified.
//!
//! # Render Contract
//!
//! A match renders exactly that view. No match renders nothing, unless a
//! fallback view was configured with [`RoutesBuilder::fallback`].

use crate::{
    selectors::ExactSelector,
    store::{LocationStore, Subscription},
};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use wayline_core::{Node, Params, Path, RouteDeclaration, RouteTable, Selector};

/// Callback receiving the container's render output.
pub type RenderCallback<V> = Arc<dyn Fn(Option<&V>) + Send + Sync + 'static>;

/// The outcome of the latest evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteState {
    /// No declaration matched the current path.
    #[default]
    NoMatch,
    /// A declaration matched.
    Matched {
        /// The declared pattern that matched.
        pattern: String,
        /// Position of the declaration in the route table.
        index: usize,
        /// Parameters captured by the selector.
        params: Params,
    },
}

impl RouteState {
    /// Returns true if a declaration matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteState::Matched { .. })
    }

    /// Returns the captured parameters, if matched.
    pub fn params(&self) -> Option<&Params> {
        match self {
            RouteState::Matched { params, .. } => Some(params),
            RouteState::NoMatch => None,
        }
    }
}

struct RoutesShared<V, S> {
    children: RwLock<Vec<Node<V>>>,
    selector: S,
    fallback: Option<V>,
    state: Mutex<Option<RouteState>>,
    on_render: Option<RenderCallback<V>>,
}

impl<V, S> RoutesShared<V, S>
where
    V: Clone + Send + Sync + 'static,
    S: Selector<V>,
{
    fn evaluate(&self, path: &Path) -> RouteState {
        let (state, view) = {
            let children = self.children.read().unwrap_or_else(PoisonError::into_inner);
            let table = RouteTable::from_nodes(&children);
            match self.selector.select(&table, path).matched() {
                Some(matched) => (
                    RouteState::Matched {
                        pattern: matched.route.path().to_string(),
                        index: matched.index,
                        params: matched.params,
                    },
                    Some(matched.route.view().clone()),
                ),
                None => (RouteState::NoMatch, self.fallback.clone()),
            }
        };

        {
            let mut current = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            #[cfg(feature = "tracing")]
            {
                if current.as_ref() != Some(&state) {
                    tracing::debug!(%path, from = ?*current, to = ?state, "route state changed");
                } else {
                    tracing::trace!(%path, "route state unchanged");
                }
            }
            *current = Some(state.clone());
        }

        if let Some(render) = &self.on_render {
            render(view.as_ref());
        }
        state
    }

    fn view_for(&self, state: &RouteState) -> Option<V> {
        match state {
            RouteState::Matched { index, .. } => {
                let children = self.children.read().unwrap_or_else(PoisonError::into_inner);
                RouteTable::from_nodes(&children)
                    .get(*index)
                    .map(|route| route.view().clone())
            }
            RouteState::NoMatch => self.fallback.clone(),
        }
    }
}

/// A container that renders the child route matching the current path.
///
/// # Example
///
/// ```rust
/// use wayline_core::Path;
/// use wayline_std::{routes::Routes, store::LocationStore};
///
/// let store = LocationStore::new(Path::parse("/a").unwrap());
/// let routes = Routes::builder(&store)
///     .route("/a", "A")
///     .route("/b", "B")
///     .mount();
///
/// assert_eq!(routes.view(), Some("A"));
/// store.set_current_path(Path::parse("/b").unwrap());
/// assert_eq!(routes.view(), Some("B"));
/// ```
pub struct Routes<V, S = ExactSelector> {
    shared: Arc<RoutesShared<V, S>>,
    store: LocationStore,
    subscription: Option<Subscription>,
}

impl<V> Routes<V, ExactSelector> {
    /// Starts building a container bound to `store`.
    pub fn builder(store: &LocationStore) -> RoutesBuilder<V, ExactSelector> {
        RoutesBuilder::new(store)
    }
}

impl<V, S> Routes<V, S>
where
    V: Clone + Send + Sync + 'static,
    S: Selector<V>,
{
    /// Subscribes to the store and evaluates against the current path.
    ///
    /// Mounting an already mounted container only re-evaluates.
    pub fn mount(&mut self) -> RouteState {
        if self.subscription.is_none() {
            let shared = Arc::downgrade(&self.shared);
            let store = self.store.downgrade();
            self.subscription = Some(self.store.subscribe(move || {
                if let (Some(shared), Some(store)) = (shared.upgrade(), store.upgrade()) {
                    shared.evaluate(&store.current_path());
                }
            }));
            #[cfg(feature = "tracing")]
            {
                tracing::debug!("routes mounted");
            }
        }
        self.evaluate()
    }

    /// Unsubscribes from the store. The last state and view are kept.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            #[cfg(feature = "tracing")]
            {
                tracing::debug!("routes unmounted");
            }
        }
    }

    /// Whether the container is subscribed to the store.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Replaces the children and re-evaluates.
    pub fn set_children<I>(&self, children: I) -> RouteState
    where
        I: IntoIterator<Item = Node<V>>,
    {
        let children: Vec<Node<V>> = children.into_iter().collect();
        let previous = {
            let mut current = self
                .shared
                .children
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, children)
        };
        drop(previous);
        self.evaluate()
    }

    /// Re-evaluates against the store's current path.
    pub fn evaluate(&self) -> RouteState {
        self.shared.evaluate(&self.store.current_path())
    }

    /// Returns the state recorded by the latest evaluation.
    ///
    /// A container that has never been evaluated reports
    /// [`RouteState::NoMatch`].
    pub fn state(&self) -> RouteState {
        self.recorded_state().unwrap_or_default()
    }

    /// Whether the container has been evaluated at least once.
    pub fn is_evaluated(&self) -> bool {
        self.recorded_state().is_some()
    }

    /// Returns the render output of the latest evaluation.
    ///
    /// Nothing is rendered before the first evaluation, fallback included.
    pub fn view(&self) -> Option<V> {
        self.recorded_state()
            .and_then(|state| self.shared.view_for(&state))
    }

    fn recorded_state(&self) -> Option<RouteState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the store this container observes.
    pub fn store(&self) -> &LocationStore {
        &self.store
    }
}

impl<V, S> std::fmt::Debug for Routes<V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Routes")
            .field("mounted", &self.subscription.is_some())
            .field(
                "state",
                &*self.shared.state.lock().unwrap_or_else(PoisonError::into_inner),
            )
            .finish_non_exhaustive()
    }
}

impl<V, S> Drop for Routes<V, S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

/// Builder for [`Routes`].
pub struct RoutesBuilder<V, S = ExactSelector> {
    store: LocationStore,
    children: Vec<Node<V>>,
    selector: S,
    fallback: Option<V>,
    on_render: Option<RenderCallback<V>>,
}

impl<V> RoutesBuilder<V, ExactSelector> {
    /// Create a builder with the exact-match selector and no children.
    pub fn new(store: &LocationStore) -> Self {
        Self {
            store: store.clone(),
            children: Vec::new(),
            selector: ExactSelector,
            fallback: None,
            on_render: None,
        }
    }
}

impl<V, S> RoutesBuilder<V, S> {
    /// Adds a child.
    pub fn child(mut self, child: impl Into<Node<V>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Adds a route declaration.
    pub fn route(self, path: impl Into<String>, view: V) -> Self {
        self.child(RouteDeclaration::new(path, view))
    }

    /// Adds several children, keeping their order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node<V>>,
    {
        self.children.extend(children);
        self
    }

    /// Swaps the selector.
    pub fn selector<T>(self, selector: T) -> RoutesBuilder<V, T> {
        RoutesBuilder {
            store: self.store,
            children: self.children,
            selector,
            fallback: self.fallback,
            on_render: self.on_render,
        }
    }

    /// Renders `view` when nothing matches.
    pub fn fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Sets the callback that receives every render output.
    pub fn on_render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&V>) + Send + Sync + 'static,
    {
        self.on_render = Some(Arc::new(render));
        self
    }

    /// Builds an unmounted container.
    pub fn build(self) -> Routes<V, S> {
        Routes {
            shared: Arc::new(RoutesShared {
                children: RwLock::new(self.children),
                selector: self.selector,
                fallback: self.fallback,
                state: Mutex::new(None),
                on_render: self.on_render,
            }),
            store: self.store,
            subscription: None,
        }
    }

    /// Builds the container and mounts it.
    pub fn mount(self) -> Routes<V, S>
    where
        V: Clone + Send + Sync + 'static,
        S: Selector<V>,
    {
        let mut routes = self.build();
        routes.mount();
        routes
    }
}
