//! Testing utilities for Wayline.
//!
//! This module provides utilities to make testing stores, containers and
//! navigation flows easier.
//!
//! # Features
//!
//! - [`CountingSubscriber`]: Counts store notifications
//! - [`PathRecorder`]: Records the path seen by each notification
//! - [`RenderRecorder`]: Records every render output of a [`Routes`](crate::routes::Routes) container

use crate::store::{LocationStore, Subscription};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use wayline_core::Path;

// ============================================================================
// Counting Subscriber
// ============================================================================

/// A store subscriber that counts notifications.
///
/// # Example
///
/// ```rust
/// use wayline_core::Path;
/// use wayline_std::{store::LocationStore, testing::CountingSubscriber};
///
/// let store = LocationStore::new(Path::root());
/// let counter = CountingSubscriber::new();
/// let _subscription = counter.attach(&store);
///
/// store.set_current_path(Path::parse("/next").unwrap());
/// store.set_current_path(Path::parse("/next").unwrap());
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingSubscriber {
    count: Arc<AtomicUsize>,
}

impl CountingSubscriber {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe the counter to `store`.
    pub fn attach(&self, store: &LocationStore) -> Subscription {
        let count = self.count.clone();
        store.subscribe(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

// ============================================================================
// Path Recorder
// ============================================================================

/// A store subscriber that reads the current path on every notification.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    paths: Arc<Mutex<Vec<Path>>>,
}

impl PathRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe the recorder to `store`.
    pub fn attach(&self, store: &LocationStore) -> Subscription {
        let paths = self.paths.clone();
        let reader = store.downgrade();
        store.subscribe(move || {
            if let Some(store) = reader.upgrade() {
                paths.lock().unwrap().push(store.current_path());
            }
        })
    }

    /// Get the recorded paths, oldest first.
    pub fn paths(&self) -> Vec<Path> {
        self.paths.lock().unwrap().clone()
    }

    /// Get the recorded paths as strings.
    pub fn path_strings(&self) -> Vec<String> {
        self.paths().into_iter().map(Path::into_string).collect()
    }
}

// ============================================================================
// Render Recorder
// ============================================================================

/// Records what a routes container rendered.
///
/// `None` entries are renders of nothing.
///
/// # Example
///
/// ```rust
/// use wayline_core::Path;
/// use wayline_std::{routes::Routes, store::LocationStore, testing::RenderRecorder};
///
/// let store = LocationStore::new(Path::parse("/a").unwrap());
/// let renders = RenderRecorder::new();
/// let _routes = Routes::builder(&store)
///     .route("/a", "A")
///     .on_render(renders.callback())
///     .mount();
///
/// store.set_current_path(Path::parse("/b").unwrap());
/// assert_eq!(renders.renders(), vec![Some("A"), None]);
/// ```
pub struct RenderRecorder<V> {
    renders: Arc<Mutex<Vec<Option<V>>>>,
}

impl<V: Clone + Send + 'static> RenderRecorder<V> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a render callback feeding this recorder.
    pub fn callback(&self) -> impl Fn(Option<&V>) + Send + Sync + 'static {
        let renders = self.renders.clone();
        move |view: Option<&V>| renders.lock().unwrap().push(view.cloned())
    }

    /// Get a clone of the recorded renders.
    pub fn renders(&self) -> Vec<Option<V>> {
        self.renders.lock().unwrap().clone()
    }

    /// Get the most recent render, if any render happened.
    pub fn last(&self) -> Option<Option<V>> {
        self.renders.lock().unwrap().last().cloned()
    }

    /// Get the number of recorded renders.
    pub fn count(&self) -> usize {
        self.renders.lock().unwrap().len()
    }

    /// Clear all recorded renders.
    pub fn clear(&self) {
        self.renders.lock().unwrap().clear();
    }
}

impl<V: Clone + Send + 'static> Default for RenderRecorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for RenderRecorder<V> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}
