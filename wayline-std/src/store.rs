//! # Location Store
//!
//! The single source of truth for "where are we now", with change
//! notification.
//!
//! The store is the only writer of the current path. Navigations and history
//! pops both funnel through [`LocationStore::set_current_path`], which is what
//! keeps the router free of races: there is one writer and one notification
//! pass at a time.
//!
//! # Notification Rules
//!
//! - **No-op sets are silent**: setting the current value notifies nobody.
//! - **Snapshot**: subscribers are copied before a pass; subscribing or
//!   unsubscribing during a pass only affects later passes.
//! - **Serialized passes**: a set issued while a pass is running (from a
//!   subscriber, or from another thread) is queued and applied once the
//!   running pass finishes, so every subscriber in a pass observes the same
//!   path.
//! - **Lock-free callbacks**: callbacks run without the store lock held and
//!   may freely read the store, subscribe, or navigate.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex, MutexGuard, OnceLock, PoisonError, Weak,
        atomic::{AtomicBool, Ordering},
    },
};
use wayline_core::Path;

type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

static GLOBAL: OnceLock<LocationStore> = OnceLock::new();

struct StoreState {
    path: Path,
    subscribers: Vec<(u64, Callback)>,
    next_id: u64,
    dispatching: bool,
    pending: VecDeque<Path>,
}

impl StoreState {
    fn snapshot(&self) -> Vec<Callback> {
        self.subscribers
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect()
    }

    fn next_pending(&mut self) -> Option<Path> {
        while let Some(next) = self.pending.pop_front() {
            if next != self.path {
                return Some(next);
            }
        }
        None
    }
}

struct StoreInner {
    state: Mutex<StoreState>,
}

/// Holds the current path and notifies subscribers when it changes.
///
/// `LocationStore` is a cheap handle; clones share the same state.
///
/// # Example
///
/// ```rust
/// use wayline_core::Path;
/// use wayline_std::store::LocationStore;
///
/// let store = LocationStore::new(Path::root());
/// let subscription = store.subscribe(|| println!("moved"));
///
/// store.set_current_path(Path::parse("/about").unwrap());
/// assert_eq!(store.current_path(), "/about");
///
/// subscription.unsubscribe();
/// ```
#[derive(Clone)]
pub struct LocationStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("LocationStore")
            .field("path", &state.path)
            .field("subscribers", &state.subscribers.len())
            .field("dispatching", &state.dispatching)
            .finish()
    }
}

impl LocationStore {
    /// Creates an isolated store starting at `initial`.
    pub fn new(initial: Path) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(StoreState {
                    path: initial,
                    subscribers: Vec::new(),
                    next_id: 0,
                    dispatching: false,
                    pending: VecDeque::new(),
                }),
            }),
        }
    }

    /// Creates the process-wide store, or returns it if it already exists.
    ///
    /// Only the first call decides the initial path.
    pub fn init_global(initial: Path) -> &'static LocationStore {
        let mut created = false;
        let store = GLOBAL.get_or_init(|| {
            created = true;
            LocationStore::new(initial)
        });
        #[cfg(feature = "tracing")]
        {
            if created {
                tracing::debug!(path = %store.current_path(), "initialized global location store");
            } else {
                tracing::trace!("global location store already initialized");
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = created;
        }
        store
    }

    /// Returns the process-wide store, if [`init_global`](Self::init_global)
    /// has run.
    pub fn global() -> Option<&'static LocationStore> {
        GLOBAL.get()
    }

    /// Returns the path the store was last informed of.
    pub fn current_path(&self) -> Path {
        self.lock().path.clone()
    }

    /// Registers `callback` to run after every path change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push((id, Arc::new(callback)));
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(id, subscribers = state.subscribers.len(), "subscriber registered");
        }

        Subscription {
            store: self.downgrade(),
            id,
            active: AtomicBool::new(true),
        }
    }

    /// Changes the current path and notifies subscribers in subscription
    /// order.
    ///
    /// Returns `false` when `path` is already the current value (or the last
    /// queued one); nobody is notified in that case.
    pub fn set_current_path(&self, path: Path) -> bool {
        let mut subscribers = {
            let mut state = self.lock();
            if state.dispatching {
                let latest = state.pending.back().unwrap_or(&state.path);
                if *latest == path {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::trace!(%path, "ignoring no-op path change");
                    }
                    return false;
                }
                #[cfg(feature = "tracing")]
                {
                    tracing::trace!(%path, "queueing path change behind active notification pass");
                }
                state.pending.push_back(path);
                return true;
            }
            if state.path == path {
                #[cfg(feature = "tracing")]
                {
                    tracing::trace!(%path, "ignoring no-op path change");
                }
                return false;
            }
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(from = %state.path, to = %path, "current path changed");
            }
            state.path = path;
            state.dispatching = true;
            state.snapshot()
        };

        let mut guard = DispatchGuard {
            store: self,
            armed: true,
        };
        loop {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(subscribers = subscribers.len(), "notifying subscribers");
            }
            for callback in &subscribers {
                callback();
            }

            let previous = {
                let mut state = self.lock();
                match state.next_pending() {
                    Some(next) => {
                        #[cfg(feature = "tracing")]
                        {
                            tracing::debug!(from = %state.path, to = %next, "current path changed");
                        }
                        state.path = next;
                        std::mem::replace(&mut subscribers, state.snapshot())
                    }
                    None => {
                        state.dispatching = false;
                        guard.armed = false;
                        break;
                    }
                }
            };
            // Callbacks may own subscriptions whose drop locks the store.
            drop(previous);
        }
        drop(subscribers);
        true
    }

    /// Get the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    /// Creates a handle that does not keep the store alive.
    pub fn downgrade(&self) -> WeakLocationStore {
        WeakLocationStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn unsubscribe(&self, id: u64) {
        let removed = {
            let mut state = self.lock();
            let removed = state
                .subscribers
                .iter()
                .position(|(existing, _)| *existing == id)
                .map(|index| state.subscribers.remove(index));
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(id, subscribers = state.subscribers.len(), "subscriber removed");
            }
            removed
        };
        // Dropped without the lock held; the callback may own subscriptions.
        drop(removed);
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// A non-owning [`LocationStore`] handle.
#[derive(Clone)]
pub struct WeakLocationStore {
    inner: Weak<StoreInner>,
}

impl WeakLocationStore {
    /// Returns the store if it is still alive.
    pub fn upgrade(&self) -> Option<LocationStore> {
        self.inner.upgrade().map(|inner| LocationStore { inner })
    }
}

/// Resets the dispatch flag if a subscriber panics mid-pass.
struct DispatchGuard<'a> {
    store: &'a LocationStore,
    armed: bool,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.store.lock();
            state.dispatching = false;
            state.pending.clear();
        }
    }
}

/// A registered subscriber.
///
/// Unsubscribes on drop. Unsubscribing twice is a no-op.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    store: WeakLocationStore,
    id: u64,
    active: AtomicBool,
}

impl Subscription {
    /// Stops future notifications to this subscriber.
    ///
    /// A pass already in progress still completes with its snapshot.
    pub fn unsubscribe(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            if let Some(store) = self.store.upgrade() {
                store.unsubscribe(self.id);
            }
        }
    }

    /// Whether this subscriber is still registered.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
