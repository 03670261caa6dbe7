//! # Navigator
//!
//! Performs navigations: records the new location in the [`History`] backend,
//! then informs the [`LocationStore`].
//!
//! The navigator is also the only bridge from native back/forward movement
//! to the store. Constructing one installs the backend's single pop listener,
//! which forwards every restored location to
//! [`LocationStore::set_current_path`].
//!
//! Everything is synchronous: when [`Navigator::navigate`] returns, the
//! history entry exists, the store holds the new path, and every subscriber
//! has been notified.

use crate::store::LocationStore;
use std::sync::Arc;
use wayline_core::{History, NavigationError, Path};

/// Changes the current location.
///
/// Cheap to clone; clones share the history backend and the store.
#[derive(Clone)]
pub struct Navigator {
    history: Arc<dyn History>,
    store: LocationStore,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Creates a navigator over the process-wide store.
    ///
    /// The global store is initialized from the backend's current location
    /// if this is the first installation.
    pub fn install<H: History>(history: H) -> Result<Self, NavigationError> {
        let initial = history.location()?;
        let store = LocationStore::init_global(initial).clone();
        Self::with_store(history, store)
    }

    /// Creates a navigator over a fresh, isolated store starting at the
    /// backend's current location.
    pub fn new<H: History>(history: H) -> Result<Self, NavigationError> {
        let store = LocationStore::new(history.location()?);
        Self::with_store(history, store)
    }

    /// Creates a navigator over an existing store.
    pub fn with_store<H: History>(history: H, store: LocationStore) -> Result<Self, NavigationError> {
        let history: Arc<dyn History> = Arc::new(history);
        let target = store.downgrade();
        history.listen(Box::new(move |path: Path| {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(%path, "history entry restored");
            }
            if let Some(store) = target.upgrade() {
                store.set_current_path(path);
            }
        }))?;

        Ok(Self { history, store })
    }

    /// Navigates to `target`, adding a history entry.
    pub fn navigate(&self, target: impl AsRef<str>) -> Result<(), NavigationError> {
        let path = Path::parse(target.as_ref())?;
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(from = %self.store.current_path(), to = %path, "navigating");
        }
        self.history.push(&path)?;
        self.store.set_current_path(path);
        Ok(())
    }

    /// Navigates to `target`, replacing the active history entry.
    pub fn replace(&self, target: impl AsRef<str>) -> Result<(), NavigationError> {
        let path = Path::parse(target.as_ref())?;
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(from = %self.store.current_path(), to = %path, "replacing location");
        }
        self.history.replace(&path)?;
        self.store.set_current_path(path);
        Ok(())
    }

    /// Moves `delta` history entries.
    ///
    /// The store is updated by the backend's pop event, not by this call.
    pub fn go(&self, delta: isize) -> Result<(), NavigationError> {
        Ok(self.history.go(delta)?)
    }

    /// Moves one entry back.
    pub fn back(&self) -> Result<(), NavigationError> {
        Ok(self.history.back()?)
    }

    /// Moves one entry forward.
    pub fn forward(&self) -> Result<(), NavigationError> {
        Ok(self.history.forward()?)
    }

    /// Returns the store this navigator writes to.
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Returns the current path.
    pub fn current_path(&self) -> Path {
        self.store.current_path()
    }
}
