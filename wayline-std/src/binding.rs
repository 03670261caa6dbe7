//! Location binding for components outside a routes container.

use crate::store::{LocationStore, Subscription};
use wayline_core::Path;

/// A live view of the current path, held by a component.
///
/// Releases its subscription when dropped.
#[must_use = "dropping the binding stops change notifications"]
#[derive(Debug)]
pub struct LocationBinding {
    store: LocationStore,
    subscription: Subscription,
}

impl LocationBinding {
    /// The current path.
    pub fn path(&self) -> Path {
        self.store.current_path()
    }

    /// Whether change notifications are still delivered.
    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stops change notifications. Idempotent.
    pub fn release(&self) {
        self.subscription.unsubscribe();
    }
}

/// Binds `on_change` to path changes in `store`.
///
/// `on_change` receives the new path after every change. It is not called
/// for the path current at binding time; read that with
/// [`LocationBinding::path`].
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use wayline_core::Path;
/// use wayline_std::{binding::use_location, store::LocationStore};
///
/// let store = LocationStore::new(Path::root());
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let binding = use_location(&store, move |path| sink.lock().unwrap().push(path.to_string()));
///
/// store.set_current_path(Path::parse("/settings").unwrap());
/// assert_eq!(binding.path(), "/settings");
/// assert_eq!(*seen.lock().unwrap(), vec!["/settings".to_string()]);
/// ```
pub fn use_location<F>(store: &LocationStore, on_change: F) -> LocationBinding
where
    F: Fn(&Path) + Send + Sync + 'static,
{
    let reader = store.downgrade();
    let subscription = store.subscribe(move || {
        if let Some(store) = reader.upgrade() {
            on_change(&store.current_path());
        }
    });
    LocationBinding {
        store: store.clone(),
        subscription,
    }
}
