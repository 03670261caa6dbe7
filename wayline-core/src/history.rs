//! # Persisted Navigation History
//!
//! A [`History`] is the backend that owns the back/forward stack. In a
//! browser it wraps `window.history`; on native targets and in tests it is an
//! in-memory stack.
//!
//! The router never reads the stack directly. It pushes or replaces entries
//! when navigating, and it learns about back/forward movement only through the
//! single [`PopListener`] installed at startup.

use crate::{error::HistoryError, path::Path};

/// Callback invoked with the restored location after a back/forward movement.
pub type PopListener = Box<dyn Fn(Path) + Send + Sync + 'static>;

/// A navigation history backend.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a navigation `History` backend",
    label = "missing `History` implementation",
    note = "Implement `History` to let the router persist navigations."
)]
pub trait History: Send + Sync + 'static {
    /// Returns the path of the active history entry.
    fn location(&self) -> Result<Path, HistoryError>;

    /// Appends a new entry for `path` and makes it active.
    ///
    /// Entries after the active one are discarded. The pop listener is not
    /// invoked.
    fn push(&self, path: &Path) -> Result<(), HistoryError>;

    /// Overwrites the active entry with `path`.
    fn replace(&self, path: &Path) -> Result<(), HistoryError>;

    /// Moves `delta` entries back (negative) or forward (positive).
    ///
    /// A move outside the stack is ignored. A successful move is reported to
    /// the pop listener.
    fn go(&self, delta: isize) -> Result<(), HistoryError>;

    /// Installs the pop listener.
    ///
    /// A backend accepts exactly one listener for its whole lifetime and
    /// returns [`HistoryError::ListenerInstalled`] afterwards.
    fn listen(&self, listener: PopListener) -> Result<(), HistoryError>;

    /// Moves one entry back.
    fn back(&self) -> Result<(), HistoryError> {
        self.go(-1)
    }

    /// Moves one entry forward.
    fn forward(&self) -> Result<(), HistoryError> {
        self.go(1)
    }
}

impl<H: History + ?Sized> History for std::sync::Arc<H> {
    fn location(&self) -> Result<Path, HistoryError> {
        (**self).location()
    }

    fn push(&self, path: &Path) -> Result<(), HistoryError> {
        (**self).push(path)
    }

    fn replace(&self, path: &Path) -> Result<(), HistoryError> {
        (**self).replace(path)
    }

    fn go(&self, delta: isize) -> Result<(), HistoryError> {
        (**self).go(delta)
    }

    fn listen(&self, listener: PopListener) -> Result<(), HistoryError> {
        (**self).listen(listener)
    }
}
