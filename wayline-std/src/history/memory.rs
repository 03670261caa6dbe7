//! In-memory history stack.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use wayline_core::{History, HistoryError, Path, PopListener};

struct Entries {
    stack: Vec<Path>,
    index: usize,
}

/// A history backend that keeps its entries in memory.
///
/// Behaves like the browser's session history: pushing discards forward
/// entries, moving outside the stack is ignored, and every successful move is
/// reported to the pop listener synchronously.
pub struct MemoryHistory {
    entries: Mutex<Entries>,
    listener: OnceLock<PopListener>,
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.lock();
        f.debug_struct("MemoryHistory")
            .field("entries", &entries.stack)
            .field("index", &entries.index)
            .field("listening", &self.listener.get().is_some())
            .finish()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Path::root())
    }
}

impl MemoryHistory {
    /// Create a history with a single entry.
    pub fn new(initial: Path) -> Self {
        Self {
            entries: Mutex::new(Entries {
                stack: vec![initial],
                index: 0,
            }),
            listener: OnceLock::new(),
        }
    }

    /// Create a history from existing entries, with `index` active.
    pub fn with_entries<I>(entries: I, index: usize) -> Result<Self, HistoryError>
    where
        I: IntoIterator<Item = Path>,
    {
        let stack: Vec<Path> = entries.into_iter().collect();
        if index >= stack.len() {
            return Err(HistoryError::Backend(format!(
                "active index {index} outside {} entries",
                stack.len()
            )));
        }
        Ok(Self {
            entries: Mutex::new(Entries { stack, index }),
            listener: OnceLock::new(),
        })
    }

    /// Get a copy of all entries, oldest first.
    pub fn entries(&self) -> Vec<Path> {
        self.lock().stack.clone()
    }

    /// Get the position of the active entry.
    pub fn index(&self) -> usize {
        self.lock().index
    }

    /// Get the number of entries.
    pub fn depth(&self) -> usize {
        self.lock().stack.len()
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Result<Path, HistoryError> {
        let entries = self.lock();
        Ok(entries.stack[entries.index].clone())
    }

    fn push(&self, path: &Path) -> Result<(), HistoryError> {
        let mut entries = self.lock();
        let keep = entries.index + 1;
        entries.stack.truncate(keep);
        entries.stack.push(path.clone());
        entries.index = keep;
        Ok(())
    }

    fn replace(&self, path: &Path) -> Result<(), HistoryError> {
        let mut entries = self.lock();
        let index = entries.index;
        entries.stack[index] = path.clone();
        Ok(())
    }

    fn go(&self, delta: isize) -> Result<(), HistoryError> {
        let restored = {
            let mut entries = self.lock();
            let target = entries
                .index
                .checked_add_signed(delta)
                .filter(|target| *target < entries.stack.len());
            match target {
                Some(target) if delta != 0 => {
                    entries.index = target;
                    entries.stack[target].clone()
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::trace!(delta, index = entries.index, "ignoring history move");
                    }
                    return Ok(());
                }
            }
        };

        if let Some(listener) = self.listener.get() {
            listener(restored);
        }
        Ok(())
    }

    fn listen(&self, listener: PopListener) -> Result<(), HistoryError> {
        self.listener
            .set(listener)
            .map_err(|_| HistoryError::ListenerInstalled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn path(raw: &str) -> Path {
        Path::parse(raw).unwrap()
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let history = MemoryHistory::new(path("/a"));
        history.push(&path("/b")).unwrap();
        history.push(&path("/c")).unwrap();
        history.go(-2).unwrap();
        history.push(&path("/d")).unwrap();

        assert_eq!(history.entries(), vec![path("/a"), path("/d")]);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn test_go_out_of_bounds_is_ignored() {
        let history = MemoryHistory::new(path("/a"));
        let pops = Arc::new(Mutex::new(Vec::new()));
        let recorder = pops.clone();
        history
            .listen(Box::new(move |p| recorder.lock().unwrap().push(p)))
            .unwrap();

        history.back().unwrap();
        history.forward().unwrap();
        history.go(0).unwrap();

        assert!(pops.lock().unwrap().is_empty());
        assert_eq!(history.location().unwrap(), path("/a"));
    }

    #[test]
    fn test_back_and_forward_report_pops() {
        let history = MemoryHistory::new(path("/a"));
        let pops = Arc::new(Mutex::new(Vec::new()));
        let recorder = pops.clone();
        history
            .listen(Box::new(move |p| recorder.lock().unwrap().push(p)))
            .unwrap();

        history.push(&path("/b")).unwrap();
        history.back().unwrap();
        history.forward().unwrap();

        assert_eq!(*pops.lock().unwrap(), vec![path("/a"), path("/b")]);
    }

    #[test]
    fn test_second_listener_rejected() {
        let history = MemoryHistory::default();
        history.listen(Box::new(|_| {})).unwrap();
        let result = history.listen(Box::new(|_| {}));
        assert_eq!(result, Err(HistoryError::ListenerInstalled));
    }

    #[test]
    fn test_replace_keeps_depth() {
        let history = MemoryHistory::new(path("/a"));
        history.replace(&path("/z")).unwrap();
        assert_eq!(history.depth(), 1);
        assert_eq!(history.location().unwrap(), path("/z"));
    }

    #[test]
    fn test_with_entries_validates_index() {
        assert!(MemoryHistory::with_entries(vec![path("/a")], 1).is_err());
        let history = MemoryHistory::with_entries(vec![path("/a"), path("/b")], 0).unwrap();
        assert_eq!(history.location().unwrap(), path("/a"));
    }
}
