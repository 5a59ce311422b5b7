//! Session-history facade.
//!
//! All history mutation goes through a [`HistoryPort`]. Application code
//! never touches the underlying history object directly; it calls the
//! [`Navigator`](crate::Navigator), which drives the port and then
//! notifies the navigation bus. Native back/forward traversal reaches the
//! bus through the single [`PopListener`] a port accepts.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Callback invoked with the new path after a native traversal.
pub type PopListener = Rc<dyn Fn(String)>;

/// State object stored with each history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: String,
}

impl HistoryEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Session-history primitives consumed by the router.
pub trait HistoryPort {
    /// Path of the active history entry.
    fn location(&self) -> String;

    /// Push a new entry and make it active.
    fn push(&self, path: &str);

    /// Overwrite the active entry.
    fn replace(&self, path: &str);

    /// Number of entries in the history stack.
    fn length(&self) -> usize;

    /// Move through the stack by `delta` entries. Out-of-range moves are
    /// ignored.
    fn go(&self, delta: isize);

    /// Value for an anchor's `href` attribute that points at `path`.
    fn href(&self, path: &str) -> String {
        path.to_string()
    }

    /// Install the listener notified after every traversal. Replaces any
    /// previously installed listener.
    fn on_pop(&self, listener: PopListener);
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<String>,
    index: usize,
}

/// In-memory history stack.
///
/// Behaves like the browser's session history: pushing discards forward
/// entries, traversal beyond either end is a no-op, and the pop listener
/// fires synchronously after a successful traversal.
pub struct MemoryHistory {
    state: RefCell<MemoryState>,
    pop_listener: RefCell<Option<PopListener>>,
}

impl MemoryHistory {
    /// Create a stack holding a single entry at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            state: RefCell::new(MemoryState {
                entries: vec![initial.into()],
                index: 0,
            }),
            pop_listener: RefCell::new(None),
        }
    }

    /// Snapshot of every entry, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.state.borrow().entries.clone()
    }

    /// Position of the active entry.
    pub fn index(&self) -> usize {
        self.state.borrow().index
    }

    pub fn can_go_back(&self) -> bool {
        self.index() > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let state = self.state.borrow();
        state.index + 1 < state.entries.len()
    }
}

impl HistoryPort for MemoryHistory {
    fn location(&self) -> String {
        let state = self.state.borrow();
        state.entries[state.index].clone()
    }

    fn push(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        let next = state.index + 1;
        state.entries.truncate(next);
        state.entries.push(path.to_string());
        state.index = next;
    }

    fn replace(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        let index = state.index;
        state.entries[index] = path.to_string();
    }

    fn length(&self) -> usize {
        self.state.borrow().entries.len()
    }

    fn go(&self, delta: isize) {
        if delta == 0 {
            return;
        }

        let path = {
            let mut state = self.state.borrow_mut();
            let Some(target) = state.index.checked_add_signed(delta) else {
                return;
            };
            if target >= state.entries.len() {
                return;
            }
            state.index = target;
            state.entries[target].clone()
        };

        // Clone out so the listener may call back into this history.
        let listener = self.pop_listener.borrow().clone();
        if let Some(listener) = listener {
            listener(path);
        }
    }

    fn on_pop(&self, listener: PopListener) {
        *self.pop_listener.borrow_mut() = Some(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_replace() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        assert_eq!(history.length(), 3);
        assert_eq!(history.location(), "/b");

        history.replace("/c");
        assert_eq!(history.length(), 3);
        assert_eq!(history.entries(), vec!["/", "/a", "/c"]);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        history.go(-2);
        assert!(history.can_go_forward());

        history.push("/c");
        assert_eq!(history.entries(), vec!["/", "/c"]);
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_go_fires_pop_listener() {
        let history = MemoryHistory::new("/");
        history.push("/a");

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        history.on_pop(Rc::new(move |path| sink.borrow_mut().push(path)));

        history.go(-1);
        history.go(1);
        assert_eq!(*seen.borrow(), vec!["/", "/a"]);
    }

    #[test]
    fn test_go_out_of_range_is_ignored() {
        let history = MemoryHistory::new("/");
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        history.on_pop(Rc::new(move |_| *counter.borrow_mut() += 1));

        history.go(-1);
        history.go(1);
        history.go(0);
        assert_eq!(history.location(), "/");
        assert_eq!(history.index(), 0);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_default_href_is_path() {
        let history = MemoryHistory::new("/");
        assert_eq!(history.href("/about"), "/about");
    }

    #[test]
    fn test_history_entry_json() {
        let entry = HistoryEntry::new("/about");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"path":"/about"}"#);
    }
}
