//! History bridge.

use std::rc::Rc;

use crate::bus::{NavigationBus, NavigationEvent, NavigationKind};
use crate::history::HistoryPort;

/// Changes the visible location through a [`HistoryPort`] and reports every
/// change on a [`NavigationBus`].
///
/// Programmatic navigation emits right after the port call. Native
/// traversal (the browser's back/forward buttons, or [`Navigator::back`])
/// is reported through the pop listener installed on the port at
/// construction, so both paths reach the same subscribers.
#[derive(Clone)]
pub struct Navigator {
    history: Rc<dyn HistoryPort>,
    bus: NavigationBus,
}

impl Navigator {
    /// Wrap `history`, creating a bus that starts at its current location.
    pub fn new(history: Rc<dyn HistoryPort>) -> Self {
        let bus = NavigationBus::new(history.location());

        let pop_bus = bus.clone();
        history.on_pop(Rc::new(move |path| {
            pop_bus.emit(NavigationEvent::new(path, NavigationKind::Pop));
        }));

        Self { history, bus }
    }

    /// Go to `path`, overwriting the active entry when `replace` is set.
    ///
    /// The path is not validated; an unknown path renders the not-found view.
    pub fn navigate(&self, path: &str, replace: bool) {
        let kind = if replace {
            self.history.replace(path);
            NavigationKind::Replace
        } else {
            self.history.push(path);
            NavigationKind::Push
        };
        debug_log!("navigate: {:?} {}", kind, path);
        self.bus.emit(NavigationEvent::new(path, kind));
    }

    pub fn push(&self, path: &str) {
        self.navigate(path, false);
    }

    pub fn replace(&self, path: &str) {
        self.navigate(path, true);
    }

    /// Traverse one entry back.
    pub fn back(&self) {
        self.go(-1);
    }

    /// Traverse one entry forward.
    pub fn forward(&self) {
        self.go(1);
    }

    /// Traverse `delta` entries. Subscribers hear about it once the port
    /// reports the pop.
    pub fn go(&self, delta: isize) {
        self.history.go(delta);
    }

    pub fn current_path(&self) -> String {
        self.bus.current_path()
    }

    pub fn history_len(&self) -> usize {
        self.history.length()
    }

    /// `href` value for a link to `path`.
    pub fn href(&self, path: &str) -> String {
        self.history.href(path)
    }

    pub fn bus(&self) -> &NavigationBus {
        &self.bus
    }
}
