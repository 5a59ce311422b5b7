//! Headless router.
//!
//! [`Router`] holds the only mutable routing state: the current path and
//! what it resolved to. It is driven entirely by the bus it was mounted on.
//!
//! # Lifecycle
//!
//! ```text
//! mount ──> subscribe (immediate event) ──> resolve ──> on_render
//!              │
//!   NavigationEvent ──> path changed? ──yes──> resolve ──> on_render
//!              │                      └─no──> (nothing)
//! unmount / drop ──> unsubscribe
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::bus::{NavigationBus, NavigationEvent, Subscription};
use crate::pattern::Params;
use crate::route::{Resolution, RouteTable};

/// Current path and its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState<V> {
    pub path: String,
    pub resolution: Resolution<V>,
}

impl<V> RouterState<V> {
    /// The view to render: the matched route's, or the not-found view.
    pub fn view(&self) -> &V {
        self.resolution.view()
    }

    pub fn params(&self) -> Option<&Params> {
        self.resolution.params()
    }

    pub fn is_matched(&self) -> bool {
        self.resolution.is_matched()
    }
}

type RenderHook<V> = Box<dyn Fn(&RouterState<V>)>;

struct RouterInner<V> {
    table: RouteTable<V>,
    state: RefCell<RouterState<V>>,
    renders: Cell<usize>,
    on_render: Option<RenderHook<V>>,
}

impl<V: Clone> RouterInner<V> {
    fn handle(&self, event: &NavigationEvent) {
        let unchanged = self.renders.get() > 0 && self.state.borrow().path == event.path;
        if unchanged {
            return;
        }

        let next = RouterState {
            path: event.path.clone(),
            resolution: self.table.resolve(&event.path),
        };
        if !next.is_matched() {
            debug_log!("router: no route for {}", next.path);
        }
        self.state.replace(next.clone());
        self.renders.set(self.renders.get() + 1);

        // No borrow is held here; the hook may navigate.
        if let Some(on_render) = &self.on_render {
            on_render(&next);
        }
    }
}

/// A mounted router.
///
/// Dropping the router unmounts it.
pub struct Router<V> {
    inner: Rc<RouterInner<V>>,
    subscription: Subscription,
}

impl<V: Clone + 'static> Router<V> {
    /// Mount `table` on `bus`.
    pub fn mount(table: RouteTable<V>, bus: &NavigationBus) -> Self {
        Self::build(table, bus, None)
    }

    /// Mount `table` on `bus`, calling `on_render` each time the current
    /// path changes, starting with the path active at mount time.
    pub fn mount_with<F>(table: RouteTable<V>, bus: &NavigationBus, on_render: F) -> Self
    where
        F: Fn(&RouterState<V>) + 'static,
    {
        Self::build(table, bus, Some(Box::new(on_render)))
    }

    fn build(table: RouteTable<V>, bus: &NavigationBus, on_render: Option<RenderHook<V>>) -> Self {
        let path = bus.current_path();
        let resolution = table.resolve(&path);
        let inner = Rc::new(RouterInner {
            table,
            state: RefCell::new(RouterState { path, resolution }),
            renders: Cell::new(0),
            on_render,
        });

        let handler = inner.clone();
        let subscription = bus.subscribe(move |event| handler.handle(event));

        Self {
            inner,
            subscription,
        }
    }

    pub fn current_path(&self) -> String {
        self.inner.state.borrow().path.clone()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RouterState<V> {
        self.inner.state.borrow().clone()
    }

    /// The view for the current path.
    pub fn view(&self) -> V {
        self.inner.state.borrow().view().clone()
    }

    /// How many times the path changed (the mount counts as one).
    pub fn render_count(&self) -> usize {
        self.inner.renders.get()
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.inner.table
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop following the bus. The last state stays readable. Idempotent.
    pub fn unmount(&self) {
        self.subscription.unsubscribe();
    }
}
