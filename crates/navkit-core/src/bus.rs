//! Navigation event bus.
//!
//! A [`NavigationBus`] fans every navigation out to its subscribers. It is an
//! ordinary value owned by the application root and handed to whoever needs
//! it, so several independent routers can observe the same history.
//!
//! # Delivery
//!
//! - Handlers run synchronously, in subscription order, once per event.
//! - A new subscriber is called immediately with the current path.
//! - An event emitted from inside a handler is queued and delivered after
//!   the event in flight has reached every listener.
//! - A handler removed mid-dispatch is not called again, not even for the
//!   event in flight.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// How the path became current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    /// Synthesized for a fresh subscriber.
    Initial,
    /// Programmatic navigation that added a history entry.
    Push,
    /// Programmatic navigation that overwrote the active entry.
    Replace,
    /// Native back/forward traversal.
    Pop,
}

/// Notification that `path` became current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub path: String,
    pub kind: NavigationKind,
}

impl NavigationEvent {
    pub fn new(path: impl Into<String>, kind: NavigationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

struct Listener {
    active: Cell<bool>,
    handler: Box<dyn Fn(&NavigationEvent)>,
}

struct BusInner {
    current: RefCell<String>,
    listeners: RefCell<Vec<Rc<Listener>>>,
    queue: RefCell<VecDeque<NavigationEvent>>,
    dispatching: Cell<bool>,
}

/// Ends a dispatch, even one cut short by a panicking handler. Events still
/// queued at that point are discarded so they do not leak into the next
/// emit.
struct DispatchGuard<'a>(&'a BusInner);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.queue.borrow_mut().clear();
        self.0.dispatching.set(false);
    }
}

/// Publish point for navigation events. Cloning yields another handle to
/// the same bus.
#[derive(Clone)]
pub struct NavigationBus {
    inner: Rc<BusInner>,
}

impl NavigationBus {
    /// Create a bus whose current path is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(BusInner {
                current: RefCell::new(initial.into()),
                listeners: RefCell::new(Vec::new()),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Path carried by the most recently dispatched event.
    pub fn current_path(&self) -> String {
        self.inner.current.borrow().clone()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Register `handler` and call it once, right away, with the current
    /// path. The handler stays registered until the returned
    /// [`Subscription`] is unsubscribed or dropped.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&NavigationEvent) + 'static,
    {
        let listener = Rc::new(Listener {
            active: Cell::new(true),
            handler: Box::new(handler),
        });
        self.inner.listeners.borrow_mut().push(listener.clone());
        debug_log!("bus: subscribed ({} listeners)", self.listener_count());

        let initial = NavigationEvent::new(self.current_path(), NavigationKind::Initial);
        (listener.handler)(&initial);

        Subscription {
            bus: Rc::downgrade(&self.inner),
            listener,
        }
    }

    /// Deliver `event` to every subscriber.
    pub fn emit(&self, event: NavigationEvent) {
        self.inner.queue.borrow_mut().push_back(event);

        // Nested emit: the outer loop picks the event up.
        if self.inner.dispatching.replace(true) {
            return;
        }
        let _guard = DispatchGuard(&self.inner);

        loop {
            let Some(event) = self.inner.queue.borrow_mut().pop_front() else {
                break;
            };
            debug_log!("bus: {:?} {}", event.kind, event.path);
            self.inner.current.replace(event.path.clone());

            // Snapshot so handlers can subscribe/unsubscribe while we iterate.
            let listeners = self.inner.listeners.borrow().clone();
            for listener in listeners {
                if listener.active.get() {
                    (listener.handler)(&event);
                }
            }
        }
    }
}

/// Handle to a registered bus handler.
///
/// Unsubscribing is idempotent and also happens on drop.
pub struct Subscription {
    bus: Weak<BusInner>,
    listener: Rc<Listener>,
}

impl Subscription {
    /// Deregister the handler. Safe to call any number of times, and after
    /// the bus itself is gone.
    pub fn unsubscribe(&self) {
        if !self.listener.active.replace(false) {
            return;
        }
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners
                .borrow_mut()
                .retain(|l| !Rc::ptr_eq(l, &self.listener));
            debug_log!("bus: unsubscribed ({} listeners)", bus.listeners.borrow().len());
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorder(log: &Log, tag: &'static str) -> impl Fn(&NavigationEvent) + 'static {
        let log = log.clone();
        move |event: &NavigationEvent| log.borrow_mut().push(format!("{tag}:{}", event.path))
    }

    #[test]
    fn test_subscribe_invokes_immediately() {
        let bus = NavigationBus::new("/start");
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = kinds.clone();
        let _sub = bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        assert_eq!(
            *kinds.borrow(),
            vec![NavigationEvent::new("/start", NavigationKind::Initial)]
        );
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();
        let _a = bus.subscribe(recorder(&log, "a"));
        let _b = bus.subscribe(recorder(&log, "b"));
        log.borrow_mut().clear();

        bus.emit(NavigationEvent::new("/x", NavigationKind::Push));
        bus.emit(NavigationEvent::new("/y", NavigationKind::Push));
        assert_eq!(*log.borrow(), vec!["a:/x", "b:/x", "a:/y", "b:/y"]);
        assert_eq!(bus.current_path(), "/y");
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();
        let sub = bus.subscribe(recorder(&log, "a"));
        assert_eq!(bus.listener_count(), 1);

        sub.unsubscribe();
        bus.emit(NavigationEvent::new("/x", NavigationKind::Push));
        assert_eq!(*log.borrow(), vec!["a:/"]);
        assert_eq!(bus.listener_count(), 0);
        assert!(!sub.is_active());
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();
        let sub = bus.subscribe(recorder(&log, "a"));
        let _other = bus.subscribe(recorder(&log, "b"));

        sub.unsubscribe();
        sub.unsubscribe();
        assert_eq!(bus.listener_count(), 1);
        drop(sub);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();
        {
            let _sub = bus.subscribe(recorder(&log, "a"));
            assert_eq!(bus.listener_count(), 1);
        }
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_after_bus_dropped() {
        let bus = NavigationBus::new("/");
        let sub = bus.subscribe(|_| {});
        drop(bus);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_nested_emit_is_queued() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();

        let redirect_bus = bus.clone();
        let redirect_log = log.clone();
        let _redirect = bus.subscribe(move |event| {
            redirect_log.borrow_mut().push(format!("r:{}", event.path));
            if event.path == "/private" {
                redirect_bus.emit(NavigationEvent::new("/login", NavigationKind::Replace));
            }
        });
        let _watcher = bus.subscribe(recorder(&log, "w"));
        log.borrow_mut().clear();

        bus.emit(NavigationEvent::new("/private", NavigationKind::Push));
        assert_eq!(
            *log.borrow(),
            vec!["r:/private", "w:/private", "r:/login", "w:/login"]
        );
        assert_eq!(bus.current_path(), "/login");
    }

    #[test]
    fn test_unsubscribe_during_dispatch() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let slot = victim.clone();
        let _killer = bus.subscribe(move |event| {
            if event.path == "/x"
                && let Some(sub) = slot.borrow().as_ref()
            {
                sub.unsubscribe();
            }
        });
        *victim.borrow_mut() = Some(bus.subscribe(recorder(&log, "v")));
        log.borrow_mut().clear();

        bus.emit(NavigationEvent::new("/x", NavigationKind::Push));
        assert!(log.borrow().is_empty());
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_panicking_handler_drops_queued_events() {
        let bus = NavigationBus::new("/");
        let log: Log = Rc::default();

        let nested = bus.clone();
        let _faulty = bus.subscribe(move |event| {
            if event.path == "/boom" {
                nested.emit(NavigationEvent::new("/queued", NavigationKind::Push));
                panic!("handler failed");
            }
        });
        let _rec = bus.subscribe(recorder(&log, "r"));
        log.borrow_mut().clear();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            bus.emit(NavigationEvent::new("/boom", NavigationKind::Push));
        }));
        assert!(result.is_err());

        bus.emit(NavigationEvent::new("/next", NavigationKind::Push));
        assert_eq!(*log.borrow(), vec!["r:/next"]);
        assert_eq!(bus.current_path(), "/next");
    }

    #[test]
    fn test_event_json() {
        let event = NavigationEvent::new("/about", NavigationKind::Pop);
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"path":"/about","kind":"pop"}"#);
    }
}
