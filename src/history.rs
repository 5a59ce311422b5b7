//! Browser session-history port.
//!
//! [`BrowserHistory`] implements [`HistoryPort`] on top of `window.history`.
//! Two URL layouts are supported:
//!
//! - [`HistoryMode::Path`]: `/about` (needs server-side fallback to `index.html`)
//! - [`HistoryMode::Hash`]: `#/about` (works on any static host, including IPFS)
//!
//! Every entry written through the port carries a [`HistoryEntry`] state
//! object, and the path is read back from it, so back/forward reports the
//! exact path that was navigated to. The URL is only parsed for entries
//! without that state (first page load, manual URL edits).
//!
//! Browser failures (`Err(JsValue)`) are logged and swallowed; navigation
//! has no error channel.

use std::cell::RefCell;

use navkit_core::{HistoryEntry, HistoryPort, PopListener, warn_log};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::{PopStateEvent, Window};

use crate::utils::dom;
use crate::utils::{hash_to_path, path_to_hash};

/// Where the router path is kept in the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Router path is the URL pathname.
    #[default]
    Path,
    /// Router path is the URL fragment.
    Hash,
}

impl HistoryMode {
    /// Router path for the active entry: the stored state when present,
    /// the URL otherwise.
    fn resolve(self, window: &Window, state: JsValue) -> String {
        entry_path(state).unwrap_or_else(|| self.read(window))
    }

    /// Router path for the window's current URL.
    fn read(self, window: &Window) -> String {
        match self {
            Self::Path => dom::location_pathname(window),
            Self::Hash => hash_to_path(&dom::location_hash(window)),
        }
    }

    /// URL written to the history entry for `path`.
    fn url(self, path: &str) -> String {
        match self {
            Self::Path => path.to_string(),
            Self::Hash => path_to_hash(path),
        }
    }
}

/// Path stored in a history state object written by [`BrowserHistory`].
fn entry_path(state: JsValue) -> Option<String> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value::<HistoryEntry>(state)
        .ok()
        .map(|entry| entry.path)
}

/// `window.history` as a [`HistoryPort`].
pub struct BrowserHistory {
    window: Window,
    mode: HistoryMode,
    popstate: RefCell<Option<Closure<dyn Fn(PopStateEvent)>>>,
}

impl BrowserHistory {
    /// Returns `None` outside a browser (no `window`).
    pub fn new(mode: HistoryMode) -> Option<Self> {
        Some(Self {
            window: dom::window()?,
            mode,
            popstate: RefCell::new(None),
        })
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn write(&self, path: &str, replace: bool) {
        let Some(history) = dom::history(&self.window) else {
            warn_log!("history unavailable; dropped navigation to {}", path);
            return;
        };

        let state = serde_wasm_bindgen::to_value(&HistoryEntry::new(path)).unwrap_or(JsValue::NULL);
        let url = self.mode.url(path);
        let result = if replace {
            history.replace_state_with_url(&state, "", Some(&url))
        } else {
            history.push_state_with_url(&state, "", Some(&url))
        };

        if let Err(err) = result {
            warn_log!("history write failed for {}: {:?}", path, err);
        }
    }

    fn detach_popstate(&self) {
        if let Some(closure) = self.popstate.borrow_mut().take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }
    }
}

impl HistoryPort for BrowserHistory {
    fn location(&self) -> String {
        let state = dom::history(&self.window)
            .and_then(|h| h.state().ok())
            .unwrap_or(JsValue::NULL);
        self.mode.resolve(&self.window, state)
    }

    fn push(&self, path: &str) {
        self.write(path, false);
    }

    fn replace(&self, path: &str) {
        self.write(path, true);
    }

    fn length(&self) -> usize {
        dom::history(&self.window)
            .and_then(|h| h.length().ok())
            .map_or(1, |len| len as usize)
    }

    fn go(&self, delta: isize) {
        let Ok(delta) = i32::try_from(delta) else {
            return;
        };
        if let Some(history) = dom::history(&self.window)
            && let Err(err) = history.go_with_delta(delta)
        {
            warn_log!("history.go({}) failed: {:?}", delta, err);
        }
    }

    fn href(&self, path: &str) -> String {
        self.mode.url(path)
    }

    fn on_pop(&self, listener: PopListener) {
        self.detach_popstate();

        let window = self.window.clone();
        let mode = self.mode;
        let closure = Closure::wrap(Box::new(move |event: PopStateEvent| {
            listener(mode.resolve(&window, event.state()));
        }) as Box<dyn Fn(PopStateEvent)>);

        if let Err(err) = self
            .window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            warn_log!("failed to listen for popstate: {:?}", err);
            return;
        }

        *self.popstate.borrow_mut() = Some(closure);
    }
}

impl Drop for BrowserHistory {
    fn drop(&mut self) {
        self.detach_popstate();
    }
}
