//! Headless link behaviour.
//!
//! The host framework renders the anchor element and forwards its click
//! events to [`Link::activate`].

use crate::navigator::Navigator;

/// The parts of a click/activation event a link needs.
pub trait ActivationEvent {
    /// Suppress the element's native navigation.
    fn prevent_default(&self);

    /// `true` for clicks the browser should handle itself: modifier keys
    /// held (open in new tab/window, download) or a non-primary button.
    fn is_modified(&self) -> bool {
        false
    }
}

/// What [`Link::activate`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Native navigation suppressed; client-side navigation performed.
    Intercepted,
    /// Left to the browser.
    PassedThrough,
}

/// Link target plus pass-through presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    to: String,
    replace: bool,
    target: Option<String>,
    attrs: Vec<(String, String)>,
}

impl Link {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: false,
            target: None,
            attrs: Vec::new(),
        }
    }

    /// Replace the active history entry instead of pushing.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Browsing context for the link (`_blank`, a frame name, ...).
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Add an attribute to copy onto the rendered element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn is_replace(&self) -> bool {
        self.replace
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// `href` attribute value for this link.
    pub fn href(&self, navigator: &Navigator) -> String {
        navigator.href(&self.to)
    }

    /// Whether an activation should become client-side navigation.
    pub fn intercepts<E: ActivationEvent>(&self, event: &E) -> bool {
        !event.is_modified() && self.target.as_deref().is_none_or(|t| t == "_self")
    }

    /// Handle an activation.
    ///
    /// Intercepted activations run in this order: `prevent_default`, then
    /// `on_activate`, then `navigate`. Activations left to the browser only
    /// run `on_activate`.
    pub fn activate<E: ActivationEvent>(
        &self,
        event: &E,
        navigator: &Navigator,
        on_activate: Option<&dyn Fn(&E)>,
    ) -> Activation {
        if !self.intercepts(event) {
            if let Some(on_activate) = on_activate {
                on_activate(event);
            }
            return Activation::PassedThrough;
        }

        event.prevent_default();
        if let Some(on_activate) = on_activate {
            on_activate(event);
        }
        navigator.navigate(&self.to, self.replace);
        Activation::Intercepted
    }
}
