//! Rendering-surface capabilities the resolver writes to.
//!
//! The resolver never touches a real document. It sets one presentation
//! attribute through a [`PresentationSink`] and mirrors the mode onto a
//! checkbox-like [`ToggleControl`]. [`Document`] and [`Toggle`] are in-memory
//! surfaces whose clones share state, so the host (or a test) can observe
//! what was applied.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Receives the presentation attribute consumed by styling rules.
pub trait PresentationSink {
    /// Sets `name` on the root element.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Starts a transient visual transition.
    ///
    /// The sink removes it once `duration` has elapsed; starting another one
    /// simply replaces the deadline.
    fn begin_transition(&mut self, duration: Duration);
}

/// A control with a boolean checked state, such as the theme switch.
pub trait ToggleControl {
    /// Stable identifier the control is located by.
    fn id(&self) -> &str;

    fn is_checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);
}

#[derive(Debug, Default)]
struct DocumentState {
    attributes: BTreeMap<String, String>,
    transition_until: Option<Instant>,
}

/// In-memory root element.
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    /// Whether the transition started by the last
    /// [`begin_transition`](PresentationSink::begin_transition) is still running at `now`.
    pub fn transition_active_at(&self, now: Instant) -> bool {
        self.state
            .borrow()
            .transition_until
            .is_some_and(|until| now < until)
    }
}

impl PresentationSink for Document {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn begin_transition(&mut self, duration: Duration) {
        self.state.borrow_mut().transition_until = Some(Instant::now() + duration);
    }
}

/// In-memory checkbox.
#[derive(Debug, Clone)]
pub struct Toggle {
    id: Rc<str>,
    checked: Rc<Cell<bool>>,
}

impl Toggle {
    pub fn new(id: &str) -> Self {
        Self {
            id: Rc::from(id),
            checked: Rc::new(Cell::new(false)),
        }
    }
}

impl ToggleControl for Toggle {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked.set(checked);
    }
}

impl<P: PresentationSink + ?Sized> PresentationSink for Box<P> {
    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }

    fn begin_transition(&mut self, duration: Duration) {
        (**self).begin_transition(duration)
    }
}

impl<T: ToggleControl + ?Sized> ToggleControl for Box<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }

    fn set_checked(&mut self, checked: bool) {
        (**self).set_checked(checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_attribute_shared_between_clones() {
        let observer = Document::new();
        let mut sink = observer.clone();
        sink.set_attribute("data-theme", "dark");
        assert_eq!(observer.attribute("data-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_transition_expires() {
        let mut doc = Document::new();
        let start = Instant::now();
        assert!(!doc.transition_active_at(start));

        doc.begin_transition(Duration::from_millis(300));
        assert!(doc.transition_active_at(start));
        assert!(!doc.transition_active_at(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_toggle_shared_state() {
        let observer = Toggle::new("themeSwitcher");
        let mut control = observer.clone();
        control.set_checked(true);
        assert!(observer.is_checked());
        assert_eq!(observer.id(), "themeSwitcher");
    }
}
