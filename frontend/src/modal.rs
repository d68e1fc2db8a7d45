use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};
use yew::Callback;

use crate::error::{describe, BrowserError};

const KEYDOWN: &str = "keydown";

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Visibility of an overlay plus whatever it holds while open.
///
/// `G` is acquired on the hidden → visible edge and dropped on every way out:
/// `hide`, or dropping the controller itself when the owning component goes away.
pub struct ModalController<G> {
    visible: bool,
    guard: Option<G>,
}

impl<G> Default for ModalController<G> {
    fn default() -> Self {
        Self {
            visible: false,
            guard: None,
        }
    }
}

impl<G> ModalController<G> {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn holds_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// No-op while already visible, so a guard is never acquired twice.
    pub fn show(&mut self, acquire: impl FnOnce() -> Option<G>) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.guard = acquire();
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.guard = None;
    }

    /// Hides on a dismiss key. Returns whether the key closed the modal.
    pub fn on_key(&mut self, key: &str) -> bool {
        if !self.visible || !is_dismiss_key(key) {
            return false;
        }
        self.hide();
        true
    }
}

/// Window-level `keydown` listener, removed again when dropped.
pub struct KeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn attach(on_key: Callback<String>) -> Result<Self, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            on_key.emit(e.key());
        }) as Box<dyn FnMut(KeyboardEvent)>);

        window
            .add_event_listener_with_callback(KEYDOWN, callback.as_ref().unchecked_ref())
            .map_err(|err| BrowserError::Listener {
                event: KEYDOWN,
                reason: describe(&err),
            })?;
        log::debug!("Key listener attached");

        Ok(Self { window, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback(KEYDOWN, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => log::debug!("Key listener detached"),
            Err(err) => log::warn!("Failed to detach key listener: {}", describe(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts live guards and total acquisitions.
    #[derive(Default)]
    struct Registry {
        live: Cell<usize>,
        acquired: Cell<usize>,
    }

    struct CountedGuard(Rc<Registry>);

    impl Drop for CountedGuard {
        fn drop(&mut self) {
            self.0.live.set(self.0.live.get() - 1);
        }
    }

    fn acquire(registry: &Rc<Registry>) -> impl FnOnce() -> Option<CountedGuard> {
        let registry = registry.clone();
        move || {
            registry.live.set(registry.live.get() + 1);
            registry.acquired.set(registry.acquired.get() + 1);
            Some(CountedGuard(registry))
        }
    }

    #[test]
    fn starts_hidden_without_listener() {
        let modal = ModalController::<CountedGuard>::default();
        assert!(!modal.is_visible());
        assert!(!modal.holds_guard());
    }

    #[test]
    fn escape_hides_and_releases_listener() {
        let registry = Rc::new(Registry::default());
        let mut modal = ModalController::default();
        modal.show(acquire(&registry));

        assert!(!modal.on_key("Enter"));
        assert!(modal.is_visible());
        assert!(modal.holds_guard());
        assert_eq!(registry.live.get(), 1);

        assert!(modal.on_key("Escape"));
        assert!(!modal.is_visible());
        assert!(!modal.holds_guard());
        assert_eq!(registry.live.get(), 0);

        // Already hidden: nothing left to close.
        assert!(!modal.on_key("Escape"));
        assert!(!modal.is_visible());
    }

    #[test]
    fn escape_then_reopen_registers_once() {
        let registry = Rc::new(Registry::default());
        let mut modal = ModalController::default();

        modal.show(acquire(&registry));
        assert!(modal.on_key("Escape"));
        modal.show(acquire(&registry));
        assert!(modal.is_visible());
        assert_eq!(registry.acquired.get(), 2);
        assert_eq!(registry.live.get(), 1);
    }

    #[test]
    fn only_escape_dismisses() {
        for key in ["Enter", "Esc", "escape", " ", "q"] {
            assert!(!is_dismiss_key(key), "{key}");
        }
    }

    #[test]
    fn repeated_show_does_not_register_twice() {
        let registry = Rc::new(Registry::default());
        let mut modal = ModalController::default();

        modal.show(acquire(&registry));
        modal.show(acquire(&registry));
        assert_eq!(registry.acquired.get(), 1);
        assert_eq!(registry.live.get(), 1);
    }

    #[test]
    fn cycles_never_leak_listeners() {
        let registry = Rc::new(Registry::default());
        let mut modal = ModalController::default();

        for round in 1..=5 {
            modal.show(acquire(&registry));
            assert_eq!(registry.live.get(), 1);
            modal.hide();
            assert_eq!(registry.live.get(), 0);
            assert_eq!(registry.acquired.get(), round);
        }
        modal.hide();
        assert_eq!(registry.live.get(), 0);
    }

    #[test]
    fn dropping_controller_releases_listener() {
        let registry = Rc::new(Registry::default());
        let mut modal = ModalController::default();
        modal.show(acquire(&registry));
        drop(modal);
        assert_eq!(registry.live.get(), 0);
    }

    #[test]
    fn stays_visible_when_listener_unavailable() {
        let mut modal = ModalController::<CountedGuard>::default();
        modal.show(|| None);
        assert!(modal.is_visible());
        assert!(!modal.holds_guard());
        modal.hide();
        assert!(!modal.is_visible());
    }
}
