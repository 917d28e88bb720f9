//! Owned window scroll/resize subscription.
//!
//! Components hand a callback in and hold the returned value; dropping it
//! detaches the listeners, so a subscription can never outlive the component
//! that owns it.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const EVENTS: [&str; 2] = ["scroll", "resize"];

pub struct ScrollSubscription {
    window: web_sys::Window,
    closure: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    /// Attaches `callback` to the window's `scroll` and `resize` events.
    /// Returns `None` when there is no window or the browser rejects a
    /// listener; the caller simply skips scroll-driven updates in that case.
    pub fn subscribe(callback: impl FnMut() + 'static) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            warn!("scroll subscription skipped: no window");
            return None;
        };

        let subscription = Self {
            window,
            closure: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
        };
        for event in EVENTS {
            let listener = subscription.closure.as_ref().unchecked_ref();
            if subscription
                .window
                .add_event_listener_with_callback(event, listener)
                .is_err()
            {
                // Drop of the partially attached subscription detaches
                // whatever did register.
                gloo_console::error!("failed to attach window listener", event);
                return None;
            }
        }
        Some(subscription)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.closure.as_ref().unchecked_ref());
        }
    }
}
