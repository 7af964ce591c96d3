//! Event listener and timer plumbing over `web-sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, Window};
use web_time::Duration;

/// An event listener that unregisters itself when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `event` on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref(),
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!("failed to remove {} listener: {e:?}", self.event);
        }
    }
}

/// Run `f` once after `delay`. Returns the timer handle.
pub(crate) fn set_timeout(
    window: &Window,
    delay: Duration,
    f: impl FnOnce() + 'static,
) -> Result<i32, JsValue> {
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis,
    )
}

/// Cancel a pending timer, if any.
pub(crate) fn clear_timeout(window: &Window, handle: Option<i32>) {
    if let Some(handle) = handle {
        window.clear_timeout_with_handle(handle);
    }
}
