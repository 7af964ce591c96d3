//! Window resize listener feeding the [`Debouncer`].
//!
//! Each burst of `resize` events re-measures the element's viewport offsets
//! once the window has been quiet for [`Debouncer::THRESHOLD`].

use std::rc::{Rc, Weak};

use wasm_bindgen::JsValue;
use web_time::{Duration, Instant};

use super::events::{set_timeout, Listener};
use super::Context;
use crate::resize::{DebouncePoll, Debouncer};

/// Listen for window resizes on behalf of `ctx`.
pub(crate) fn listen(ctx: &Rc<Context>) -> Result<Listener, JsValue> {
    let weak = Rc::downgrade(ctx);
    Listener::new(&ctx.window, "resize", move |_event| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let arm = ctx
            .state
            .try_borrow_mut()
            .map(|mut state| state.debouncer.notify(Instant::now()))
            .unwrap_or(false);
        if arm {
            arm_timer(&ctx, Debouncer::THRESHOLD);
        }
    })
}

fn arm_timer(ctx: &Rc<Context>, delay: Duration) {
    let weak: Weak<Context> = Rc::downgrade(ctx);
    match set_timeout(&ctx.window, delay, move || on_timer(&weak)) {
        Ok(handle) => {
            if let Ok(mut state) = ctx.state.try_borrow_mut() {
                state.resize_timer = Some(handle);
            }
        }
        Err(e) => log::error!("failed to arm resize timer: {e:?}"),
    }
}

fn on_timer(weak: &Weak<Context>) {
    let Some(ctx) = weak.upgrade() else {
        return;
    };
    let poll = {
        let Ok(mut guard) = ctx.state.try_borrow_mut() else {
            return;
        };
        let state = &mut *guard;
        state.resize_timer = None;
        let poll = state.debouncer.poll(Instant::now());
        if poll == DebouncePoll::Fire {
            state.fold.refresh_offsets(&state.surface);
            log::debug!("viewport offsets updated: {:?}", state.fold.offsets());
        }
        poll
    };
    if let DebouncePoll::Rearm(delay) = poll {
        arm_timer(&ctx, delay);
    }
}
