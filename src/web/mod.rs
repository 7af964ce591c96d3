//! Browser binding (feature `web`).
//!
//! [`PFold`] binds a [`PaperFold`] to a DOM element: it owns a DOM-backed
//! [`Surface`](crate::surface::Surface), schedules the sequencer's wake-ups with
//! `setTimeout`, feeds `transitionend` events from the flipping panel back
//! into it and keeps the viewport offsets current on window resize.
//!
//! [`pfold`] and [`pfold_call`] offer the plugin-style entry points: the
//! first initializes (or re-initializes) an element, the second invokes a
//! method on it by name and reports misuse on the console. [`pfold_destroy`]
//! (or the `"destroy"` method) drops the element's instance, which cancels
//! its timers and removes its listeners.
//!
//! ```js
//! pfold(el, { folds: 3, folddirection: ["left", "bottom"],
//!             onEndUnfolding: () => console.log("open") });
//! pfold_call(el, "unfold");
//! ```

mod dom;
mod events;
mod resize;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::Once;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, Window};
use web_time::Duration;

use self::dom::DomSurface;
use self::events::{clear_timeout, set_timeout, Listener};
use crate::error::FoldError;
use crate::geometry::Action;
use crate::options::FoldOptions;
use crate::resize::Debouncer;
use crate::sequencer::{Command, Outcome, PaperFold, Signal, Wake};

/// Attribute tying an element to its registered instance.
const ID_ATTRIBUTE: &str = "data-pfold-id";

thread_local! {
    static REGISTRY: RefCell<HashMap<u32, PFold>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        // Another logger may already be installed by the host app.
        let _ = console_log::init_with_level(log::Level::Debug);
    });
}

fn js_error(err: &FoldError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Mutable per-instance state, borrowed for the duration of one event.
struct Instance {
    fold: PaperFold,
    surface: DomSurface,
    timer: Option<i32>,
    debouncer: Debouncer,
    resize_timer: Option<i32>,
}

#[derive(Default)]
struct JsCallbacks {
    end_folding: Option<Function>,
    end_unfolding: Option<Function>,
}

impl JsCallbacks {
    fn from_options(options: &JsValue) -> Self {
        let field = |key: &str| {
            js_sys::Reflect::get(options, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.dyn_into::<Function>().ok())
        };
        Self {
            end_folding: field("onEndFolding"),
            end_unfolding: field("onEndUnfolding"),
        }
    }

    fn merge(&mut self, other: Self) {
        if other.end_folding.is_some() {
            self.end_folding = other.end_folding;
        }
        if other.end_unfolding.is_some() {
            self.end_unfolding = other.end_unfolding;
        }
    }
}

/// Shared between the handle and its event closures (which hold it
/// weakly).
pub(crate) struct Context {
    window: Window,
    state: RefCell<Instance>,
    callbacks: RefCell<JsCallbacks>,
    /// Set by the sequencer's completion callbacks; JS callbacks run once
    /// the state borrow is released so they may call back in.
    finished: Rc<Cell<Option<Action>>>,
}

impl Context {
    fn flush_callbacks(&self) {
        let Some(action) = self.finished.take() else {
            return;
        };
        let callback = {
            let callbacks = self.callbacks.borrow();
            match action {
                Action::Fold => callbacks.end_folding.clone(),
                Action::Unfold => callbacks.end_unfolding.clone(),
            }
        };
        if let Some(callback) = callback {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("{action} callback threw: {e:?}");
            }
        }
    }
}

/// Deliver `signal` to the sequencer and act on the requested wake-up.
fn deliver(ctx: &Rc<Context>, signal: Signal) {
    let wake = {
        let Ok(mut guard) = ctx.state.try_borrow_mut() else {
            log::warn!("pfold busy; dropped {signal:?}");
            return;
        };
        let state = &mut *guard;
        if signal == Signal::Timer {
            state.timer = None;
        }
        let wake = state.fold.handle(&mut state.surface, signal);
        if wake != Wake::Unchanged {
            // A transition end beat its backstop timer.
            clear_timeout(&ctx.window, state.timer.take());
        }
        wake
    };
    schedule(ctx, wake);
    ctx.flush_callbacks();
}

fn schedule(ctx: &Rc<Context>, wake: Wake) {
    let delay = match wake {
        Wake::After(delay) => delay,
        // The transition end itself arrives through the element's listener.
        Wake::TransitionEnd { backstop } => backstop,
        Wake::Idle | Wake::Unchanged => return,
    };
    let weak: Weak<Context> = Rc::downgrade(ctx);
    let fire = move || {
        if let Some(ctx) = weak.upgrade() {
            deliver(&ctx, Signal::Timer);
        }
    };
    match set_timeout(&ctx.window, delay, fire) {
        Ok(handle) => {
            if let Ok(mut state) = ctx.state.try_borrow_mut() {
                state.timer = Some(handle);
            }
        }
        Err(e) => log::error!("failed to schedule fold step: {e:?}"),
    }
}

fn run_command(ctx: &Rc<Context>, command: Command) -> Outcome {
    let outcome = {
        let Ok(mut guard) = ctx.state.try_borrow_mut() else {
            log::warn!("pfold busy; ignored {command:?}");
            return Outcome::Ignored;
        };
        let state = &mut *guard;
        state.fold.execute(command, &mut state.surface)
    };
    if let Outcome::Started(wake) = outcome {
        schedule(ctx, wake);
    }
    ctx.flush_callbacks();
    outcome
}

fn on_transition_end(weak: &Weak<Context>, event: &Event) {
    let Some(ctx) = weak.upgrade() else {
        return;
    };
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return;
    };
    let source = ctx
        .state
        .try_borrow()
        .ok()
        .and_then(|state| state.surface.transition_source(&target));
    if let Some(from_overlay) = source {
        deliver(&ctx, Signal::TransitionEnd { from_overlay });
    }
}

fn parse_options(options: &JsValue) -> Result<FoldOptions, FoldError> {
    if options.is_undefined() || options.is_null() {
        return Ok(FoldOptions::default());
    }
    let json = js_sys::JSON::stringify(options)
        .map_err(|e| FoldError::OptionsParse(format!("{e:?}")))?;
    FoldOptions::from_json(&String::from(json))
}

/// A fold/unfold instance bound to one element.
#[wasm_bindgen]
pub struct PFold {
    ctx: Rc<Context>,
    _transition_end: Listener,
    _resize: Listener,
}

#[wasm_bindgen]
impl PFold {
    /// Set up `element` with `options` (a plain object; unknown keys are
    /// ignored, `onEndFolding`/`onEndUnfolding` may be functions).
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, options: &JsValue) -> Result<PFold, JsValue> {
        init_logging();
        let fold_options = parse_options(options).map_err(|e| js_error(&e))?;
        let window = web_sys::window().ok_or_else(|| {
            js_error(&FoldError::Dom("no global window".to_owned()))
        })?;
        let mut surface = DomSurface::new(element).map_err(|e| js_error(&e))?;

        let finished = Rc::new(Cell::new(None));
        let on_fold = Rc::clone(&finished);
        let on_unfold = Rc::clone(&finished);
        let fold = PaperFold::new(fold_options, &mut surface)
            .on_end_folding(move || on_fold.set(Some(Action::Fold)))
            .on_end_unfolding(move || on_unfold.set(Some(Action::Unfold)));

        let ctx = Rc::new(Context {
            window,
            state: RefCell::new(Instance {
                fold,
                surface,
                timer: None,
                debouncer: Debouncer::new(),
                resize_timer: None,
            }),
            callbacks: RefCell::new(JsCallbacks::from_options(options)),
            finished,
        });

        let weak = Rc::downgrade(&ctx);
        let element = ctx.state.borrow().surface.element().clone();
        let transition_end = Listener::new(&element, "transitionend", move |event| {
            on_transition_end(&weak, &event);
        })?;
        let resize = resize::listen(&ctx)?;

        Ok(Self {
            ctx,
            _transition_end: transition_end,
            _resize: resize,
        })
    }

    /// Start unfolding. Returns false if already open or mid-sequence.
    pub fn unfold(&self) -> bool {
        matches!(run_command(&self.ctx, Command::Unfold), Outcome::Started(_))
    }

    /// Start folding. Returns false if closed or mid-sequence.
    pub fn fold(&self) -> bool {
        matches!(run_command(&self.ctx, Command::Fold), Outcome::Started(_))
    }

    /// `"opened"` or `"closed"`.
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        match run_command(&self.ctx, Command::Status) {
            Outcome::Status(status) => status.as_str().to_owned(),
            _ => String::new(),
        }
    }

    /// Re-run setup with new options; callbacks given here replace the
    /// previous ones. Refused (false) while a sequence is running.
    pub fn reinit(&self, options: &JsValue) -> Result<bool, JsValue> {
        let fold_options = parse_options(options).map_err(|e| js_error(&e))?;
        let Ok(mut guard) = self.ctx.state.try_borrow_mut() else {
            return Ok(false);
        };
        let state = &mut *guard;
        let done = state.fold.reinit(fold_options, &mut state.surface);
        if done {
            self.ctx
                .callbacks
                .borrow_mut()
                .merge(JsCallbacks::from_options(options));
        }
        Ok(done)
    }
}

impl PFold {
    /// Cancel pending timers and abandon any running sequence.
    fn shutdown(&self) {
        if let Ok(mut guard) = self.ctx.state.try_borrow_mut() {
            let state = &mut *guard;
            clear_timeout(&self.ctx.window, state.timer.take());
            clear_timeout(&self.ctx.window, state.resize_timer.take());
            state.fold.dispose(&mut state.surface);
        }
    }
}

impl Drop for PFold {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Run a command. The registry is not borrowed while it runs, so
/// completion callbacks may call back in.
fn call_method(ctx: &Rc<Context>, command: Command) -> JsValue {
    match run_command(ctx, command) {
        Outcome::Status(status) => JsValue::from_str(status.as_str()),
        Outcome::Started(_) | Outcome::Ignored | Outcome::Disposed => {
            JsValue::UNDEFINED
        }
    }
}

/// Registry id of `element`'s own instance. An id copied onto another
/// element (by `cloneNode`) does not resolve.
fn registered_id(element: &Element) -> Option<u32> {
    let id = element.get_attribute(ID_ATTRIBUTE)?.parse().ok()?;
    let node: &web_sys::Node = element;
    let owned = REGISTRY.with(|r| {
        r.borrow().get(&id).is_some_and(|pf| {
            pf.ctx.state.try_borrow().is_ok_and(|state| {
                state.surface.element().is_same_node(Some(node))
            })
        })
    });
    owned.then_some(id)
}

fn lookup(element: &Element) -> Option<Rc<Context>> {
    let id = registered_id(element)?;
    REGISTRY.with(|r| r.borrow().get(&id).map(|pf| Rc::clone(&pf.ctx)))
}

/// Initialize `element`, or re-initialize it with `options` if it already
/// has an instance.
#[wasm_bindgen]
pub fn pfold(element: HtmlElement, options: &JsValue) -> Result<(), JsValue> {
    init_logging();
    if let Some(id) = registered_id(&element) {
        let existing = REGISTRY
            .with(|r| r.borrow().get(&id).map(|pf| pf.reinit(options)));
        if let Some(result) = existing {
            if !result? {
                log::warn!("pfold re-initialization refused while animating");
            }
            return Ok(());
        }
    }

    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    });
    element.set_attribute(ID_ATTRIBUTE, &id.to_string())?;
    let instance = PFold::new(element, options)?;
    let _ = REGISTRY.with(|r| r.borrow_mut().insert(id, instance));
    Ok(())
}

/// Call a public method (`"unfold"`, `"fold"`, `"getStatus"`,
/// `"destroy"`) on an initialized element. Misuse is logged and ignored;
/// returns the status string for `getStatus`, `undefined` otherwise.
#[wasm_bindgen]
pub fn pfold_call(element: &HtmlElement, method: &str) -> JsValue {
    init_logging();
    let Some(ctx) = lookup(element) else {
        log::error!("{}", FoldError::NotInitialized(method.to_owned()));
        return JsValue::UNDEFINED;
    };
    match method.parse::<Command>() {
        Ok(Command::Destroy) => {
            drop(ctx);
            pfold_destroy(element);
            JsValue::UNDEFINED
        }
        Ok(command) => call_method(&ctx, command),
        Err(e) => {
            log::error!("{e}");
            JsValue::UNDEFINED
        }
    }
}

/// Drop `element`'s instance: pending timers are cleared, its listeners
/// removed, any running sequence abandoned and the id attribute removed.
/// The element can be initialized again with [`pfold`].
#[wasm_bindgen]
pub fn pfold_destroy(element: &HtmlElement) {
    let Some(id) = registered_id(element) else {
        log::warn!("pfold_destroy: element has no pfold instance");
        return;
    };
    if let Some(instance) = REGISTRY.with(|r| r.borrow_mut().remove(&id)) {
        instance.shutdown();
        // The call may come from a completion callback running inside one
        // of the instance's listeners; release them on the next tick.
        let window = instance.ctx.window.clone();
        if let Err(e) = set_timeout(&window, Duration::ZERO, move || {
            drop(instance);
        }) {
            log::error!("failed to release pfold instance: {e:?}");
        }
    }
    if let Err(e) = element.remove_attribute(ID_ATTRIBUTE) {
        log::warn!("failed to remove {ID_ATTRIBUTE}: {e:?}");
    }
}
