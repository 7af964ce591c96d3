//! The fold sequencer: an explicit state machine over fold steps.
//!
//! A sequence of N folds runs N transition steps followed by a terminal
//! step. Each transition step mounts a pair of panels, waits a short
//! startup delay so the host commits their initial style, triggers the
//! flip, then waits for the host's transition-complete signal (or moves on
//! immediately without transition support) and an optional inter-step
//! delay.
//!
//! The machine never blocks or schedules anything itself. Every entry point
//! returns a [`Wake`] telling the host what to wait for before calling
//! [`PaperFold::handle`] again; [`crate::driver::Driver`] is a
//! deterministic host loop for tests and offline runs.

pub mod command;
pub mod step;

use std::fmt;

use web_time::Duration;

pub use command::{Command, Outcome, Status};
pub use step::{FinishPlan, Plan, Setup, StepPlan, StepState};

use crate::content::{
    final_faces, OverlayPlan, OverlayTargets, PanelContent, StepPanels, Style,
};
use crate::content::node::{ms, px};
use crate::geometry::{
    accumulated_offsets, centering_offset, final_dimensions, Action,
    Dimensions, OffsetSet, Translation,
};
use crate::options::FoldOptions;
use crate::surface::{Surface, Trigger};
use crate::viewport;

/// Pause between mounting a step's panels and triggering its flip, so the
/// host has committed their initial style. Independent of `speed`.
pub const STARTUP_DELAY: Duration = Duration::from_millis(30);

/// Slack past the step duration before a missing transition-complete
/// signal is given up on.
pub const TRANSITION_GRACE: Duration = Duration::from_millis(100);

/// What the host should wait for before calling
/// [`PaperFold::handle`] again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// No sequence in flight.
    Idle,
    /// Deliver [`Signal::Timer`] after this delay.
    After(Duration),
    /// Deliver [`Signal::TransitionEnd`] when the top panel's transition
    /// completes, or [`Signal::Timer`] after `backstop` if it never does
    /// (zero-length or untransformed flips fire no completion event).
    TransitionEnd {
        /// Step duration plus [`TRANSITION_GRACE`].
        backstop: Duration,
    },
    /// The signal did not apply to the current phase; keep waiting for
    /// whatever was requested before.
    Unchanged,
}

/// Events the host feeds back into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A timer requested through [`Wake::After`] or a transition backstop
    /// fired.
    Timer,
    /// A transition inside the top panel completed.
    TransitionEnd {
        /// Whether it was one of the shadow overlays rather than the
        /// panel itself. Overlay transitions never advance the sequence.
        from_overlay: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Panels mounted; waiting for the startup delay.
    Staged,
    /// Flip triggered; waiting for the transition to end.
    Transitioning,
    /// Transition done; waiting for the inter-step delay.
    Delayed,
}

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    end_folding: Option<Callback>,
    end_unfolding: Option<Callback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("end_folding", &self.end_folding.is_some())
            .field("end_unfolding", &self.end_unfolding.is_some())
            .finish()
    }
}

/// A fold/unfold instance bound to one element.
#[derive(Debug)]
pub struct PaperFold {
    options: FoldOptions,
    support: bool,
    initial: Dimensions,
    final_size: Dimensions,
    offsets: OffsetSet,
    opened: bool,
    animating: bool,
    phase: Phase,
    step: Option<StepState>,
    callbacks: Callbacks,
}

impl PaperFold {
    /// Set up `surface` for folding with `options`.
    pub fn new<S: Surface + ?Sized>(options: FoldOptions, surface: &mut S) -> Self {
        let mut fold = Self {
            options: options.sanitized(),
            support: false,
            initial: Dimensions::default(),
            final_size: Dimensions::default(),
            offsets: OffsetSet::default(),
            opened: false,
            animating: false,
            phase: Phase::Idle,
            step: None,
            callbacks: Callbacks::default(),
        };
        fold.setup(surface);
        fold
    }

    /// Call `f` every time a fold sequence completes.
    #[must_use]
    pub fn on_end_folding(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_end_folding(f);
        self
    }

    /// Call `f` every time an unfold sequence completes.
    #[must_use]
    pub fn on_end_unfolding(mut self, f: impl FnMut() + 'static) -> Self {
        self.set_on_end_unfolding(f);
        self
    }

    /// Replace the fold completion callback.
    pub fn set_on_end_folding(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.end_folding = Some(Box::new(f));
    }

    /// Replace the unfold completion callback.
    pub fn set_on_end_unfolding(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.end_unfolding = Some(Box::new(f));
    }

    /// Re-run setup with new options. The element returns to closed.
    ///
    /// Refused (returns false) while a sequence is in flight.
    pub fn reinit<S: Surface + ?Sized>(
        &mut self,
        options: FoldOptions,
        surface: &mut S,
    ) -> bool {
        if self.animating {
            log::warn!("reinit ignored: a fold sequence is running");
            return false;
        }
        self.options = options.sanitized();
        self.setup(surface);
        true
    }

    fn setup<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.support = surface.supports_transitions();
        if self.support {
            surface.style_container(
                &Style::new()
                    .with_px("perspective", f64::from(self.options.perspective))
                    .with(
                        "transition",
                        format!(
                            "all {} {}",
                            ms(self.options.container_duration_ms()),
                            self.options.container_easing.css()
                        ),
                    ),
            );
        }

        let (width, height) = surface.element_size();
        self.initial = Dimensions::sized(width, height);
        self.final_size = final_dimensions(
            &self.initial,
            &self.options.fold_direction,
            self.options.folds,
        );
        surface.install(&self.final_size);
        self.refresh_offsets(surface);

        self.opened = false;
        self.animating = false;
        self.phase = Phase::Idle;
        self.step = None;
        log::debug!(
            "pfold ready: {}x{} -> {}x{} in {} folds (transitions: {})",
            width,
            height,
            self.final_size.width,
            self.final_size.height,
            self.options.folds,
            self.support
        );
    }

    /// Active options (after sanitizing).
    #[must_use]
    pub fn options(&self) -> &FoldOptions {
        &self.options
    }

    /// `Opened` once an unfold completed, `Closed` otherwise.
    #[must_use]
    pub fn status(&self) -> Status {
        if self.opened {
            Status::Opened
        } else {
            Status::Closed
        }
    }

    /// Whether a sequence is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Closed element rect.
    #[must_use]
    pub fn initial(&self) -> &Dimensions {
        &self.initial
    }

    /// Size of the open element.
    #[must_use]
    pub fn final_size(&self) -> &Dimensions {
        &self.final_size
    }

    /// Cached viewport offsets.
    #[must_use]
    pub fn offsets(&self) -> &OffsetSet {
        &self.offsets
    }

    /// Index of the step about to run, while a sequence is in flight.
    #[must_use]
    pub fn step_index(&self) -> Option<usize> {
        self.step.map(|s| s.index)
    }

    /// Re-measure the element's distance to the viewport edges. Called at
    /// the start of every sequence and by the resize adapter; never
    /// interrupts a running sequence.
    pub fn refresh_offsets<S: Surface + ?Sized>(&mut self, surface: &S) {
        self.offsets = OffsetSet::measure(&surface.placement(), &self.initial);
    }

    /// Container translation for the next unfold.
    #[must_use]
    pub fn container_translation(&self) -> Translation {
        let dirs = &self.options.fold_direction;
        let folds = self.options.folds;
        let acc = accumulated_offsets(&self.initial, dirs, folds);
        let centering = self
            .options
            .centered
            .then(|| centering_offset(&self.initial, dirs, folds));
        viewport::solve(&acc, &self.offsets, centering)
    }

    /// Start unfolding. Returns `None` if already open or mid-sequence.
    pub fn unfold<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Wake> {
        if self.opened || self.animating {
            log::debug!(
                "unfold ignored (status {}, animating {})",
                self.status(),
                self.animating
            );
            return None;
        }
        Some(self.start(Action::Unfold, surface))
    }

    /// Start folding. Returns `None` if closed or mid-sequence.
    pub fn fold<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<Wake> {
        if !self.opened || self.animating {
            log::debug!(
                "fold ignored (status {}, animating {})",
                self.status(),
                self.animating
            );
            return None;
        }
        Some(self.start(Action::Fold, surface))
    }

    /// Run a parsed command.
    pub fn execute<S: Surface + ?Sized>(
        &mut self,
        command: Command,
        surface: &mut S,
    ) -> Outcome {
        let started = match command {
            Command::Unfold => self.unfold(surface),
            Command::Fold => self.fold(surface),
            Command::Status => return Outcome::Status(self.status()),
            Command::Destroy => {
                self.dispose(surface);
                return Outcome::Disposed;
            }
        };
        started.map_or(Outcome::Ignored, Outcome::Started)
    }

    fn start<S: Surface + ?Sized>(
        &mut self,
        action: Action,
        surface: &mut S,
    ) -> Wake {
        self.animating = true;
        self.step = Some(StepState::new(action, &self.initial, &self.options));
        log::debug!("{action} started ({} steps)", self.options.folds);
        self.enter_step(surface)
    }

    /// Abandon any sequence in flight and remove the step panels.
    ///
    /// Called when the host tears the instance down. The status stays what
    /// it was before the abandoned sequence and no completion callback runs.
    pub fn dispose<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.animating {
            log::debug!(
                "pfold disposed mid-sequence at step {:?}",
                self.step_index()
            );
        }
        self.animating = false;
        self.phase = Phase::Idle;
        self.step = None;
        surface.clear_panels();
    }

    /// Feed a host event into the machine.
    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        signal: Signal,
    ) -> Wake {
        match (self.phase, signal) {
            (Phase::Staged, Signal::Timer) => self.fire(surface),
            (
                Phase::Transitioning,
                Signal::TransitionEnd {
                    from_overlay: false,
                },
            ) => self.step_done(surface),
            (Phase::Transitioning, Signal::Timer) => {
                log::warn!(
                    "no transition end within {:?}; moving on",
                    self.backstop()
                );
                self.step_done(surface)
            }
            (Phase::Delayed, Signal::Timer) => self.enter_step(surface),
            _ => Wake::Unchanged,
        }
    }

    fn backstop(&self) -> Duration {
        self.options.step_duration() + TRANSITION_GRACE
    }

    fn overlays_enabled(&self) -> bool {
        self.options.overlays && self.support
    }

    /// Plan and stage the current step, or finish the sequence.
    fn enter_step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Wake {
        let Some(mut state) = self.step else {
            self.phase = Phase::Idle;
            return Wake::Idle;
        };
        match state.plan(&self.initial, &self.options) {
            Plan::Finish(finish) => {
                self.finish(state.action, &finish, surface);
                Wake::Idle
            }
            Plan::Transition(plan) => {
                self.stage(state.action, state.index, &plan, surface);
                state.advance(&plan, &self.options);
                self.step = Some(state);
                self.phase = Phase::Staged;
                Wake::After(STARTUP_DELAY)
            }
        }
    }

    fn stage<S: Surface + ?Sized>(
        &mut self,
        action: Action,
        index: usize,
        plan: &StepPlan,
        surface: &mut S,
    ) {
        if let Some(setup) = plan.setup {
            self.refresh_offsets(surface);
            match setup {
                Setup::ResetContainer => {
                    surface.style_container(
                        &Style::new().with_px("left", 0.0).with_px("top", 0.0),
                    );
                }
                Setup::PlaceContainer => {
                    let t = self.container_translation();
                    surface.set_active(true);
                    surface.style_container(
                        &Style::new().with("left", px(t.x)).with("top", px(t.y)),
                    );
                }
            }
            surface.hide_final();
        }

        let mut style = Style::from(&plan.style);
        if self.support {
            style.set(
                "transition",
                format!(
                    "all {} {}",
                    ms(self.options.speed as f64),
                    self.options.easing.css()
                ),
            );
        }

        let content = PanelContent {
            top_front: plan.top_front,
            faces: plan
                .final_faces
                .then(|| final_faces(plan.direction, &plan.style)),
        };
        let overlays = self.overlays_enabled().then(|| {
            OverlayPlan::new(action, self.options.speed as f64, self.options.easing)
        });
        let panels = StepPanels::build(
            action,
            plan.direction,
            &style,
            content,
            overlays.as_ref(),
        );

        log::debug!(
            "{action} step {}/{}: {} {}x{} at ({}, {})",
            index + 1,
            self.options.folds,
            plan.direction,
            plan.style.width,
            plan.style.height,
            plan.style.left,
            plan.style.top
        );
        surface.clear_panels();
        surface.mount(panels);
    }

    /// Startup delay elapsed: flip the mounted panel.
    fn fire<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Wake {
        let Some(state) = self.step else {
            self.phase = Phase::Idle;
            return Wake::Idle;
        };
        let trigger = Trigger {
            flipped: state.action == Action::Unfold,
            overlays: self
                .overlays_enabled()
                .then(|| OverlayTargets::for_action(state.action)),
        };
        surface.trigger(&trigger);

        if self.support {
            self.phase = Phase::Transitioning;
            Wake::TransitionEnd {
                backstop: self.backstop(),
            }
        } else {
            self.step_done(surface)
        }
    }

    /// The current step's flip is over; wait out the delay or go on.
    fn step_done<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Wake {
        let delay = self.options.step_delay();
        if delay.is_zero() {
            self.enter_step(surface)
        } else {
            self.phase = Phase::Delayed;
            Wake::After(delay)
        }
    }

    fn finish<S: Surface + ?Sized>(
        &mut self,
        action: Action,
        finish: &FinishPlan,
        surface: &mut S,
    ) {
        surface.clear_panels();
        surface.show_final(&Style::from(&finish.style), finish.face);

        self.opened = action == Action::Unfold;
        self.animating = false;
        self.phase = Phase::Idle;
        self.step = None;
        log::info!("{action} finished; element {}", self.status());

        match action {
            Action::Fold => {
                surface.set_active(false);
                if let Some(cb) = self.callbacks.end_folding.as_mut() {
                    cb();
                }
            }
            Action::Unfold => {
                if let Some(cb) = self.callbacks.end_unfolding.as_mut() {
                    cb();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::content::Slot;
    use crate::driver::Driver;
    use crate::geometry::{Direction, Placement};
    use crate::surface::{RecordingSurface, SurfaceOp};

    fn options(folds: usize, dirs: &[Direction]) -> FoldOptions {
        FoldOptions {
            folds,
            fold_direction: dirs.to_vec(),
            ..FoldOptions::default()
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn unfold_right_top_scenario() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let (ended, on_end) = counter();
        let mut pf = PaperFold::new(
            options(2, &[Direction::Right, Direction::Top]),
            &mut surface,
        )
        .on_end_unfolding(on_end);

        assert_eq!(*pf.final_size(), Dimensions::sized(200.0, 200.0));
        assert_eq!(
            surface.ops()[1],
            SurfaceOp::Install(Dimensions::sized(200.0, 200.0))
        );

        let wake = pf.unfold(&mut surface).unwrap();
        assert!(pf.is_animating());
        assert_eq!(wake, Wake::After(STARTUP_DELAY));

        let end = Driver::new().run(&mut pf, &mut surface, wake);
        assert_eq!(end, Wake::Idle);
        assert_eq!(pf.status(), Status::Opened);
        assert_eq!(pf.status().as_str(), "opened");
        assert!(!pf.is_animating());
        assert_eq!(ended.get(), 1);
        assert_eq!(surface.mount_count(), 2);
        assert!(surface.panels().is_none());
        let (style, face) = surface.final_face().unwrap();
        assert_eq!(*face, Slot::Final);
        assert_eq!(style.get("width"), Some("200px"));
        assert_eq!(style.get("top"), Some("-100px"));
    }

    #[test]
    fn round_trip_restores_initial_rect() {
        let mut surface = RecordingSurface::new(120.0, 80.0);
        let dirs = [Direction::Left, Direction::Bottom, Direction::Top];
        let mut pf = PaperFold::new(options(3, &dirs), &mut surface);
        let mut driver = Driver::new();

        let wake = pf.unfold(&mut surface).unwrap();
        let _ = driver.run(&mut pf, &mut surface, wake);
        assert_eq!(pf.status(), Status::Opened);
        assert!(surface.is_active());

        let wake = pf.fold(&mut surface).unwrap();
        let _ = driver.run(&mut pf, &mut surface, wake);
        assert_eq!(pf.status(), Status::Closed);
        assert!(!surface.is_active());

        let (style, face) = surface.final_face().unwrap();
        assert_eq!(*face, Slot::Initial);
        assert_eq!(*style, Style::from(pf.initial()));
        assert_eq!(surface.container().get("left"), Some("0px"));
    }

    #[test]
    fn guards_are_idempotent() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        assert!(pf.fold(&mut surface).is_none());
        assert_eq!(pf.status(), Status::Closed);
        assert!(!pf.is_animating());

        let wake = pf.unfold(&mut surface).unwrap();
        let _ = Driver::new().run(&mut pf, &mut surface, wake);
        let before = surface.ops().len();
        assert!(pf.unfold(&mut surface).is_none());
        assert_eq!(pf.status(), Status::Opened);
        assert!(!pf.is_animating());
        assert_eq!(surface.ops().len(), before);
    }

    #[test]
    fn reentrant_calls_never_start_a_second_sequence() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let (unfolded, on_unfold) = counter();
        let (folded, on_fold) = counter();
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface)
            .on_end_unfolding(on_unfold)
            .on_end_folding(on_fold);

        let wake = pf.unfold(&mut surface).unwrap();
        assert!(pf.fold(&mut surface).is_none());
        assert!(pf.unfold(&mut surface).is_none());
        assert_eq!(
            pf.execute(Command::Fold, &mut surface),
            Outcome::Ignored
        );

        let _ = Driver::new().run(&mut pf, &mut surface, wake);
        assert_eq!(unfolded.get(), 1);
        assert_eq!(folded.get(), 0);
        assert_eq!(surface.mount_count(), 2);
    }

    #[test]
    fn fallback_completes_without_transition_signals() {
        let mut surface = RecordingSurface::new(100.0, 100.0).without_transitions();
        let mut pf = PaperFold::new(
            FoldOptions {
                fold_delay: 40,
                ..options(1, &[Direction::Bottom])
            },
            &mut surface,
        );
        // No transition support: no container transition either.
        assert!(surface.container().get("transition").is_none());

        let wake = pf.unfold(&mut surface).unwrap();
        assert_eq!(wake, Wake::After(STARTUP_DELAY));
        let wake = pf.handle(&mut surface, Signal::Timer);
        assert_eq!(wake, Wake::After(Duration::from_millis(40)));
        assert_eq!(pf.handle(&mut surface, Signal::Timer), Wake::Idle);
        assert_eq!(pf.status(), Status::Opened);

        let panels = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                SurfaceOp::Mount(p) => Some(p.clone()),
                _ => None,
            })
            .unwrap();
        assert!(panels.top.style.get("transition").is_none());
        assert!(panels.bottom.find_child("uc-overlay").is_none());
    }

    #[test]
    fn fallback_without_delay_runs_in_one_pass() {
        let mut surface = RecordingSurface::new(100.0, 100.0).without_transitions();
        let mut pf = PaperFold::new(options(3, &[]), &mut surface);
        let _ = pf.unfold(&mut surface).unwrap();
        // Each timer fires one flip and stages the next step.
        for _ in 0..2 {
            assert_eq!(
                pf.handle(&mut surface, Signal::Timer),
                Wake::After(STARTUP_DELAY)
            );
        }
        assert_eq!(pf.handle(&mut surface, Signal::Timer), Wake::Idle);
        assert_eq!(pf.status(), Status::Opened);
    }

    #[test]
    fn overlay_transitions_do_not_advance() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        let _ = pf.unfold(&mut surface).unwrap();
        assert_eq!(
            pf.handle(&mut surface, Signal::Timer),
            Wake::TransitionEnd {
                backstop: Duration::from_millis(450) + TRANSITION_GRACE
            }
        );
        assert_eq!(
            pf.handle(&mut surface, Signal::TransitionEnd { from_overlay: true }),
            Wake::Unchanged
        );
        assert_eq!(pf.step_index(), Some(1));
        assert_eq!(
            pf.handle(&mut surface, Signal::TransitionEnd { from_overlay: false }),
            Wake::After(STARTUP_DELAY)
        );
        // Staged panels ignore transition ends.
        assert_eq!(
            pf.handle(&mut surface, Signal::TransitionEnd { from_overlay: false }),
            Wake::Unchanged
        );
        assert_eq!(pf.step_index(), Some(2));
    }

    #[test]
    fn backstop_timer_ends_a_silent_transition() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let (ended, on_end) = counter();
        let mut pf = PaperFold::new(
            FoldOptions {
                speed: 0,
                ..options(1, &[Direction::Left])
            },
            &mut surface,
        )
        .on_end_unfolding(on_end);
        let _ = pf.unfold(&mut surface).unwrap();
        assert_eq!(
            pf.handle(&mut surface, Signal::Timer),
            Wake::TransitionEnd {
                backstop: TRANSITION_GRACE
            }
        );
        // The flip never reports completion; the backstop fires instead.
        assert_eq!(pf.handle(&mut surface, Signal::Timer), Wake::Idle);
        assert_eq!(pf.status(), Status::Opened);
        assert!(!pf.is_animating());
        assert_eq!(ended.get(), 1);
        assert!(pf.fold(&mut surface).is_some());
    }

    #[test]
    fn dispose_abandons_the_running_sequence() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let (ended, on_end) = counter();
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface)
            .on_end_unfolding(on_end);
        let _ = pf.unfold(&mut surface).unwrap();
        assert!(surface.panels().is_some());

        assert_eq!(
            pf.execute(Command::Destroy, &mut surface),
            Outcome::Disposed
        );
        assert!(!pf.is_animating());
        assert!(surface.panels().is_none());
        assert_eq!(pf.handle(&mut surface, Signal::Timer), Wake::Unchanged);
        assert_eq!(pf.status(), Status::Closed);
        assert_eq!(ended.get(), 0);
    }

    #[test]
    fn trigger_flips_and_sets_overlay_targets() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        let _ = pf.unfold(&mut surface).unwrap();
        let top = &surface.panels().unwrap().top;
        assert!(!top.has_class("uc-unfold"));
        assert_eq!(top.style.get("transition"), Some("all 450ms linear"));

        let _ = pf.handle(&mut surface, Signal::Timer);
        assert!(surface.panels().unwrap().top.has_class("uc-unfold"));
        let trigger = surface
            .ops()
            .iter()
            .rev()
            .find_map(|op| match op {
                SurfaceOp::Trigger(t) => Some(*t),
                _ => None,
            })
            .unwrap();
        assert!(trigger.flipped);
        assert_eq!(
            trigger.overlays,
            Some(OverlayTargets::for_action(Action::Unfold))
        );
    }

    #[test]
    fn fold_trigger_unflips_and_sets_fold_overlay_targets() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        let wake = pf.unfold(&mut surface).unwrap();
        let _ = Driver::new().run(&mut pf, &mut surface, wake);

        let _ = pf.fold(&mut surface).unwrap();
        assert!(surface.panels().unwrap().top.has_class("uc-unfold"));

        let _ = pf.handle(&mut surface, Signal::Timer);
        assert!(!surface.panels().unwrap().top.has_class("uc-unfold"));
        let trigger = surface
            .ops()
            .iter()
            .rev()
            .find_map(|op| match op {
                SurfaceOp::Trigger(t) => Some(*t),
                _ => None,
            })
            .unwrap();
        assert!(!trigger.flipped);
        assert_eq!(
            trigger.overlays,
            Some(OverlayTargets::for_action(Action::Fold))
        );
    }

    #[test]
    fn unfold_translates_container_into_view() {
        let placement = Placement {
            left: 0.0,
            top: 300.0,
            viewport_width: 1000.0,
            viewport_height: 800.0,
        };
        let mut surface = RecordingSurface::new(100.0, 100.0).placed(placement);
        let mut pf = PaperFold::new(
            FoldOptions {
                centered: true,
                ..options(1, &[Direction::Left])
            },
            &mut surface,
        );
        let _ = pf.unfold(&mut surface).unwrap();
        assert!(surface.is_active());
        assert_eq!(surface.container().get("left"), Some("100px"));
        assert_eq!(surface.container().get("top"), Some("0px"));
    }

    #[test]
    fn resize_updates_offsets_without_interrupting() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        let wake = pf.unfold(&mut surface).unwrap();

        surface.set_placement(Placement {
            left: 10.0,
            top: 20.0,
            viewport_width: 500.0,
            viewport_height: 400.0,
        });
        pf.refresh_offsets(&surface);
        assert_eq!(pf.offsets().right, 390.0);
        assert!(pf.is_animating());

        let _ = Driver::new().run(&mut pf, &mut surface, wake);
        assert_eq!(pf.status(), Status::Opened);
    }

    #[test]
    fn container_gets_perspective_and_sequence_transition() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let _pf = PaperFold::new(
            FoldOptions {
                perspective: 900,
                container_speed_factor: 0.5,
                ..FoldOptions::default()
            },
            &mut surface,
        );
        assert_eq!(surface.container().get("perspective"), Some("900px"));
        assert_eq!(
            surface.container().get("transition"),
            Some("all 450ms linear")
        );
    }

    #[test]
    fn reinit_resets_and_is_refused_mid_sequence() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        let wake = pf.unfold(&mut surface).unwrap();
        assert!(!pf.reinit(options(3, &[]), &mut surface));

        let _ = Driver::new().run(&mut pf, &mut surface, wake);
        assert!(pf.reinit(options(3, &[]), &mut surface));
        assert_eq!(pf.status(), Status::Closed);
        assert_eq!(pf.final_size().height, 800.0);
    }

    #[test]
    fn execute_reports_status() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut pf = PaperFold::new(FoldOptions::default(), &mut surface);
        assert_eq!(
            pf.execute(Command::Status, &mut surface),
            Outcome::Status(Status::Closed)
        );
        assert!(matches!(
            pf.execute(Command::Unfold, &mut surface),
            Outcome::Started(Wake::After(_))
        ));
    }
}
