//! The host capability the sequencer drives.
//!
//! A [`Surface`] owns the element's subtree and the page's rendering. The
//! sequencer only ever tells it *what* to show; how styles, classes and
//! transitions are realized is up to the host. [`RecordingSurface`] is a
//! headless implementation used by tests and the demo binary; the `web`
//! feature provides a DOM implementation.

mod recording;

pub use recording::{RecordingSurface, SurfaceOp};

use crate::content::{OverlayTargets, Slot, StepPanels, Style};
use crate::geometry::{Dimensions, Placement};

/// Applied once the panels of a step have been committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// Whether the top panel carries `uc-unfold` afterwards (unfold adds
    /// it, fold removes it).
    pub flipped: bool,
    /// Overlay opacities to transition to, when overlays are attached.
    pub overlays: Option<OverlayTargets>,
}

/// Rendering operations the sequencer needs from its host.
pub trait Surface {
    /// Whether 3D transforms and CSS transitions render. Without them the
    /// sequencer steps through without waiting for transitions.
    fn supports_transitions(&self) -> bool;

    /// Size of the closed element, in px.
    fn element_size(&self) -> (f64, f64);

    /// Where the element currently sits relative to the viewport.
    fn placement(&self) -> Placement;

    /// Prepare the element: size the final content to `final_size` and move
    /// both contents into a hidden final wrapper.
    fn install(&mut self, final_size: &Dimensions);

    /// Apply inline style to the container element.
    fn style_container(&mut self, style: &Style);

    /// Mark the container as the active (opening or open) element.
    fn set_active(&mut self, active: bool);

    /// Replace the current step panels with `panels`.
    fn mount(&mut self, panels: StepPanels);

    /// Remove any step panels.
    fn clear_panels(&mut self);

    /// Hide the final wrapper and both of its faces.
    fn hide_final(&mut self);

    /// Show the final wrapper with `style`, revealing the `face` content.
    fn show_final(&mut self, style: &Style, face: Slot);

    /// Start the mounted step's transition.
    fn trigger(&mut self, trigger: &Trigger);
}
