use super::{Surface, Trigger};
use crate::content::panels::UNFOLD_CLASS;
use crate::content::{Slot, StepPanels, Style};
use crate::geometry::{Dimensions, Placement};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// [`Surface::install`].
    Install(Dimensions),
    /// [`Surface::style_container`].
    StyleContainer(Style),
    /// [`Surface::set_active`].
    SetActive(bool),
    /// [`Surface::mount`].
    Mount(StepPanels),
    /// [`Surface::clear_panels`].
    ClearPanels,
    /// [`Surface::hide_final`].
    HideFinal,
    /// [`Surface::show_final`].
    ShowFinal(Style, Slot),
    /// [`Surface::trigger`].
    Trigger(Trigger),
}

/// Headless surface that records every operation and keeps the resulting
/// state, for tests and offline simulation.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transitions: bool,
    size: (f64, f64),
    placement: Placement,
    ops: Vec<SurfaceOp>,
    container: Style,
    active: bool,
    panels: Option<StepPanels>,
    final_face: Option<(Style, Slot)>,
}

impl RecordingSurface {
    /// Element of `width`×`height` centered in a 1280×800 viewport, with
    /// transition support.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let placement = Placement {
            left: (1280.0 - width) / 2.0,
            top: (800.0 - height) / 2.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
        };
        Self {
            transitions: true,
            size: (width, height),
            placement,
            ops: Vec::new(),
            container: Style::new(),
            active: false,
            panels: None,
            final_face: None,
        }
    }

    /// Report no transition support.
    #[must_use]
    pub fn without_transitions(mut self) -> Self {
        self.transitions = false;
        self
    }

    /// Place the element elsewhere.
    #[must_use]
    pub fn placed(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Move the element, as a scroll or window resize would.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Every operation so far, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget recorded operations, keeping the current state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Accumulated container style.
    #[must_use]
    pub fn container(&self) -> &Style {
        &self.container
    }

    /// Whether the container is marked active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Currently mounted step panels.
    #[must_use]
    pub fn panels(&self) -> Option<&StepPanels> {
        self.panels.as_ref()
    }

    /// Style and face of the visible final wrapper, if shown.
    #[must_use]
    pub fn final_face(&self) -> Option<&(Style, Slot)> {
        self.final_face.as_ref()
    }

    /// Number of mounted steps so far.
    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Mount(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn supports_transitions(&self) -> bool {
        self.transitions
    }

    fn element_size(&self) -> (f64, f64) {
        self.size
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn install(&mut self, final_size: &Dimensions) {
        self.final_face = None;
        self.ops.push(SurfaceOp::Install(*final_size));
    }

    fn style_container(&mut self, style: &Style) {
        for (property, value) in style.iter() {
            self.container.set(property, value);
        }
        self.ops.push(SurfaceOp::StyleContainer(style.clone()));
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.ops.push(SurfaceOp::SetActive(active));
    }

    fn mount(&mut self, panels: StepPanels) {
        self.panels = Some(panels.clone());
        self.ops.push(SurfaceOp::Mount(panels));
    }

    fn clear_panels(&mut self) {
        self.panels = None;
        self.ops.push(SurfaceOp::ClearPanels);
    }

    fn hide_final(&mut self) {
        self.final_face = None;
        self.ops.push(SurfaceOp::HideFinal);
    }

    fn show_final(&mut self, style: &Style, face: Slot) {
        self.final_face = Some((style.clone(), face));
        self.ops.push(SurfaceOp::ShowFinal(style.clone(), face));
    }

    fn trigger(&mut self, trigger: &Trigger) {
        if let Some(panels) = self.panels.as_mut() {
            let top = &mut panels.top;
            top.classes.retain(|c| *c != UNFOLD_CLASS);
            if trigger.flipped {
                top.classes.insert(0, UNFOLD_CLASS);
            }
        }
        self.ops.push(SurfaceOp::Trigger(*trigger));
    }
}
