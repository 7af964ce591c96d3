//! Step content: structured nodes for the per-step panels.
//!
//! Each step replaces the element's content with a flipping `top` panel and
//! a static `bottom` panel. The last transition step additionally puts the
//! final content on the faces ([`faces`]); optional shadow layers come from
//! [`overlay`].

pub mod faces;
pub mod node;
pub mod overlay;
pub mod panels;

pub use faces::{final_faces, FinalFaces};
pub use node::{Child, Node, Slot, Style};
pub use overlay::{OverlayPlan, OverlayTargets};
pub use panels::{PanelContent, StepPanels};
