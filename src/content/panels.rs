//! The flipping top panel and static bottom panel of one step.

use super::faces::FinalFaces;
use super::node::{Node, Slot, Style};
use super::overlay::OverlayPlan;
use crate::geometry::{Action, Direction};

/// Class toggled on the top panel to start its flip.
pub const UNFOLD_CLASS: &str = "uc-unfold";
/// Class shared by every per-step panel.
pub const PART_CLASS: &str = "uc-part";

/// The two elements that stand in for the paper during one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepPanels {
    /// Flipping panel with a front and a back face.
    pub top: Node,
    /// Static panel under the flip.
    pub bottom: Node,
}

/// What the faces of a step show. Empty faces render blank.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelContent {
    /// Content on the front of the flipping panel.
    pub top_front: Option<Slot>,
    /// Final content for the last transition step.
    pub faces: Option<FinalFaces>,
}

impl StepPanels {
    /// Assemble the panels for one step.
    ///
    /// Folding panels start flipped (`uc-unfold` present) and flip back when
    /// triggered; unfolding panels start flat.
    #[must_use]
    pub fn build(
        action: Action,
        direction: Direction,
        style: &Style,
        content: PanelContent,
        overlays: Option<&OverlayPlan>,
    ) -> Self {
        let (bottom_face, back_face) = match content.faces {
            Some(faces) => (Some(faces.bottom), Some(faces.top_back)),
            None => (None, None),
        };

        let mut front = Node::div().class("uc-front");
        if let Some(slot) = content.top_front {
            front = front.slot(slot);
        }
        let front = front.maybe_child(overlays.map(OverlayPlan::top_front_node));
        let back = Node::div()
            .class("uc-back")
            .maybe_child(back_face)
            .maybe_child(overlays.map(OverlayPlan::top_back_node));

        let mut top = Node::div();
        if action == Action::Fold {
            top = top.class(UNFOLD_CLASS);
        }
        let top = top
            .class(PART_CLASS)
            .class(direction.unfold_class())
            .style(style.clone())
            .child(front)
            .child(back);

        let bottom = Node::div()
            .class(PART_CLASS)
            .class("uc-single")
            .style(style.clone())
            .maybe_child(bottom_face)
            .maybe_child(overlays.map(OverlayPlan::bottom_node));

        Self { top, bottom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::faces::final_faces;
    use crate::geometry::Dimensions;
    use crate::util::easing::Easing;

    #[test]
    fn unfold_panels_start_flat() {
        let panels = StepPanels::build(
            Action::Unfold,
            Direction::Right,
            &Style::new(),
            PanelContent {
                top_front: Some(Slot::Initial),
                faces: None,
            },
            None,
        );
        assert!(!panels.top.has_class(UNFOLD_CLASS));
        assert!(panels.top.has_class("uc-unfold-right"));
        assert!(panels.bottom.has_class("uc-single"));
        let front = panels.top.find_child("uc-front").unwrap();
        assert_eq!(front.slots(), vec![Slot::Initial]);
        assert!(panels.bottom.children.is_empty());
    }

    #[test]
    fn fold_panels_start_flipped() {
        let panels = StepPanels::build(
            Action::Fold,
            Direction::Top,
            &Style::new(),
            PanelContent::default(),
            None,
        );
        assert_eq!(panels.top.classes[0], UNFOLD_CLASS);
    }

    #[test]
    fn final_faces_and_overlays_land_on_the_right_panels() {
        let dims = Dimensions::sized(100.0, 100.0);
        let plan = OverlayPlan::new(Action::Unfold, 450.0, Easing::Linear);
        let panels = StepPanels::build(
            Action::Unfold,
            Direction::Bottom,
            &Style::from(&dims),
            PanelContent {
                top_front: None,
                faces: Some(final_faces(Direction::Bottom, &dims)),
            },
            Some(&plan),
        );
        let back = panels.top.find_child("uc-back").unwrap();
        assert!(back.find_child("uc-inner-rotate").is_some());
        assert!(back.find_child("uc-flipoverlay").is_some());
        assert!(panels.bottom.find_child("uc-overlay").is_some());
        assert_eq!(panels.bottom.slots(), vec![Slot::Final]);
        assert_eq!(panels.top.style.get("width"), Some("100px"));
    }
}
