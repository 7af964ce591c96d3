//! Translucent shadow layers laid over each face while a panel flips.
//!
//! Folding darkens the static half and lets the flipping panel's shadow
//! cross from front to back; unfolding does the reverse. Each layer fades
//! over half a step; one of them waits the other half before starting.

use super::node::{ms, Node, Style};
use crate::geometry::Action;
use crate::util::easing::Easing;

/// Starting style of the three overlay layers.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlan {
    /// Over the static bottom panel.
    pub bottom: Style,
    /// Over the front face of the flipping panel.
    pub top_front: Style,
    /// Over the back face of the flipping panel.
    pub top_back: Style,
}

/// Opacities the layers transition to once the step is triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTargets {
    /// Bottom layer opacity.
    pub bottom: f64,
    /// Top back layer opacity.
    pub top_back: f64,
    /// Top front layer opacity.
    pub top_front: f64,
}

impl OverlayPlan {
    /// Starting styles for a step lasting `speed_ms`.
    #[must_use]
    pub fn new(action: Action, speed_ms: f64, easing: Easing) -> Self {
        let half = speed_ms / 2.0;
        let fade = format!("opacity {} {}", ms(half), easing.css());
        let delayed = format!("{fade} {}", ms(half));

        match action {
            Action::Fold => Self {
                bottom: Style::new().with("transition", delayed),
                top_front: Style::new()
                    .with("opacity", "0.5")
                    .with("transition", fade.clone()),
                top_back: Style::new()
                    .with("opacity", "0")
                    .with("transition", fade),
            },
            Action::Unfold => Self {
                bottom: Style::new()
                    .with("opacity", "1")
                    .with("transition", fade.clone()),
                top_front: Style::new().with("transition", fade),
                top_back: Style::new()
                    .with("opacity", "0.5")
                    .with("transition", delayed),
            },
        }
    }

    /// Layer for the bottom panel.
    #[must_use]
    pub fn bottom_node(&self) -> Node {
        Node::div().class("uc-overlay").style(self.bottom.clone())
    }

    /// Layer for the front face of the top panel.
    #[must_use]
    pub fn top_front_node(&self) -> Node {
        Node::div()
            .class("uc-flipoverlay")
            .style(self.top_front.clone())
    }

    /// Layer for the back face of the top panel.
    #[must_use]
    pub fn top_back_node(&self) -> Node {
        Node::div()
            .class("uc-flipoverlay")
            .style(self.top_back.clone())
    }
}

impl OverlayTargets {
    /// Target opacities for `action`.
    #[must_use]
    pub const fn for_action(action: Action) -> Self {
        match action {
            Action::Fold => Self {
                bottom: 1.0,
                top_back: 0.5,
                top_front: 0.0,
            },
            Action::Unfold => Self {
                bottom: 0.0,
                top_back: 0.0,
                top_front: 0.5,
            },
        }
    }
}
