//! Final-content faces shown on the last transition step.

use super::node::{px, Node, Slot, Style};
use crate::geometry::{Dimensions, Direction};

/// Content of the last transition step: the final content laid out at full
/// open size behind each face, masked so only that face's half shows.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalFaces {
    /// Goes into the static bottom panel.
    pub bottom: Node,
    /// Goes onto the back of the flipping top panel.
    pub top_back: Node,
}

/// Build the final faces for a step of size `style` hinged in `direction`.
///
/// Vertical hinges offset the content with a negative top margin. Horizontal
/// ones double the content width and pull it left where needed. The back face
/// is seen through the flipped panel, so vertical flips render it rotated.
#[must_use]
pub fn final_faces(direction: Direction, style: &Dimensions) -> FinalFaces {
    let neg_height = px(-style.height);
    let double_width = px(style.width * 2.0);
    let neg_width = px(-style.width);

    let (bottom_style, back_style) = match direction {
        Direction::Bottom => {
            (Style::new(), Style::new().with("margin-top", neg_height))
        }
        Direction::Top => {
            (Style::new().with("margin-top", neg_height), Style::new())
        }
        Direction::Left => (
            Style::new()
                .with("width", double_width.clone())
                .with("margin-left", neg_width),
            Style::new().with("width", double_width),
        ),
        Direction::Right => (
            Style::new().with("width", double_width.clone()),
            Style::new()
                .with("width", double_width)
                .with("margin-left", neg_width),
        ),
    };

    let mut back = Node::div().class("uc-inner");
    if !direction.is_horizontal() {
        back = back.class("uc-inner-rotate");
    }

    FinalFaces {
        bottom: inner(Node::div().class("uc-inner"), bottom_style),
        top_back: inner(back, back_style),
    }
}

fn inner(wrapper: Node, style: Style) -> Node {
    wrapper.child(
        Node::div()
            .class("uc-inner-content")
            .style(style)
            .slot(Slot::Final),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Dimensions = Dimensions::sized(100.0, 50.0);

    fn content_style(face: &Node) -> &Style {
        &face
            .find_child("uc-inner-content")
            .unwrap()
            .style
    }

    #[test]
    fn bottom_direction_shifts_the_back_face_up() {
        let faces = final_faces(Direction::Bottom, &HALF);
        assert!(content_style(&faces.bottom).is_empty());
        assert_eq!(
            content_style(&faces.top_back).get("margin-top"),
            Some("-50px")
        );
        assert!(faces.top_back.has_class("uc-inner-rotate"));
        assert!(!faces.bottom.has_class("uc-inner-rotate"));
    }

    #[test]
    fn top_direction_shifts_the_bottom_face_up() {
        let faces = final_faces(Direction::Top, &HALF);
        assert_eq!(
            content_style(&faces.bottom).get("margin-top"),
            Some("-50px")
        );
        assert!(content_style(&faces.top_back).is_empty());
        assert!(faces.top_back.has_class("uc-inner-rotate"));
    }

    #[test]
    fn horizontal_directions_double_width_without_rotation() {
        let left = final_faces(Direction::Left, &HALF);
        assert_eq!(content_style(&left.top_back).get("width"), Some("200px"));
        assert_eq!(
            content_style(&left.bottom).get("margin-left"),
            Some("-100px")
        );
        assert!(!left.top_back.has_class("uc-inner-rotate"));

        let right = final_faces(Direction::Right, &HALF);
        assert_eq!(content_style(&right.top_back).get("width"), Some("200px"));
        assert_eq!(
            content_style(&right.top_back).get("margin-left"),
            Some("-100px")
        );
        assert_eq!(content_style(&right.bottom).get("width"), Some("200px"));
        assert_eq!(content_style(&right.bottom).get("margin-left"), None);
    }

    #[test]
    fn both_faces_carry_final_content() {
        for dir in Direction::ALL {
            let faces = final_faces(dir, &HALF);
            assert_eq!(faces.bottom.slots(), vec![Slot::Final]);
            assert_eq!(faces.top_back.slots(), vec![Slot::Final]);
        }
    }
}
