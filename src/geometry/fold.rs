use std::fmt;

use super::dimensions::{AccumulatedOffsets, Dimensions, Translation};
use super::direction::{direction_at, Axis, Direction};

/// The two symmetric transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Closed → opened; the element doubles once per step.
    Unfold,
    /// Opened → closed; the element halves once per step.
    Fold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unfold => "unfold",
            Self::Fold => "fold",
        })
    }
}

/// The `folds` directions in unfolding order, padding with `bottom`.
pub fn fold_sequence(
    directions: &[Direction],
    folds: usize,
) -> impl Iterator<Item = Direction> + '_ {
    (0..folds).map(move |i| direction_at(directions, i))
}

/// Walks the fold sequence, yielding each direction with the extent the
/// paper has along that axis before the step (initial × 2^prior).
fn extents<'a>(
    initial: &Dimensions,
    directions: &'a [Direction],
    folds: usize,
) -> impl Iterator<Item = (Direction, f64)> + 'a {
    let (width, height) = (initial.width, initial.height);
    let mut horizontal = 0;
    let mut vertical = 0;
    fold_sequence(directions, folds).map(move |dir| {
        let extent = match dir.axis() {
            Axis::Horizontal => {
                horizontal += 1;
                width * 2f64.powi(horizontal - 1)
            }
            Axis::Vertical => {
                vertical += 1;
                height * 2f64.powi(vertical - 1)
            }
        };
        (dir, extent)
    })
}

/// Size of the fully open element.
///
/// Width doubles once per horizontal step and height once per vertical
/// step, so the order of the directions does not matter.
#[must_use]
pub fn final_dimensions(
    initial: &Dimensions,
    directions: &[Direction],
    folds: usize,
) -> Dimensions {
    let (horizontal, vertical) = fold_sequence(directions, folds).fold(
        (0, 0),
        |(h, v), dir| match dir.axis() {
            Axis::Horizontal => (h + 1, v),
            Axis::Vertical => (h, v + 1),
        },
    );
    Dimensions::sized(
        initial.width * 2f64.powi(horizontal),
        initial.height * 2f64.powi(vertical),
    )
}

/// Growth toward each side once the element is fully open.
#[must_use]
pub fn accumulated_offsets(
    initial: &Dimensions,
    directions: &[Direction],
    folds: usize,
) -> AccumulatedOffsets {
    let mut acc = AccumulatedOffsets::default();
    for (dir, extent) in extents(initial, directions, folds) {
        match dir {
            Direction::Left => acc.left += extent,
            Direction::Right => acc.right += extent,
            Direction::Top => acc.top += extent,
            Direction::Bottom => acc.bottom += extent,
        }
    }
    acc
}

/// Translation that keeps the open element centered on the closed one.
///
/// Every step shifts the center by half of its growth: leftward and upward
/// growth pull positive, rightward and downward growth negative.
#[must_use]
pub fn centering_offset(
    initial: &Dimensions,
    directions: &[Direction],
    folds: usize,
) -> Translation {
    let mut t = Translation::default();
    for (dir, extent) in extents(initial, directions, folds) {
        let half = extent / 2.0;
        match dir {
            Direction::Left => t.x += half,
            Direction::Right => t.x -= half,
            Direction::Top => t.y += half,
            Direction::Bottom => t.y -= half,
        }
    }
    t
}

/// Style of the next step, derived from the previous one.
///
/// Folding halves the extent along `last_direction`'s axis; the rect keeps
/// its far edge, so a left or top fold moves its origin by the removed half.
/// Unfolding is the inverse.
#[must_use]
pub fn step_style(
    action: Action,
    last_direction: Direction,
    last: &Dimensions,
) -> Dimensions {
    let horizontal = last_direction.is_horizontal();
    match action {
        Action::Fold => Dimensions {
            width: if horizontal { last.width / 2.0 } else { last.width },
            height: if horizontal { last.height } else { last.height / 2.0 },
            left: if last_direction == Direction::Left {
                last.left + last.width / 2.0
            } else {
                last.left
            },
            top: if last_direction == Direction::Top {
                last.top + last.height / 2.0
            } else {
                last.top
            },
        },
        Action::Unfold => Dimensions {
            width: if horizontal { last.width * 2.0 } else { last.width },
            height: if horizontal { last.height } else { last.height * 2.0 },
            left: if last_direction == Direction::Left {
                last.left - last.width
            } else {
                last.left
            },
            top: if last_direction == Direction::Top {
                last.top - last.height
            } else {
                last.top
            },
        },
    }
}

/// Style of unfold step `step` (the initial rect doubled along the first
/// `step` directions).
#[must_use]
pub fn unfold_style_at(
    initial: &Dimensions,
    directions: &[Direction],
    step: usize,
) -> Dimensions {
    (0..step).fold(*initial, |style, i| {
        step_style(Action::Unfold, direction_at(directions, i), &style)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: Dimensions = Dimensions::sized(100.0, 100.0);

    #[test]
    fn final_dimensions_right_top() {
        let dims = final_dimensions(
            &SQUARE,
            &[Direction::Right, Direction::Top],
            2,
        );
        assert_eq!(dims.width, 200.0);
        assert_eq!(dims.height, 200.0);
    }

    #[test]
    fn final_dimensions_ignore_order() {
        let initial = Dimensions::sized(120.0, 80.0);
        let a = [
            Direction::Left,
            Direction::Top,
            Direction::Left,
            Direction::Bottom,
        ];
        let b = [
            Direction::Bottom,
            Direction::Right,
            Direction::Top,
            Direction::Right,
        ];
        assert_eq!(
            final_dimensions(&initial, &a, 4),
            final_dimensions(&initial, &b, 4)
        );
        assert_eq!(final_dimensions(&initial, &a, 4).width, 480.0);
        assert_eq!(final_dimensions(&initial, &a, 4).height, 320.0);
    }

    #[test]
    fn missing_directions_unfold_downward() {
        let dims = final_dimensions(&SQUARE, &[], 3);
        assert_eq!(dims.width, 100.0);
        assert_eq!(dims.height, 800.0);
        let acc = accumulated_offsets(&SQUARE, &[], 3);
        assert_eq!(acc.bottom, 700.0);
    }

    #[test]
    fn accumulated_offsets_double_per_axis() {
        let acc = accumulated_offsets(
            &SQUARE,
            &[
                Direction::Right,
                Direction::Top,
                Direction::Left,
                Direction::Top,
            ],
            4,
        );
        assert_eq!(acc.right, 100.0);
        assert_eq!(acc.left, 200.0);
        assert_eq!(acc.top, 300.0);
        assert_eq!(acc.bottom, 0.0);
    }

    #[test]
    fn accumulated_growth_matches_final_size() {
        let orders: [&[Direction]; 3] = [
            &[Direction::Left, Direction::Right, Direction::Top],
            &[Direction::Bottom, Direction::Left, Direction::Left],
            &[Direction::Top, Direction::Bottom, Direction::Right],
        ];
        let initial = Dimensions::sized(60.0, 40.0);
        for dirs in orders {
            let acc = accumulated_offsets(&initial, dirs, dirs.len());
            let fin = final_dimensions(&initial, dirs, dirs.len());
            assert_eq!(initial.width + acc.left + acc.right, fin.width);
            assert_eq!(initial.height + acc.top + acc.bottom, fin.height);
        }
    }

    #[test]
    fn centering_offset_signs() {
        let t = centering_offset(
            &SQUARE,
            &[Direction::Left, Direction::Bottom, Direction::Right],
            3,
        );
        // left: +50, right (second horizontal): -100
        assert_eq!(t.x, -50.0);
        assert_eq!(t.y, -50.0);
    }

    #[test]
    fn step_style_fold_keeps_far_edge() {
        let wide = Dimensions {
            width: 200.0,
            height: 100.0,
            left: -100.0,
            top: 0.0,
        };
        let folded = step_style(Action::Fold, Direction::Left, &wide);
        assert_eq!(folded, Dimensions::sized(100.0, 100.0));

        let folded = step_style(Action::Fold, Direction::Right, &wide);
        assert_eq!(folded.width, 100.0);
        assert_eq!(folded.left, -100.0);

        let tall = Dimensions::sized(100.0, 200.0);
        let folded = step_style(Action::Fold, Direction::Top, &tall);
        assert_eq!(folded.height, 100.0);
        assert_eq!(folded.top, 100.0);
    }

    #[test]
    fn step_style_unfold_inverts_fold() {
        let start = Dimensions {
            width: 80.0,
            height: 60.0,
            left: 10.0,
            top: -20.0,
        };
        for dir in Direction::ALL {
            let open = step_style(Action::Unfold, dir, &start);
            assert_eq!(step_style(Action::Fold, dir, &open), start);
        }
        let open = step_style(Action::Unfold, Direction::Left, &start);
        assert_eq!(open.left, -70.0);
        assert_eq!(open.width, 160.0);
    }

    #[test]
    fn unfold_style_at_walks_the_sequence() {
        let dirs = [Direction::Right, Direction::Top];
        assert_eq!(unfold_style_at(&SQUARE, &dirs, 0), SQUARE);
        let first = unfold_style_at(&SQUARE, &dirs, 1);
        assert_eq!(first, Dimensions::sized(200.0, 100.0));
        let second = unfold_style_at(&SQUARE, &dirs, 2);
        assert_eq!(second.height, 200.0);
        assert_eq!(second.top, -100.0);
    }
}
