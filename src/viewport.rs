//! Container translation that keeps the unfolded element on screen.
//!
//! The open element grows by [`AccumulatedOffsets`] toward each side. If that
//! pushes it past a viewport edge the container is shifted back by the
//! overflow. With centering enabled the container additionally moves toward
//! the position that keeps the open element centered on the closed one, but
//! never so far that the opposite edge overflows.

use crate::geometry::{AccumulatedOffsets, OffsetSet, Translation};

/// Gaps between the *open* element and each viewport edge. Negative values
/// mean the element overflows that edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct FinalOffsets {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl FinalOffsets {
    fn new(offsets: &OffsetSet, acc: &AccumulatedOffsets) -> Self {
        Self {
            left: offsets.left - acc.left,
            top: offsets.top - acc.top,
            right: offsets.right - acc.right,
            bottom: offsets.bottom - acc.bottom,
        }
    }
}

/// Shift along one axis that undoes overflow on either edge.
fn clamp_into_view(near: f64, far: f64) -> f64 {
    let mut shift = 0.0;
    if near < 0.0 {
        shift = near.abs();
    }
    if far < 0.0 {
        shift -= far.abs();
    }
    shift
}

/// Bias one axis toward `center`, keeping `near`/`far` edges in view.
///
/// A positive `center` moves toward the far edge, so it is capped by the
/// far gap; a negative one is capped by the near gap. When the edge the
/// shift moves away from is already overflowing, the plain clamp wins.
fn center_axis(center: f64, clamped: f64, near: f64, far: f64) -> f64 {
    if center > 0.0 && far + center >= 0.0 {
        if near >= 0.0 {
            center.min(far)
        } else {
            clamped
        }
    } else if center < 0.0 && near + center >= 0.0 {
        if far >= 0.0 {
            center.min(near)
        } else {
            clamped
        }
    } else {
        clamped
    }
}

/// Compute the container translation for an unfold.
///
/// `centering` is the geometric centering target
/// ([`centering_offset`](crate::geometry::centering_offset)) when centering
/// is enabled, `None` otherwise.
#[must_use]
pub fn solve(
    acc: &AccumulatedOffsets,
    offsets: &OffsetSet,
    centering: Option<Translation>,
) -> Translation {
    let fin = FinalOffsets::new(offsets, acc);
    let tx = clamp_into_view(fin.left, fin.right);
    let ty = clamp_into_view(fin.top, fin.bottom);

    match centering {
        None => Translation { x: tx, y: ty },
        Some(center) => Translation {
            x: center_axis(center.x, tx, fin.left, fin.right),
            y: center_axis(center.y, ty, fin.top, fin.bottom),
        },
    }
}
