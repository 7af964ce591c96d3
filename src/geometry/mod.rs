//! Fold geometry: pure functions over rects and direction sequences.
//!
//! Everything here is independent of the host. The sequencer asks these
//! functions for the size of the open element, how far it grows toward each
//! viewport edge, and how each step's panel is sized and positioned.

mod dimensions;
mod direction;
mod fold;

pub use dimensions::{
    AccumulatedOffsets, Dimensions, OffsetSet, Placement, Translation,
};
pub use direction::{direction_at, Axis, Direction};
pub use fold::{
    accumulated_offsets, centering_offset, final_dimensions, fold_sequence,
    step_style, unfold_style_at, Action,
};
