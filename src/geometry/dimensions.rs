/// A rectangle in px: size plus position relative to the container.
///
/// Each fold step gets its own copy; steps never share one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// Width in px.
    pub width: f64,
    /// Height in px.
    pub height: f64,
    /// Left edge relative to the container.
    pub left: f64,
    /// Top edge relative to the container.
    pub top: f64,
}

impl Dimensions {
    /// A rect of the given size anchored at the container origin.
    #[must_use]
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 0.0,
            top: 0.0,
        }
    }

    /// Component-wise linear interpolation toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
            left: mix(self.left, other.left),
            top: mix(self.top, other.top),
        }
    }
}

/// Where the element sits relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    /// Element left edge minus horizontal scroll.
    pub left: f64,
    /// Element top edge minus vertical scroll.
    pub top: f64,
    /// Viewport width.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
}

/// Distance from the closed element to each viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetSet {
    /// Gap to the left viewport edge.
    pub left: f64,
    /// Gap to the top viewport edge.
    pub top: f64,
    /// Gap to the right viewport edge.
    pub right: f64,
    /// Gap to the bottom viewport edge.
    pub bottom: f64,
}

impl OffsetSet {
    /// Offsets of an element of size `initial` placed at `placement`.
    #[must_use]
    pub fn measure(placement: &Placement, initial: &Dimensions) -> Self {
        Self {
            left: placement.left,
            top: placement.top,
            right: placement.viewport_width - placement.left - initial.width,
            bottom: placement.viewport_height
                - placement.top
                - initial.height,
        }
    }
}

/// Total growth of the element toward each side once fully open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulatedOffsets {
    /// Growth to the left.
    pub left: f64,
    /// Growth to the right.
    pub right: f64,
    /// Growth upward.
    pub top: f64,
    /// Growth downward.
    pub bottom: f64,
}

/// Container translation in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    /// Horizontal shift; positive moves right.
    pub x: f64,
    /// Vertical shift; positive moves down.
    pub y: f64,
}
