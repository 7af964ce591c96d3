use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FoldError;

/// Side of the element a fold step grows toward when unfolding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Grows to the left; the panel hinges on its left edge.
    Left,
    /// Grows to the right.
    Right,
    /// Grows upward.
    Top,
    /// Grows downward. Used for any step without an explicit direction.
    #[default]
    Bottom,
}

/// Layout axis a direction doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width changes.
    Horizontal,
    /// Height changes.
    Vertical,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// The mirrored direction: left↔right, top↔bottom.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Axis whose extent this direction doubles or halves.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Whether this direction changes width.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self.axis(), Axis::Horizontal)
    }

    /// Lowercase token, as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    /// Class that selects the panel's hinge and rotation in the stylesheet.
    #[must_use]
    pub const fn unfold_class(self) -> &'static str {
        match self {
            Self::Left => "uc-unfold-left",
            Self::Right => "uc-unfold-right",
            Self::Top => "uc-unfold-top",
            Self::Bottom => "uc-unfold-bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = FoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(FoldError::InvalidDirection(other.to_owned())),
        }
    }
}

/// Direction for step `index`, falling back to [`Direction::Bottom`] past
/// the end of the configured list.
#[must_use]
pub fn direction_at(directions: &[Direction], index: usize) -> Direction {
    directions.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().axis(), dir.axis());
        }
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
    }

    #[test]
    fn tokens_round_trip_and_reject_garbage() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_str().parse::<Direction>().unwrap(), dir);
        }
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(FoldError::InvalidDirection(_))
        ));
    }

    #[test]
    fn missing_entries_default_to_bottom() {
        let dirs = [Direction::Right];
        assert_eq!(direction_at(&dirs, 0), Direction::Right);
        assert_eq!(direction_at(&dirs, 1), Direction::Bottom);
        assert_eq!(direction_at(&[], 7), Direction::Bottom);
    }
}
