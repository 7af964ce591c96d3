//! The public command set.
//!
//! Hosts that dispatch by name (the browser binding) parse a [`Command`]
//! and hand it to [`PaperFold::execute`](super::PaperFold::execute); anything
//! else is rejected up front.

use std::fmt;
use std::str::FromStr;

use super::Wake;
use crate::error::FoldError;

/// Whether the element is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Fully unfolded.
    Opened,
    /// Folded (including before the first unfold).
    Closed,
}

impl Status {
    /// `"opened"` or `"closed"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation callers may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the element.
    Unfold,
    /// Close the element.
    Fold,
    /// Report [`Status`].
    Status,
    /// Tear the instance down.
    Destroy,
}

/// Result of [`PaperFold::execute`](super::PaperFold::execute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A sequence started; schedule the returned wake-up.
    Started(Wake),
    /// Already in the requested state or mid-sequence; nothing happened.
    Ignored,
    /// Current status.
    Status(Status),
    /// Any sequence in flight was abandoned and the panels removed.
    Disposed,
}

impl FromStr for Command {
    type Err = FoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unfold" => Ok(Self::Unfold),
            "fold" => Ok(Self::Fold),
            "getStatus" | "get_status" | "status" => Ok(Self::Status),
            "destroy" => Ok(Self::Destroy),
            other => Err(FoldError::UnknownCommand(other.to_owned())),
        }
    }
}
