//! Crate-level error types.

use std::fmt;

/// Errors produced by the paperfold crate.
///
/// Fold and unfold themselves never fail; these cover configuration I/O,
/// command parsing and the browser binding.
#[derive(Debug)]
pub enum FoldError {
    /// Generic I/O failure while reading or writing options.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// A direction token other than left/right/top/bottom.
    InvalidDirection(String),
    /// An easing curve name that is not a supported CSS keyword.
    InvalidEasing(String),
    /// A method name that is not part of the public command set.
    UnknownCommand(String),
    /// A command issued to an element that was never initialized.
    NotInitialized(String),
    /// The host document rejected a DOM operation.
    Dom(String),
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidDirection(token) => {
                write!(f, "invalid fold direction '{token}'")
            }
            Self::InvalidEasing(token) => {
                write!(f, "invalid easing curve '{token}'")
            }
            Self::UnknownCommand(name) => {
                write!(f, "no such method '{name}' for pfold instance")
            }
            Self::NotInitialized(name) => write!(
                f,
                "cannot call methods on pfold prior to initialization; \
                 attempted to call method '{name}'"
            ),
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for FoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FoldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
