//! Shared utilities.
//!
//! Easing curves used by step and container transitions.

pub mod easing;
