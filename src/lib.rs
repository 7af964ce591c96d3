// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Paper fold / unfold transitions for rectangular page elements.
//!
//! An element shows its initial content while closed. Unfolding doubles it
//! `folds` times, one flipping panel per step, along a configured sequence
//! of directions until the final content fills the open element; folding
//! plays the same steps backwards.
//!
//! # Key entry points
//!
//! - [`sequencer::PaperFold`] - the fold state machine and public control
//!   surface (`unfold`, `fold`, `status`)
//! - [`surface::Surface`] - what the sequencer needs from its host
//! - [`options::FoldOptions`] - per-instance configuration (TOML/JSON)
//! - [`driver::Driver`] - deterministic host loop for tests and offline runs
//!
//! # Architecture
//!
//! The sequencer never blocks or owns a clock. Each call returns a
//! [`sequencer::Wake`] naming what the host should wait for (a timer or the
//! end of the flipping panel's transition) before feeding the matching
//! [`sequencer::Signal`] back in. Per-step panels are described as
//! [`content::Node`] trees rather than markup, with [`content::Slot`]s
//! where the host's own initial or final content goes. The `web` feature
//! binds all of this to the DOM.

pub mod content;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod options;
pub mod resize;
pub mod sequencer;
pub mod surface;
pub mod util;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use error::FoldError;
pub use options::FoldOptions;
pub use sequencer::{PaperFold, Signal, Status, Wake};
