//! Provide pure text canonicalization for comparing program output against golden files.
//!
//! This crate is intentionally small and dependency-free. Both the runner and the fuzz target use it, so the
//! canonical form of a piece of output is defined in exactly one place.
//!
//! ## Notes
//!
//! - **No IO**, no global state: every helper is a deterministic function of its input.
//! - Current scope: output normalization (`normalize`) and line-level difference location (`diff`).

pub mod diff;
pub mod normalize;

pub use diff::{first_difference, line_diff};
pub use normalize::{is_space, normalize};
