//! # Snapshot Testing Support
//!
//! Utilities for testing the inline resolver via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a paragraph's accepted pairs as a stable, line-per-pair
//!   outline for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for resolver correctness (spans in bounds and on
//!   mark characters, pairs ordered and non-crossing, code spans opaque)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
