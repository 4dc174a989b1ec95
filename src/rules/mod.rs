//! Pure rule functions: legal-move generation and win evaluation.
//!
//! Nothing in this module holds or mutates state; both halves are plain
//! functions of their inputs, which is what makes the engine safe to drive
//! from speculative search trees.

pub mod generator;
pub mod winner;

pub use generator::MoveContext;
