//! Shared low-level primitives for `decicalc`'s arithmetic core.
//!
//! Everything in this crate operates on bare digits (`0..=9`) or on the
//! fixed-width [`Scratch`] register. Nothing here knows about signs,
//! exponents, or the `Number` value type — that belongs to
//! `decicalc-types` and `decicalc-ops`, which build on top of this crate
//! the way a datapath is built on top of an ALU.

pub mod constants;
pub mod digit;
pub mod scratch;

pub use constants::{EXP_BIAS, MANT, SCRATCH};
pub use scratch::Scratch;
