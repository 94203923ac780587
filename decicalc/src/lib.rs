//! Decimal pocket-calculator arithmetic core.
//!
//! Models the arithmetic that would be microcoded into a small 1970s-era
//! calculator chip: signed, normalized, base-10 (BCD) floating-point
//! values with a fixed 14-digit mantissa and a one-byte biased exponent,
//! and the four basic operations built purely from digit-level
//! primitives (single-digit BCD add/sub with carry, single-digit BCD
//! multiply, digit shifts).
//!
//! This crate is a thin facade over the workspace's per-concern crates:
//!
//! - [`decicalc_util`] — digit primitives and the scratch register.
//! - [`decicalc_types`] — the [`Number`] value type.
//! - [`decicalc_parse`] — the 16-byte input-buffer parser.
//! - [`decicalc_ops`] — `add_sub`, `mult`, `div`.
//! - [`decicalc_fmt`] — canonical printing and oracle-comparison verdicts.
//!
//! # Example
//!
//! ```
//! use decicalc::{add_sub, canonical, parse_str};
//!
//! let one = parse_str(" 1              ");
//! let two = parse_str(" 2              ");
//! let three = add_sub(one, two, false);
//! assert_eq!(canonical(&three), "+3.0000000000000e+00");
//! ```

pub mod error;
pub mod testkit;

pub use decicalc_fmt::{canonical, compare, FmtError, Verdict};
pub use decicalc_ops::{add_sub, div, mult};
pub use decicalc_parse::{parse, parse_str};
pub use decicalc_types::{Number, EXP_BIAS};
pub use decicalc_util::{MANT, SCRATCH};
pub use error::{CalcError, Result};
