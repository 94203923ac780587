//! Crate-wide error type.
//!
//! No part of the arithmetic core (`decicalc-util`, `decicalc-types`,
//! `decicalc-parse`, `decicalc-ops`, `decicalc-fmt`) returns `Result` for
//! the conditions that are diagnostics-only: those are logged via
//! `tracing` and execution continues. `CalcError` exists for the
//! genuinely fallible paths that remain, which today live entirely in
//! the test harness.

use thiserror::Error;

/// Result type alias for harness-side fallible operations.
pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    /// The test harness failed to parse an oracle-produced reference
    /// string back into a comparable value. This can only happen if the
    /// harness's own string construction is wrong; it is a harness bug
    /// signal, not a core-API error.
    #[error("could not decode oracle string {0:?} as a number")]
    OracleDecode(String),

    /// Reserved for a future stricter parser entry point; the public
    /// `decicalc_parse::parse` takes `&[u8; 16]` and has no fallible
    /// path, so nothing in this workspace constructs this variant today.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl From<decicalc_fmt::FmtError> for CalcError {
    fn from(e: decicalc_fmt::FmtError) -> Self {
        match e {
            decicalc_fmt::FmtError::OracleDecode(s) => CalcError::OracleDecode(s),
        }
    }
}
