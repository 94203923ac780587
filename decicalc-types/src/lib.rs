//! The user-visible entity: a signed, normalized, base-10 floating-point
//! value with a fixed 14-digit mantissa and a biased 8-bit exponent.

use decicalc_util::MANT;

/// A signed, normalized, base-10 floating-point value.
///
/// `mant[0]` is the most significant digit. The represented value is
/// `(-1)^sign * mant[0].mant[1..] * 10^(exps - 128)`, with `mant[0]`
/// treated as the integer digit and the rest as the fractional part.
///
/// Two special forms exist and are the only admissible all-zero-mantissa
/// states:
/// - canonical zero: `sign = false`, `exps = 128`;
/// - the division-by-zero sentinel: `exps = 0`, `sign` carries the
///   would-be sign of the quotient.
///
/// `Number` is immutable once constructed: every arithmetic op consumes
/// its operands by value and returns a fresh, independently normalized
/// `Number`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Number {
    mant: [u8; MANT],
    sign: bool,
    exps: u8,
}

/// Bias applied to [`Number::exps`]; re-exported from `decicalc-util` so
/// callers don't need to depend on that crate just for this constant.
pub const EXP_BIAS: u8 = decicalc_util::EXP_BIAS;

impl Number {
    /// The sole permitted zero representation: `+0`, `exps = 128`, every
    /// digit zero.
    pub const fn canonical_zero() -> Number {
        Number {
            mant: [0; MANT],
            sign: false,
            exps: 128,
        }
    }

    /// The division-by-zero sentinel: `exps = 0`, mantissa all zero,
    /// sign carrying the would-be sign of the quotient. No other
    /// operation may produce `exps = 0`.
    pub const fn div_by_zero(sign: bool) -> Number {
        Number {
            mant: [0; MANT],
            sign,
            exps: 0,
        }
    }

    /// Builds a `Number` from already-normalized parts: a 14-digit
    /// mantissa, a sign, and a biased exponent.
    ///
    /// This is the one general-purpose constructor used by the parser,
    /// the arithmetic ops, and the test harness's oracle decoder alike.
    /// It does not itself collapse an all-zero mantissa to canonical
    /// zero — callers (parse, ops) are responsible for that per spec;
    /// in debug builds it asserts the invariant instead of silently
    /// producing a malformed value, so a caller that forgets is caught
    /// by the test suite rather than by a downstream comparison mismatch.
    pub fn from_parts(mant: [u8; MANT], sign: bool, exps: u8) -> Number {
        debug_assert!(
            exps == 0 || mant[0] != 0 || mant == [0; MANT],
            "non-canonical zero mantissa: leading digit is zero but mant is not all-zero"
        );
        debug_assert!(
            !(exps == 128 && mant == [0; MANT]) || !sign,
            "negative zero is not representable"
        );
        Number { mant, sign, exps }
    }

    /// The mantissa digits, most significant first.
    pub fn mant(&self) -> &[u8; MANT] {
        &self.mant
    }

    /// `true` if the value is negative.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// The biased exponent byte. `0` marks the division-by-zero
    /// sentinel; otherwise the unbiased exponent is `exps - 128`.
    pub fn exps(&self) -> u8 {
        self.exps
    }

    /// `true` iff every mantissa digit is zero (true for both canonical
    /// zero and the division-by-zero sentinel).
    pub fn mantissa_is_zero(&self) -> bool {
        self.mant == [0; MANT]
    }

    /// `true` iff this value is exactly canonical zero.
    pub fn is_zero(&self) -> bool {
        !self.sign && self.exps == 128 && self.mantissa_is_zero()
    }

    /// `true` iff this value is the division-by-zero sentinel.
    pub fn is_div_by_zero(&self) -> bool {
        self.exps == 0
    }

    /// Returns this value with its sign flipped. Canonical zero maps to
    /// itself (negative zero is not representable).
    pub fn negated(&self) -> Number {
        if self.is_zero() {
            *self
        } else {
            Number {
                mant: self.mant,
                sign: !self.sign,
                exps: self.exps,
            }
        }
    }
}
