//! Converts a fixed-format 16-character input buffer into a normalized
//! [`Number`].
//!
//! Layout (index 0 is the leftmost character):
//!
//! ```text
//! pos:  0   1 .. up to 12 or 15                   12  13   14 15
//!       S   mantissa characters (digits, one '.')  E   ±   D  D
//! ```
//!
//! The parser's contract places the burden of well-formedness on the
//! caller (spec §4.3): it never panics, but its output for malformed
//! input beyond the documented edge cases is unspecified.

use decicalc_types::Number;
use decicalc_util::MANT;

/// Parses a 16-byte input buffer into a normalized [`Number`].
///
/// `input[0]` is `b' '` for positive or `b'-'` for negative. If
/// `input[12] == b'E'`, an explicit two-digit exponent follows at
/// `input[13..16]` (`input[13]` is `b'+'`/`b'-'`); otherwise the
/// mantissa occupies the whole remaining field and the exponent starts
/// biased at zero (`128`).
pub fn parse(input: &[u8; 16]) -> Number {
    let negative = input[0] == b'-';

    let (field, mut exps): (&[u8], i32) = if input[12] == b'E' {
        let exp_sign_negative = input[13] == b'-';
        let exp_val = two_digit_value(input[13 + 1], input[13 + 2]);
        let exps = if exp_sign_negative {
            128 - exp_val
        } else {
            128 + exp_val
        };
        (&input[1..12], exps)
    } else {
        (&input[1..16], 128)
    };

    let (mant, adj, copied) = normalize_field(field);

    if copied {
        exps += adj;
    }
    let mantissa_is_zero = mant == [0u8; MANT];
    if mantissa_is_zero {
        exps = 128;
    }
    if mantissa_is_zero && negative {
        tracing::trace!("negative zero folded to canonical zero during parse");
    }

    let sign = !mantissa_is_zero && negative;
    Number::from_parts(mant, sign, wrap_u8(exps))
}

/// Convenience entry point for tests and call sites that already hold an
/// ASCII `&str` of exactly 16 bytes.
pub fn parse_str(input: &str) -> Number {
    debug_assert_eq!(input.len(), 16, "input buffer must be exactly 16 bytes");
    let mut buf = [b' '; 16];
    let bytes = input.as_bytes();
    let n = bytes.len().min(16);
    buf[..n].copy_from_slice(&bytes[..n]);
    parse(&buf)
}

fn two_digit_value(tens: u8, units: u8) -> i32 {
    (tens.wrapping_sub(b'0')) as i32 * 10 + (units.wrapping_sub(b'0')) as i32
}

fn wrap_u8(x: i32) -> u8 {
    x.rem_euclid(256) as u8
}

/// Runs spec §4.3's normalization steps 1-5 over the mantissa field.
///
/// Returns the normalized 14-digit mantissa, the exponent adjustment
/// `adj`, and whether any digit was copied (step 6 only applies `adj`
/// when something was).
fn normalize_field(field: &[u8]) -> ([u8; MANT], i32, bool) {
    let len = field.len();

    // Step 1: skip leading '0' digits. This cursor permanently discards
    // everything before it from the eventual copy.
    let mut cursor = 0usize;
    while cursor < len && field[cursor] == b'0' {
        cursor += 1;
    }

    let mut adj: i32 = -1;
    if cursor < len && field[cursor] == b'.' {
        // Step 3: the integer part was entirely zero. Skip the point,
        // then skip (and discard from the copy) each leading fractional
        // zero, one decrement of `adj` per zero.
        cursor += 1;
        while cursor < len && field[cursor] == b'0' {
            adj -= 1;
            cursor += 1;
        }
    } else {
        // Step 4: count the significant leading integer digits without
        // disturbing `cursor` — they are copied, not skipped.
        let mut peek = cursor;
        while peek < len && field[peek].is_ascii_digit() {
            adj += 1;
            peek += 1;
        }
    }

    // Step 5: copy remaining digits (skipping one '.' if present) from
    // `cursor` onward, up to MANT digits.
    let mut mant = [0u8; MANT];
    let mut n = 0usize;
    let mut i = cursor;
    let mut dot_skipped = false;
    while i < len && n < MANT {
        let c = field[i];
        if c == b'.' && !dot_skipped {
            dot_skipped = true;
        } else if c.is_ascii_digit() {
            mant[n] = c - b'0';
            n += 1;
        }
        i += 1;
    }

    (mant, adj, n > 0)
}
