//! Division (spec §4.6).

use decicalc_types::Number;
use decicalc_util::digit::{bcd_sbc, exp_sub};
use decicalc_util::{Scratch, MANT, SCRATCH};

/// Divides `x` by `y`.
///
/// Returns the division-by-zero sentinel (`exps = 0`) if `y`'s mantissa
/// is zero; this is the one arithmetic op in this workspace whose
/// result carries a distinguished marker rather than a plain value.
pub fn div(x: Number, y: Number) -> Number {
    if y.mantissa_is_zero() {
        let sign = x.sign() != y.sign();
        tracing::debug!(sign, "division by zero: emitting sentinel");
        return Number::div_by_zero(sign);
    }
    if x.mantissa_is_zero() {
        return Number::canonical_zero();
    }

    let sign = x.sign() != y.sign();
    let mut exps = exp_sub(x.exps(), y.exps());

    let mut d = Scratch::from_mantissa(x.mant());
    let mut v = Scratch::from_mantissa(y.mant());
    // Free the MSB position as working headroom before the quotient loop.
    d.shr();
    v.shr();

    let mut q = Scratch::from_mantissa(&[0u8; MANT]);
    for i in 0..SCRATCH {
        while d.ge(&v) {
            d = sub_full(&d, &v);
            let digit = q.get(i) + 1;
            if digit > 9 {
                // Mathematically unreachable: the pre-shift (`d.shr()`/`v.shr()`)
                // guarantees at most 9 subtractions per position. Diagnostics-only
                // per spec §7; fall through and let the digit store as-is.
                tracing::warn!(digit, position = i, "quotient digit exceeded 9");
            }
            q.set(i, digit);
        }
        d.shl();
    }

    if q.get(0) == 0 {
        q.shl();
        exps = exps.wrapping_sub(1);
    }

    Number::from_parts(q.leading_mantissa(), sign, exps)
}

/// Digit-serial `bcd_sbc` over all `SCRATCH` positions; `a` is assumed
/// `>= b` (the caller's `while d.ge(&v)` guard establishes this).
fn sub_full(a: &Scratch, b: &Scratch) -> Scratch {
    let mut result = Scratch::from_mantissa(&[0u8; MANT]);
    let mut borrow = 0u8;
    for i in (0..SCRATCH).rev() {
        let (digit, brw) = bcd_sbc(a.get(i), b.get(i), borrow);
        result.set(i, digit);
        borrow = brw;
    }
    if borrow != 0 {
        tracing::warn!(borrow, "divisor exceeded dividend after a passing ge() compare");
    }
    result
}
