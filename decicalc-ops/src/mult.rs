//! Multiplication (spec §4.5).

use decicalc_types::Number;
use decicalc_util::digit::{bcd_adc, bcd_mult, exp_add};
use decicalc_util::{Scratch, MANT, SCRATCH};

/// Multiplies two `Number`s.
pub fn mult(x: Number, y: Number) -> Number {
    if x.mantissa_is_zero() || y.mantissa_is_zero() {
        return Number::canonical_zero();
    }

    let sign = x.sign() != y.sign();
    let mut exps = exp_add(x.exps(), y.exps());

    let mut r = Scratch::from_mantissa(&[0u8; MANT]);
    for j in (0..MANT).rev() {
        r.shr();
        for i in (0..MANT).rev() {
            let packed = bcd_mult(x.mant()[i], y.mant()[j]);
            let tens = packed >> 4;
            let units = packed & 0xF;
            let mut t = Scratch::from_mantissa(&[0u8; MANT]);
            t.set(i, tens);
            t.set(i + 1, units);
            r = add_full(&r, &t);
        }
    }

    if r.get(0) == 0 {
        r.shl();
    } else {
        exps = exps.wrapping_add(1);
    }

    Number::from_parts(r.leading_mantissa(), sign, exps)
}

/// Digit-serial `bcd_adc` over all `SCRATCH` positions (unlike `add_sub`,
/// the partial products here legitimately carry into the guard digits).
fn add_full(a: &Scratch, b: &Scratch) -> Scratch {
    let mut result = Scratch::from_mantissa(&[0u8; MANT]);
    let mut carry = 0u8;
    for i in (0..SCRATCH).rev() {
        let (digit, c) = bcd_adc(a.get(i), b.get(i), carry);
        result.set(i, digit);
        carry = c;
    }
    if carry != 0 {
        // Mathematically unreachable: the widest product of two MANT-digit
        // operands never needs more than SCRATCH digits of headroom. Per
        // the diagnostics-only contract for internal invariant violations,
        // report and keep going rather than abort.
        tracing::warn!(carry, "multiply accumulator overflowed past the guard digits");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use decicalc_parse::parse_str;

    #[test]
    fn zero_operand_yields_canonical_zero_regardless_of_sign() {
        let neg_one = parse_str("-1              ");
        let zero = parse_str(" 0              ");
        let a = mult(neg_one, zero);
        let b = mult(zero, neg_one);
        assert!(a.is_zero());
        assert!(b.is_zero());
        assert!(!a.sign());
        assert!(!b.sign());
    }

    #[test]
    fn sign_is_xor_of_operands() {
        let neg_two = parse_str("-2              ");
        let three = parse_str(" 3              ");
        assert!(mult(neg_two, three).sign());
        assert!(!mult(neg_two, neg_two).sign());
    }

    #[test]
    fn matches_top_14_digits_of_true_product() {
        let pi = parse_str(" 1.2345678901234");
        let e = parse_str(" 2.7182818284590");
        let result = mult(pi, e);
        assert_eq!(
            *result.mant(),
            [3, 3, 5, 5, 9, 0, 3, 4, 6, 1, 7, 2, 1, 4]
        );
        assert_eq!(result.exps(), 128);
    }

    #[test]
    fn one_times_one_is_one() {
        let one = parse_str(" 1              ");
        let result = mult(one, one);
        assert_eq!(result.mant()[0], 1);
        assert_eq!(result.exps(), 128);
    }
}
