//! Addition and subtraction (spec §4.4).

use decicalc_types::Number;
use decicalc_util::digit::{bcd_adc, bcd_sbc};
use decicalc_util::{Scratch, MANT};

/// Adds (`is_sub = false`) or subtracts (`is_sub = true`) two `Number`s.
pub fn add_sub(x: Number, y: Number, is_sub: bool) -> Number {
    if y.is_zero() {
        return x;
    }
    if x.is_zero() {
        return flip_sign_if(y, is_sub);
    }

    let ex = x.exps() as i32 - 128;
    let ey = y.exps() as i32 - 128;
    let d = (ex - ey).unsigned_abs() as usize;

    if d >= MANT {
        return if ex >= ey {
            x
        } else {
            flip_sign_if(y, is_sub)
        };
    }

    let (larger, smaller, result_exps, smaller_is_y) = if ex >= ey {
        (x, y, x.exps(), true)
    } else {
        (y, x, y.exps(), false)
    };

    let larger_scratch = Scratch::from_mantissa(larger.mant());
    let mut smaller_scratch = Scratch::from_mantissa(smaller.mant());
    for _ in 0..d {
        smaller_scratch.shr();
    }

    let same_sign = x.sign() == y.sign();
    let effective_is_add = same_sign != is_sub;

    if effective_is_add {
        let (sum, carry) = add_digits(&larger_scratch, &smaller_scratch);
        let mut sum = sum;
        let mut exps = result_exps;
        if carry == 1 {
            sum.shr();
            sum.set(0, 1);
            exps = exps.wrapping_add(1);
        }
        Number::from_parts(sum.leading_mantissa(), x.sign(), exps)
    } else {
        let (x_scratch, y_scratch) = if smaller_is_y {
            (&larger_scratch, &smaller_scratch)
        } else {
            (&smaller_scratch, &larger_scratch)
        };
        let swapped = !x_scratch.ge(y_scratch);
        let (minuend, subtrahend) = if swapped {
            (y_scratch, x_scratch)
        } else {
            (x_scratch, y_scratch)
        };
        let mut diff = sub_digits(minuend, subtrahend);
        if diff.is_zero() {
            return Number::canonical_zero();
        }
        let mut exps = result_exps;
        while diff.get(0) == 0 {
            diff.shl();
            exps = exps.wrapping_sub(1);
        }
        let sign = x.sign() != swapped;
        Number::from_parts(diff.leading_mantissa(), sign, exps)
    }
}

fn flip_sign_if(n: Number, flip: bool) -> Number {
    if flip {
        n.negated()
    } else {
        n
    }
}

/// Digit-serial `bcd_adc` over exactly `MANT` positions, LSB (index
/// `MANT - 1`) to MSB (index `0`). Guard digits beyond `MANT` are never
/// summed: any alignment shift pushed insignificant digits there, and
/// this system truncates rather than rounds.
fn add_digits(a: &Scratch, b: &Scratch) -> (Scratch, u8) {
    let mut result = Scratch::from_mantissa(&[0u8; MANT]);
    let mut carry = 0u8;
    for i in (0..MANT).rev() {
        let (digit, c) = bcd_adc(a.get(i), b.get(i), carry);
        result.set(i, digit);
        carry = c;
    }
    (result, carry)
}

/// Digit-serial `bcd_sbc` over exactly `MANT` positions; `a` must be
/// `>= b` (the caller determines and applies the swap before calling).
fn sub_digits(a: &Scratch, b: &Scratch) -> Scratch {
    let mut result = Scratch::from_mantissa(&[0u8; MANT]);
    let mut borrow = 0u8;
    for i in (0..MANT).rev() {
        let (digit, brw) = bcd_sbc(a.get(i), b.get(i), borrow);
        result.set(i, digit);
        borrow = brw;
    }
    if borrow != 0 {
        // Mathematically unreachable once the caller has picked the larger
        // operand as the minuend; diagnostics-only per spec §7.
        tracing::warn!(borrow, "subtrahend exceeded minuend after swap decision");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use decicalc_parse::parse_str;

    #[test]
    fn additive_identity() {
        let x = parse_str(" 1.2345678901234");
        let zero = Number::canonical_zero();
        assert_eq!(add_sub(x, zero, false), x);
        assert_eq!(add_sub(zero, x, false), x);
        assert_eq!(add_sub(x, zero, true), x);
        assert_eq!(add_sub(zero, x, true), x.negated());
    }

    #[test]
    fn negative_zero_plus_zero_is_canonical_zero() {
        let neg_zero = parse_str("-0              ");
        let zero = parse_str(" 0              ");
        let result = add_sub(neg_zero, zero, false);
        assert!(result.is_zero());
        assert!(!result.sign());
    }

    #[test]
    fn one_plus_two_is_three() {
        let one = parse_str(" 1              ");
        let two = parse_str(" 2              ");
        let result = add_sub(one, two, false);
        assert_eq!(result.mant()[0], 3);
        assert_eq!(result.exps(), 128);
        assert!(!result.sign());
    }

    #[test]
    fn carry_out_renormalizes_and_bumps_exponent() {
        // 9.9999999999999 + 9.9999999999999 = 19.9999999999998, truncated
        // (not rounded) to 14 digits after the carry shift: 1.9999999999999e+01.
        let nine = parse_str(" 9.9999999999999");
        let result = add_sub(nine, nine, false);
        assert_eq!(result.mant()[0], 1);
        assert_eq!(result.mant()[1], 9);
        assert_eq!(result.exps(), 129);
    }

    #[test]
    fn subtraction_cancels_to_canonical_zero() {
        let one = parse_str(" 1              ");
        let result = add_sub(one, one, true);
        assert!(result.is_zero());
    }

    #[test]
    fn subtraction_with_swap_flips_sign() {
        let one = parse_str(" 1              ");
        let two = parse_str(" 2              ");
        // 1 - 2 = -1
        let result = add_sub(one, two, true);
        assert!(result.sign());
        assert_eq!(result.mant()[0], 1);
    }
}
