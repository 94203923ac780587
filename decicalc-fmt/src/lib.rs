//! Canonical decimal printing and oracle-comparison verdicts (spec §4.7).

use decicalc_types::Number;
use thiserror::Error;

/// Failure parsing an oracle-supplied reference string during comparison.
#[derive(Debug, Error)]
pub enum FmtError {
    #[error("could not decode oracle string {0:?} as a number")]
    OracleDecode(String),
}

/// Renders `n` in this system's canonical form: `S M0.M1..M{k-1}eEPP`,
/// e.g. `+1.2345678901234e+00`. The division-by-zero sentinel renders as
/// `+inf` / `-inf` regardless of its (otherwise meaningless) mantissa.
pub fn canonical(n: &Number) -> String {
    let sign = if n.sign() { '-' } else { '+' };
    if n.is_div_by_zero() {
        return format!("{sign}inf");
    }

    let mant = n.mant();
    let mut out = String::with_capacity(mant.len() + 8);
    out.push(sign);
    out.push((b'0' + mant[0]) as char);
    out.push('.');
    for &d in &mant[1..] {
        out.push((b'0' + d) as char);
    }

    let unbiased = n.exps() as i32 - i32::from(decicalc_util::EXP_BIAS);
    out.push('e');
    out.push(if unbiased >= 0 { '+' } else { '-' });
    out.push_str(&format!("{:02}", unbiased.unsigned_abs()));
    out
}

/// Result of comparing a canonical rendering against an oracle string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The strings are identical.
    Ok,
    /// The strings differ only by a last-digit rounding discrepancy.
    Near,
    /// The values disagree beyond the `Near` tolerance.
    Fail,
}

/// Compares this system's canonical rendering of a value against an
/// oracle's independently formatted reference string.
///
/// `ours` is expected to already be in [`canonical`] form; `oracle` is an
/// external `%.13e`-style string (same `M0.M1..e±PP` shape, produced by
/// whatever reference the caller is checking against). Equal strings are
/// `Ok`. Otherwise both are decoded as floating-point values and their
/// difference, scaled by `10^-exponent`, is compared against the last
/// representable digit's tolerance, `10^-(MANT-2)`.
pub fn compare(ours: &str, oracle: &str) -> Result<Verdict, FmtError> {
    if ours == oracle {
        return Ok(Verdict::Ok);
    }

    let ours_is_sentinel = ours.ends_with("inf");
    let oracle_is_sentinel = oracle.ends_with("inf");
    if ours_is_sentinel || oracle_is_sentinel {
        return Ok(Verdict::Fail);
    }

    let ours_value: f64 = ours
        .parse()
        .map_err(|_| FmtError::OracleDecode(ours.to_string()))?;
    let oracle_value: f64 = oracle
        .parse()
        .map_err(|_| FmtError::OracleDecode(oracle.to_string()))?;

    let exponent = extract_exponent(ours).unwrap_or(0);
    let scale = 10f64.powi(-exponent);
    let tolerance = 10f64.powi(-(i32::try_from(decicalc_util::MANT).unwrap() - 2));

    let scaled_diff = (ours_value - oracle_value).abs() * scale;
    if scaled_diff <= tolerance {
        Ok(Verdict::Near)
    } else {
        Ok(Verdict::Fail)
    }
}

fn extract_exponent(canonical: &str) -> Option<i32> {
    let (_, exp) = canonical.split_once('e')?;
    exp.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_of_three() {
        let three = Number::from_parts(
            {
                let mut m = [0u8; decicalc_util::MANT];
                m[0] = 3;
                m
            },
            false,
            128,
        );
        assert_eq!(canonical(&three), "+3.0000000000000e+00");
    }

    #[test]
    fn canonical_of_negative_exponent_value() {
        let mut m = [3u8; decicalc_util::MANT];
        m[0] = 3;
        let n = Number::from_parts(m, false, 127);
        assert_eq!(canonical(&n), "+3.3333333333333e-01");
    }

    #[test]
    fn sentinel_renders_as_signed_inf() {
        assert_eq!(canonical(&Number::div_by_zero(false)), "+inf");
        assert_eq!(canonical(&Number::div_by_zero(true)), "-inf");
    }

    #[test]
    fn identical_strings_are_ok() {
        let s = "+1.2345678901234e+00";
        assert_eq!(compare(s, s).unwrap(), Verdict::Ok);
    }

    #[test]
    fn last_digit_rounding_is_near() {
        let ours = "+1.0000000000000e+00";
        let oracle = "+1.0000000000001e+00";
        assert_eq!(compare(ours, oracle).unwrap(), Verdict::Near);
    }

    #[test]
    fn large_discrepancy_is_fail() {
        let ours = "+1.0000000000000e+00";
        let oracle = "+2.0000000000000e+00";
        assert_eq!(compare(ours, oracle).unwrap(), Verdict::Fail);
    }

    #[test]
    fn mismatched_sentinel_is_fail() {
        assert_eq!(compare("+inf", "+1.0000000000000e+00").unwrap(), Verdict::Fail);
    }

    #[test]
    fn unparseable_oracle_string_is_an_error() {
        assert!(compare("+1.0000000000000e+00", "not a number").is_err());
    }
}
