/* hwtrig | repr.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Reproducible float to text conversion */

/******************************************************************************/

use core::fmt;

/******************************************************************************/

/// Smallest magnitude printed in positional notation
const POSITIONAL_MIN: f64 = 1e-4;
/// Magnitudes from here on are printed in scientific notation
const POSITIONAL_MAX: f64 = 1e16;

/// Shortest round-trip text representation of an `f64`
///
/// Values with a magnitude in `[1e-4, 1e16)` are printed positionally and always carry a fractional
/// part (`1.0`, `0.24`). Anything else uses scientific notation with a signed, two digit minimum
/// exponent (`2.83276944882399e-16`, `1e+16`). The digits are always the shortest ones that parse
/// back to the exact same value, so the text does not depend on the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repr(pub f64);

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            return f.write_str("nan");
        }
        if x.is_infinite() {
            return f.write_str(if x < 0.0 { "-inf" } else { "inf" });
        }

        let magnitude = x.abs();
        if magnitude == 0.0 || (POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
            let text = x.to_string();
            if text.contains('.') {
                f.write_str(&text)
            } else {
                write!(f, "{}.0", text)
            }
        } else {
            // Rust prints e.g. "1e16" or "2.5e-7"
            let text = format!("{:e}", x);
            let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
            let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
        }
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(-0.0, "-0.0")]
    #[case(1.0, "1.0")]
    #[case(90.0, "90.0")]
    #[case(0.24, "0.24")]
    #[case(89.75999999999999, "89.75999999999999")]
    #[case(1.5707963267948963, "1.5707963267948963")]
    #[case(0.0041887902047863905, "0.0041887902047863905")]
    #[case(3530114321217157.5, "3530114321217157.5")]
    #[case(0.0001, "0.0001")]
    #[case(1e16, "1e+16")]
    #[case(1.5e17, "1.5e+17")]
    #[case(2.83276944882399e-16, "2.83276944882399e-16")]
    #[case(-1e-5, "-1e-05")]
    #[case(1e300, "1e+300")]
    #[case(f64::INFINITY, "inf")]
    #[case(f64::NEG_INFINITY, "-inf")]
    #[case(f64::NAN, "nan")]
    fn test_repr(#[case] x: f64, #[case] expected: &str) {
        assert_eq!(Repr(x).to_string(), expected);
    }

    #[test]
    fn test_round_trip() {
        for x in [0.1, 1.0 / 3.0, core::f64::consts::PI, 6.02214076e23, 1.602176634e-19, -123456.789] {
            let text = Repr(x).to_string();
            assert_eq!(text.parse::<f64>().unwrap(), x, "{}", text);
        }
    }
}
