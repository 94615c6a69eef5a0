//! Number rendering for shape descriptions.
//!
//! Shape strings are a documented format, so numbers are written the same way
//! everywhere:
//!
//! - [`Plain`] writes the shortest form that round-trips (`5`, `2.5`, `0.1`).
//!   Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
//!   with an explicit sign on positive exponents (`1e+22`, `1.5e-7`).
//! - [`Fixed`] writes a fixed number of fractional digits, rounded to nearest
//!   with exact half-way values rounded away from zero (`0.0625` → `0.063`).
//!   Magnitudes of `1e21` and above are written as [`Plain`] does.
//!
//! Both render negative zero as `0`, infinities as `Infinity` / `-Infinity`
//! and NaN as `NaN`.

use std::fmt;

/// Smallest magnitude written in exponent form because it is too large.
const EXPONENT_FORM_ABOVE: f64 = 1e21;

/// Magnitudes below this (other than zero) are written in exponent form.
const EXPONENT_FORM_BELOW: f64 = 1e-6;

/// Displays an `f64` in its shortest round-trip form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plain(pub(crate) f64);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = non_finite_name(self.0) {
            return f.write_str(name);
        }

        let value = without_negative_zero(self.0);
        let magnitude = value.abs();
        let positional = (EXPONENT_FORM_BELOW..EXPONENT_FORM_ABOVE).contains(&magnitude);
        if magnitude != 0.0 && !positional {
            let text = format!("{value:e}");
            return match text.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{mantissa}e+{exponent}")
                }
                _ => f.write_str(&text),
            };
        }

        write!(f, "{value}")
    }
}

/// Displays an `f64` with exactly `digits` fractional digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fixed {
    value: f64,
    digits: usize,
}

impl Fixed {
    pub(crate) fn new(value: f64, digits: usize) -> Self {
        Self { value, digits }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if non_finite_name(self.value).is_some() || self.value.abs() >= EXPONENT_FORM_ABOVE {
            return fmt::Display::fmt(&Plain(self.value), f);
        }

        let value = without_negative_zero(self.value);
        // `{:.*}` resolves exact ties to even, so ties are rounded here instead.
        match half_way_truncated(value, self.digits) {
            Some(truncated) => {
                if value < 0.0 {
                    f.write_str("-")?;
                }
                f.write_str(&increment_last_digit(&truncated))
            }
            None => write!(f, "{:.*}", self.digits, value),
        }
    }
}

/// Returns `|value|` cut to `digits` fractional digits when it lies exactly
/// half-way between two numbers with that many digits.
fn half_way_truncated(value: f64, digits: usize) -> Option<String> {
    if !has_exact_fraction(value, digits + 1) {
        return None;
    }
    let extended = format!("{:.*}", digits + 1, value.abs());
    let truncated = extended.strip_suffix('5')?;
    Some(truncated.trim_end_matches('.').to_string())
}

/// Whether the exact binary value of `value` needs at most `digits`
/// fractional decimal digits.
fn has_exact_fraction(value: f64, digits: usize) -> bool {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased_exponent - 1075)
    };
    if mantissa == 0 {
        return true;
    }
    exponent + i64::from(mantissa.trailing_zeros()) + digits as i64 >= 0
}

/// Adds one unit in the last place to an unsigned decimal string.
fn increment_last_digit(number: &str) -> String {
    let mut chars: Vec<char> = number.chars().collect();
    for index in (0..chars.len()).rev() {
        match chars[index] {
            '.' => {}
            '9' => chars[index] = '0',
            digit => {
                chars[index] = (digit as u8 + 1) as char;
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

fn non_finite_name(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

// -0.0 == 0.0, so this maps both zeros to positive zero.
fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_drops_trailing_zero_fraction() {
        assert_eq!(Plain(5.0).to_string(), "5");
        assert_eq!(Plain(30.0).to_string(), "30");
    }

    #[test]
    fn test_plain_keeps_shortest_fraction() {
        assert_eq!(Plain(2.5).to_string(), "2.5");
        assert_eq!(Plain(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Plain(-7.25).to_string(), "-7.25");
    }

    #[test]
    fn test_plain_special_values() {
        assert_eq!(Plain(-0.0).to_string(), "0");
        assert_eq!(Plain(f64::NAN).to_string(), "NaN");
        assert_eq!(Plain(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Plain(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn test_fixed_rounds_to_nearest() {
        assert_eq!(Fixed::new(94.24777960769379, 3).to_string(), "94.248");
        assert_eq!(Fixed::new(77.1238898038469, 3).to_string(), "77.124");
        assert_eq!(Fixed::new(3.14159, 3).to_string(), "3.142");
        assert_eq!(Fixed::new(3.1414, 3).to_string(), "3.141");
    }

    #[test]
    fn test_fixed_pads_fraction() {
        assert_eq!(Fixed::new(4.0, 3).to_string(), "4.000");
        assert_eq!(Fixed::new(0.5, 3).to_string(), "0.500");
    }

    #[test]
    fn test_plain_exponent_form_outside_positional_range() {
        assert_eq!(Plain(1e22).to_string(), "1e+22");
        assert_eq!(Plain(1e21).to_string(), "1e+21");
        assert_eq!(Plain(-2.5e30).to_string(), "-2.5e+30");
        assert_eq!(Plain(1e-7).to_string(), "1e-7");
        assert_eq!(Plain(1.5e-7).to_string(), "1.5e-7");
    }

    #[test]
    fn test_plain_positional_at_range_edges() {
        assert_eq!(Plain(0.000001).to_string(), "0.000001");
        assert_eq!(
            Plain(123456789012345680000.0).to_string(),
            "123456789012345680000"
        );
    }

    #[test]
    fn test_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(Fixed::new(0.0625, 3).to_string(), "0.063");
        assert_eq!(Fixed::new(-0.0625, 3).to_string(), "-0.063");
        assert_eq!(Fixed::new(0.1875, 3).to_string(), "0.188");
        assert_eq!(Fixed::new(0.3125, 3).to_string(), "0.313");
        assert_eq!(Fixed::new(9.5, 0).to_string(), "10");
        assert_eq!(Fixed::new(99.5, 0).to_string(), "100");
        assert_eq!(Fixed::new(2.5, 0).to_string(), "3");
        assert_eq!(Fixed::new(0.5, 0).to_string(), "1");
    }

    #[test]
    fn test_fixed_large_values_use_exponent_form() {
        assert_eq!(Fixed::new(1e21, 3).to_string(), "1e+21");
        assert_eq!(Fixed::new(1e20, 3).to_string(), "100000000000000000000.000");
    }

    #[test]
    fn test_has_exact_fraction() {
        assert!(has_exact_fraction(0.0625, 4));
        assert!(!has_exact_fraction(0.0625, 3));
        assert!(has_exact_fraction(30.0, 0));
        assert!(!has_exact_fraction(0.1, 20));
    }

    #[test]
    fn test_fixed_special_values() {
        assert_eq!(Fixed::new(-0.0, 3).to_string(), "0.000");
        assert_eq!(Fixed::new(f64::NAN, 3).to_string(), "NaN");
        assert_eq!(Fixed::new(f64::INFINITY, 3).to_string(), "Infinity");
    }
}
