//! Number → text, using the shortest digits that round-trip.
//!
//! Layout follows the familiar calculator convention: plain decimal notation
//! for magnitudes from `1e-6` up to but excluding `1e21`, scientific
//! (`1.5e+21`, `1.5e-7`) outside that range. `-0` prints as `0`.

const MAX_FIXED_EXPONENT: i32 = 21;
const MIN_FIXED_EXPONENT: i32 = -6;

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let body = layout(&digits, exponent);
    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Splits `value` into its significant digits and the position of the
/// decimal point relative to them (`n` such that value = 0.d1d2.. × 10^n).
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` already yields the shortest round-trip mantissa, e.g. "1.2345e3".
    let sci = format!("{:e}", value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp + 1)
}

fn layout(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= MAX_FIXED_EXPONENT {
        let mut out = String::with_capacity(n as usize);
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        return out;
    }

    if 0 < n && n <= MAX_FIXED_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        return format!("{}.{}", int_part, frac_part);
    }

    if MIN_FIXED_EXPONENT < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let e = n - 1;
    let sign = if e >= 0 { '+' } else { '-' };
    let (first, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{}e{}{}", first, sign, e.abs())
    } else {
        format!("{}.{}e{}{}", first, rest, sign, e.abs())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/calc/format.rs"]
mod tests;
