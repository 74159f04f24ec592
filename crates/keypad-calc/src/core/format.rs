//! Display text <-> number conversions

/// Formats a result the way the display shows it after `=`.
///
/// Integral values keep a trailing `.0` (`42.0`), other values use the
/// shortest round-trip form (`12.5`), exponents carry an explicit sign and at
/// least two digits (`1e+16`, `1e-07`) and non-finite values print as `inf`,
/// `-inf` and `nan`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = exponent
        .strip_prefix('-')
        .map_or(('+', exponent), |digits| ('-', digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Parses display text, defaulting to `0.0` when it is not a number.
///
/// A trailing decimal point is accepted (`"3."` is `3.0`).
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}
