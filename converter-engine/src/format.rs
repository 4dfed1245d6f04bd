//! Number formatting for converted amounts and rates.
//!
//! Fixed en-US-style convention: comma thousands separators, minimum 2 and
//! maximum 6 fractional digits.

const MIN_FRACTION_DIGITS: usize = 2;
const MAX_FRACTION_DIGITS: usize = 6;

/// Formats a value with 2-6 fractional digits and thousands separators.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let frac = frac_part.trim_end_matches('0');
    let frac = if frac.len() >= MIN_FRACTION_DIGITS {
        frac.to_string()
    } else {
        format!("{:0<width$}", frac, width = MIN_FRACTION_DIGITS)
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
