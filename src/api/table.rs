
use crate::core::Series;

/// Header row of the text table view.
pub const TABLE_HEADER: &str = "  #             x               f(x)";

/// Renders `series` as the fixed-width text table shown by table views.
///
/// Each row is the index right-aligned in 4 columns, `x` with 3 decimals in
/// 14 columns and `y` with 3 significant digits in 15 columns. Every line,
/// the header included, ends with a newline.
#[must_use]
pub fn format_table(series: &Series) -> String {
    let mut out = String::with_capacity(TABLE_HEADER.len() + 1 + series.len() * 38);
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for (index, sample) in series.iter().enumerate() {
        out.push_str(&format_table_row(index, sample.x, sample.y));
        out.push('\n');
    }
    out
}

#[must_use]
pub fn format_table_row(index: usize, x: f64, y: f64) -> String {
    format!(
        "{index:>4}  {x:>14.3}  {y:>15}",
        y = format_general(y, 3)
    )
}

/// Formats `value` with `precision` significant digits in "general" style:
/// fixed notation when the decimal exponent is in `-4..precision`,
/// scientific (`1.23e+05`) otherwise, trailing zeros removed in both.
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let precision = precision.max(1);
    let scientific = format!("{value:.prec$e}", prec = precision - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent >= -4 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(format!("{value:.decimals$}"))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa.to_owned()),
            exponent.unsigned_abs()
        )
    }
}

fn strip_trailing_zeros(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_uses_fixed_notation_for_moderate_exponents() {
        assert_eq!(format_general(0.0, 3), "0");
        assert_eq!(format_general(1.0, 3), "1");
        assert_eq!(format_general(4.0, 3), "4");
        assert_eq!(format_general(0.5, 3), "0.5");
        assert_eq!(format_general(12.345, 3), "12.3");
        assert_eq!(format_general(100.0, 3), "100");
        assert_eq!(format_general(-2.5, 3), "-2.5");
        assert_eq!(format_general(0.000_123_4, 3), "0.000123");
    }

    #[test]
    fn general_format_switches_to_scientific_outside_fixed_range() {
        assert_eq!(format_general(1234.0, 3), "1.23e+03");
        assert_eq!(format_general(999.6, 3), "1e+03");
        assert_eq!(format_general(0.000_012_34, 3), "1.23e-05");
        assert_eq!(format_general(-1.0e100, 3), "-1e+100");
    }

    #[test]
    fn general_format_passes_through_non_finite_values() {
        assert_eq!(format_general(f64::NAN, 3), "nan");
        assert_eq!(format_general(f64::INFINITY, 3), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 3), "-inf");
    }

    #[test]
    fn table_row_matches_column_widths() {
        let row = format_table_row(2, 2.0, 4.0);
        assert_eq!(row, format!("   2  {:>14}  {:>15}", "2.000", "4"));
        assert_eq!(row.len(), 4 + 2 + 14 + 2 + 15);
    }
}
