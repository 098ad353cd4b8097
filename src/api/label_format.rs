/// Fixed-point tic label text with `precision` fractional digits.
///
/// Negative zero prints as zero; non-finite values print as `nan`/`inf`.
#[must_use]
pub fn format_tic_label(value: f64, precision: u32) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let precision = precision as usize;
    let text = format!("{value:.precision$}");
    if is_negative_zero_text(&text) {
        return text.trim_start_matches('-').to_owned();
    }
    text
}

fn is_negative_zero_text(text: &str) -> bool {
    text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_precision() {
        assert_eq!(format_tic_label(1.5, 2), "1.50");
        assert_eq!(format_tic_label(-0.25, 3), "-0.250");
        assert_eq!(format_tic_label(2.0, 0), "2");
    }

    #[test]
    fn rounded_negative_zero_prints_as_zero() {
        assert_eq!(format_tic_label(-0.0001, 2), "0.00");
        assert_eq!(format_tic_label(-0.0, 1), "0.0");
    }
}
