//! Display formatting for prices and areas.

/// Group the digits of `value` in threes: `1500000` -> `"1.500.000"`.
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

/// Monthly rent label, e.g. `"Rp 1.500.000 / bulan"`.
pub fn monthly_price(value: u64, prefix: &str, separator: &str) -> String {
    format!("{} {} / bulan", prefix, group_thousands(value, separator))
}

/// Area label in square metres. Whole numbers drop the decimal part.
pub fn area(square_metres: f64) -> String {
    if square_metres.fract() == 0.0 {
        format!("{} m²", square_metres as u64)
    } else {
        format!("{:.1} m²", square_metres)
    }
}
