/// Formats the number with a fixed precision and `,` between thousands: `1,234,567.89`.
#[must_use]
pub fn format_grouped(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut buffer = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value < 0.0 {
        buffer.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            buffer.push(',');
        }
        buffer.push(digit);
    }
    if let Some(fraction) = fraction {
        buffer.push('.');
        buffer.push_str(fraction);
    }
    buffer
}
