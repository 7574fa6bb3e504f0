//! Number formatting for amounts and counters

/// Formats a number with a comma thousands separator. Whole values get no
/// decimals, anything else gets two.
pub fn format_number(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Amount in Sudanese pounds, e.g. "5,000 جنيه".
pub fn format_money(value: f64) -> String {
    format!("{} جنيه", format_number(value))
}
