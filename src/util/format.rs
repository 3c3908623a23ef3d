//! Display formatting helpers for money, points, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a dollar amount with two decimal places, e.g. `$12.50`.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Format a points total with thousands separators, e.g. `12,000`.
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if points < 0 { format!("-{grouped}") } else { grouped }
}

/// The calendar-date portion of an ISO 8601 timestamp.
pub fn date_portion(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
