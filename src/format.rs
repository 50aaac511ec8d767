//! Display helpers shared by the report commands.

/// Format a currency amount with two decimals, e.g. `$6250.00`
pub fn usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Round a value to whole cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable payback period
///
/// A non-finite value is the "never recoups" sentinel and must not be shown
/// as a number.
pub fn payback_label(payback_months: f64) -> String {
    if payback_months.is_finite() {
        format!("{} months", payback_months)
    } else {
        "Never (negative or zero monthly net savings)".to_string()
    }
}
