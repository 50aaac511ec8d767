use crate::format::round_cents;

/// Months covered by the default ROI projection.
pub const DEFAULT_PROJECTION_MONTHS: usize = 12;

/// Cumulative net-savings series for a payback projection.
///
/// Seeded at `-build_cost` (month zero carries the full one-time spend),
/// then each month adds the recurring net savings. Points are rounded to
/// cents, matching how the series is displayed.
pub fn cumulative_savings(
    build_cost: f64,
    recurring_net_monthly_savings: f64,
    months: usize,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(months);
    let mut cumulative = -build_cost;
    for _ in 0..months {
        cumulative += recurring_net_monthly_savings;
        series.push(round_cents(cumulative));
    }
    series
}
