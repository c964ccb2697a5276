//! Shared arithmetic for the admin statistics endpoints.

/// `part` as a percentage of `total`, rounded to two decimals. Zero when
/// `total` is not positive.
pub fn percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let rate = part as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}
