//! Limit/offset clamping for list endpoints.

/// Default page size for admin list endpoints.
pub const DEFAULT_LIMIT: i64 = 10;

/// Hard cap on page size.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, using `default` if absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(None, DEFAULT_LIMIT, MAX_LIMIT), 10);
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIMIT, MAX_LIMIT), 1);
        assert_eq!(clamp_limit(Some(500), DEFAULT_LIMIT, MAX_LIMIT), 100);
    }

    #[test]
    fn offset_is_non_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(20)), 20);
    }
}
