//! Human-readable descriptions of ACL permission levels.
//!
//! A permission level is a 3-bit field: bit 0 grants read, bit 1 grants
//! write, bit 2 grants subscribe.

/// Labels indexed by permission bit pattern.
pub const PERMISSION_LABELS: [&str; 8] = [
    "none",
    "read",
    "write",
    "read and write",
    "subscribe",
    "read and subscribe",
    "write and subscribe",
    "read, write, and subscribe",
];

/// Describes a stored permission level.
///
/// # Panics
///
/// Panics if `level` is outside `0..=7`. Levels are stored without range
/// validation, so an out-of-range row surfaces here at listing time rather
/// than when it was added.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn describe(level: i32) -> &'static str {
    PERMISSION_LABELS[level as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defined_levels_have_labels() {
        assert_eq!(describe(0), "none");
        assert_eq!(describe(1), "read");
        assert_eq!(describe(2), "write");
        assert_eq!(describe(3), "read and write");
        assert_eq!(describe(4), "subscribe");
        assert_eq!(describe(5), "read and subscribe");
        assert_eq!(describe(6), "write and subscribe");
        assert_eq!(describe(7), "read, write, and subscribe");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn level_above_range_panics() {
        describe(8);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn negative_level_panics() {
        describe(-1);
    }
}
