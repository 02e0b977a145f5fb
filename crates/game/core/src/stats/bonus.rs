//! Integer arithmetic for bonus amounts.

use crate::env::BonusAmount;

/// Integer division rounding toward negative infinity.
///
/// Returns `None` for a zero divisor (or the single overflowing case).
///
/// ```
/// # use realm_core::stats::floor_div;
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, 0), None);
/// ```
pub fn floor_div(numerator: i32, divisor: i32) -> Option<i32> {
    let quotient = numerator.checked_div(divisor)?;
    if numerator % divisor != 0 && (numerator < 0) != (divisor < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Integer division rounding toward positive infinity.
pub fn ceil_div(numerator: i32, divisor: i32) -> Option<i32> {
    let quotient = numerator.checked_div(divisor)?;
    if numerator % divisor != 0 && (numerator < 0) == (divisor < 0) {
        Some(quotient + 1)
    } else {
        Some(quotient)
    }
}

/// Percentage of a value, truncated toward zero (`value * percent / 100`).
///
/// Returns `None` when the result does not fit in an `i32`.
pub fn percent_of(value: i32, percent: i32) -> Option<i32> {
    i32::try_from(i64::from(value) * i64::from(percent) / 100).ok()
}

impl BonusAmount {
    /// Amount contributed at `source_level`.
    ///
    /// `Fixed` ignores the level; `DivisorScaled` floors `source_level / divisor`.
    /// Returns `None` when the divisor is zero.
    pub fn contribution(self, source_level: i32) -> Option<i32> {
        match self {
            BonusAmount::Fixed(amount) => Some(amount),
            BonusAmount::DivisorScaled { divisor } => floor_div(source_level, divisor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(6, 2), Some(3));
        assert_eq!(floor_div(7, 2), Some(3));
        assert_eq!(floor_div(-1, 2), Some(-1));
        assert_eq!(floor_div(-6, 2), Some(-3));
        assert_eq!(floor_div(7, -2), Some(-4));
        assert_eq!(floor_div(-7, -2), Some(3));
        assert_eq!(floor_div(1, 0), None);
    }

    #[test]
    fn ceil_div_rounds_toward_positive_infinity() {
        assert_eq!(ceil_div(3, 2), Some(2));
        assert_eq!(ceil_div(4, 2), Some(2));
        assert_eq!(ceil_div(-3, 2), Some(-1));
        assert_eq!(ceil_div(0, 2), Some(0));
        assert_eq!(ceil_div(3, 0), None);
    }

    #[test]
    fn percent_of_truncates_toward_zero() {
        assert_eq!(percent_of(5, 50), Some(2));
        assert_eq!(percent_of(-5, 50), Some(-2));
        assert_eq!(percent_of(10, 150), Some(15));
    }

    #[test]
    fn percent_of_rejects_results_outside_i32() {
        assert_eq!(percent_of(i32::MAX, 200), None);
        assert_eq!(percent_of(i32::MAX, -300), None);
        assert_eq!(percent_of(i32::MAX, 100), Some(i32::MAX));
    }

    #[test]
    fn scaled_bonus_uses_source_level() {
        let scaled = BonusAmount::DivisorScaled { divisor: 2 };
        assert_eq!(scaled.contribution(6), Some(3));
        assert_eq!(scaled.contribution(7), Some(3));
        assert_eq!(scaled.contribution(-3), Some(-2));
        assert_eq!(BonusAmount::Fixed(10).contribution(99), Some(10));
        assert_eq!(BonusAmount::DivisorScaled { divisor: 0 }.contribution(4), None);
    }
}
