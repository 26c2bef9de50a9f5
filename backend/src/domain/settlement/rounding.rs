//! Cent-level rounding shared by the balance calculator and the settlement optimizer.

/// Balances and transfers at or below this magnitude count as settled.
pub const DEAD_ZONE: f64 = 0.01;

/// Round an amount to 2 decimal places.
///
/// Exact half-cent ties go to the even cent, so `-3.125` becomes `-3.12`.
/// Negative zero is normalized to `0.0` so settled members serialize as `0.0`.
pub fn round_cents(amount: f64) -> f64 {
    let rounded = (amount * 100.0).round_ties_even() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// True when the amount falls inside the ±[`DEAD_ZONE`] band
pub fn is_settled(amount: f64) -> bool {
    amount.abs() <= DEAD_ZONE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(33.333333), 33.33);
        assert_eq!(round_cents(-33.333333), -33.33);
        assert_eq!(round_cents(6.666667), 6.67);
        assert_eq!(round_cents(25.0), 25.0);
    }

    #[test]
    fn test_half_cent_ties_round_to_even() {
        assert_eq!(round_cents(-3.125), -3.12);
        assert_eq!(round_cents(0.625), 0.62);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(12.5), 12.5);
    }

    #[test]
    fn test_round_cents_normalizes_negative_zero() {
        let rounded = round_cents(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_dead_zone_boundaries() {
        assert!(is_settled(0.0));
        assert!(is_settled(0.01));
        assert!(is_settled(-0.01));
        assert!(!is_settled(0.02));
        assert!(!is_settled(-0.011));
    }
}
