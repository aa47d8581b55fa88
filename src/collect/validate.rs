use crate::errors::InvalidProbabilityError;

/// Absolute tolerance on the scenario probability sum. Fixed on
/// purpose: it absorbs floating-point accumulation error only, never
/// user slack.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Check that a scenario probability pair sums to 1.0 within tolerance.
///
/// Membership of each probability in [0, 1] is enforced by the input
/// surface; this function only owns the sum invariant. No side effects.
#[inline]
pub fn validate_probabilities(p1: f64, p2: f64) -> Result<(f64, f64), InvalidProbabilityError> {
    if ((p1 + p2) - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE {
        Ok((p1, p2))
    } else {
        Err(InvalidProbabilityError { p1, p2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sums_pass() {
        assert!(validate_probabilities(0.5, 0.5).is_ok());
        assert!(validate_probabilities(1.0, 0.0).is_ok());
        assert!(validate_probabilities(0.0, 1.0).is_ok());
        assert!(validate_probabilities(0.6, 0.4).is_ok());
        assert!(validate_probabilities(0.7, 0.3).is_ok());
    }

    #[test]
    fn test_off_by_more_than_tolerance_fails() {
        assert!(validate_probabilities(0.5, 0.49).is_err());
        assert!(validate_probabilities(0.6, 0.5).is_err());
        assert!(validate_probabilities(0.0, 0.0).is_err());
        assert!(validate_probabilities(1.0, 1.0).is_err());
    }

    #[test]
    fn test_tolerance_boundary() {
        // 1e-7 off: inside tolerance
        assert!(validate_probabilities(0.5, 0.5000001).is_ok());
        // 1e-5 off: outside
        assert!(validate_probabilities(0.5, 0.50001).is_err());
    }

    #[test]
    fn test_pair_returned_unchanged() {
        let (p1, p2) = validate_probabilities(0.6, 0.4).unwrap();
        assert_eq!(p1, 0.6);
        assert_eq!(p2, 0.4);
    }
}
