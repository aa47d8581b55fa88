pub mod defaults;
pub mod validate;

use self::defaults::ParameterDefaults;
use self::validate::validate_probabilities;
use crate::emv::AlternativeInput;
use crate::errors::InvalidProbabilityError;

/// Gathers the parameter set for both alternatives and enforces the
/// probability-sum invariant before anything reaches the evaluator.
///
/// Holds the immutable default set, consumed once at construction.
/// Range limits on units, prices, and the fixed cost belong to the
/// input surface (the HTTP layer), not here.
pub struct ParameterCollector {
    defaults: ParameterDefaults,
}

impl ParameterCollector {
    pub fn new(defaults: ParameterDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &ParameterDefaults {
        &self.defaults
    }

    /// Validate one alternative. Returns the input unchanged when its
    /// probability pair sums to 1.0 within tolerance; a rejected input
    /// carries the error and is never partially evaluated.
    pub fn collect_alternative(
        &self,
        input: AlternativeInput,
    ) -> Result<AlternativeInput, InvalidProbabilityError> {
        validate_probabilities(input.probability_1, input.probability_2)?;
        Ok(input)
    }

    /// Defaults mode: bypasses validation entirely. The built-in set is
    /// valid by construction.
    pub fn collect_defaults(&self) -> (AlternativeInput, AlternativeInput) {
        (self.defaults.alternative_b, self.defaults.alternative_c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_mode_always_valid() {
        let collector = ParameterCollector::new(ParameterDefaults::default());
        let (b, c) = collector.collect_defaults();
        assert!(collector.collect_alternative(b).is_ok());
        assert!(collector.collect_alternative(c).is_ok());
    }

    #[test]
    fn test_rejected_input_carries_error() {
        let collector = ParameterCollector::new(ParameterDefaults::default());
        let mut input = collector.defaults().alternative_c;
        input.probability_2 = 0.4;
        let err = collector
            .collect_alternative(input)
            .expect_err("0.7 + 0.4 must be rejected");
        assert_eq!(err.p1, 0.7);
        assert_eq!(err.p2, 0.4);
    }
}
