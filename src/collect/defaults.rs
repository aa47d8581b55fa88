use crate::emv::{AlternativeInput, ScenarioInput};

/// Display labels for the two alternatives being compared.
pub const LABEL_B: &str = "B";
pub const LABEL_C: &str = "C";

/// The built-in parameter set, reproducible bit-for-bit.
///
/// Alternative B launches directly; alternative C first pays for a
/// market study (the fixed cost) in exchange for better odds.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ParameterDefaults {
    pub alternative_b: AlternativeInput,
    pub alternative_c: AlternativeInput,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            alternative_b: default_b(),
            alternative_c: default_c(),
        }
    }
}

pub fn default_b() -> AlternativeInput {
    AlternativeInput {
        scenario_1: ScenarioInput { units: 100_000, unit_price: 550.0 },
        scenario_2: ScenarioInput { units: 75_000, unit_price: 550.0 },
        probability_1: 0.6,
        probability_2: 0.4,
        fixed_cost: 0.0,
    }
}

pub fn default_c() -> AlternativeInput {
    AlternativeInput {
        scenario_1: ScenarioInput { units: 75_000, unit_price: 750.0 },
        scenario_2: ScenarioInput { units: 70_000, unit_price: 750.0 },
        probability_1: 0.7,
        probability_2: 0.3,
        fixed_cost: 100_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::validate::validate_probabilities;

    #[test]
    fn test_default_set_is_valid() {
        let d = ParameterDefaults::default();
        assert!(validate_probabilities(d.alternative_b.probability_1, d.alternative_b.probability_2).is_ok());
        assert!(validate_probabilities(d.alternative_c.probability_1, d.alternative_c.probability_2).is_ok());
    }

    #[test]
    fn test_default_values_exact() {
        let d = ParameterDefaults::default();
        assert_eq!(d.alternative_b.scenario_1.units, 100_000);
        assert_eq!(d.alternative_b.scenario_2.units, 75_000);
        assert_eq!(d.alternative_b.scenario_1.unit_price, 550.0);
        assert_eq!(d.alternative_b.fixed_cost, 0.0);
        assert_eq!(d.alternative_c.scenario_1.units, 75_000);
        assert_eq!(d.alternative_c.scenario_2.units, 70_000);
        assert_eq!(d.alternative_c.scenario_2.unit_price, 750.0);
        assert_eq!(d.alternative_c.fixed_cost, 100_000.0);
    }
}
