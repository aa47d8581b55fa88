/// One interaction pass: collect -> evaluate -> recommend.
///
/// Every surface (HTTP, WS) funnels through `run_pass`. The pass is a
/// pure function over the collector and the submitted parameters; state
/// replacement, broadcasts, and counters happen in the caller. Each
/// pass rebuilds everything from scratch -- nothing survives between
/// interactions.

use crate::collect::defaults::{self, LABEL_B, LABEL_C};
use crate::collect::ParameterCollector;
use crate::emv::decision::{recommend, Recommendation};
use crate::emv::{self, AlternativeInput, EvaluationResult};

/// Full parameter set submitted by one interaction.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct EvaluateRequest {
    /// Defaults mode: ignore the payload and evaluate the built-in set.
    #[serde(default)]
    pub use_defaults: bool,
    #[serde(default = "defaults::default_b")]
    pub alternative_b: AlternativeInput,
    #[serde(default = "defaults::default_c")]
    pub alternative_c: AlternativeInput,
}

impl EvaluateRequest {
    pub fn defaults() -> Self {
        Self {
            use_defaults: true,
            alternative_b: defaults::default_b(),
            alternative_c: defaults::default_c(),
        }
    }
}

/// Per-alternative slice of the pass report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AlternativeReport {
    pub label: String,
    pub input: AlternativeInput,
    pub valid: bool,
    /// Present only when the whole pair evaluated. An invalid
    /// alternative halts evaluation for both sides.
    pub result: Option<EvaluationResult>,
    /// Warning text when the probability pair was rejected.
    pub warning: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PassReport {
    /// Always two entries, B then C.
    pub alternatives: Vec<AlternativeReport>,
    /// Absent whenever either alternative is invalid.
    pub recommendation: Option<Recommendation>,
}

impl PassReport {
    /// Both alternatives validated and evaluated.
    pub fn complete(&self) -> bool {
        self.alternatives.iter().all(|a| a.result.is_some())
    }
}

/// Run one full pass over the submitted parameters.
///
/// Invalid probabilities never reach the evaluator: if either
/// alternative fails validation the pass halts, no results or
/// recommendation are produced, and the rejection is reported per
/// alternative. There is no silent fallback to defaults.
pub fn run_pass(collector: &ParameterCollector, req: &EvaluateRequest) -> PassReport {
    let (input_b, input_c) = if req.use_defaults {
        collector.collect_defaults()
    } else {
        (req.alternative_b, req.alternative_c)
    };

    let (err_b, err_c) = if req.use_defaults {
        // Defaults mode short-circuits validation.
        (None, None)
    } else {
        (
            collector.collect_alternative(input_b).err(),
            collector.collect_alternative(input_c).err(),
        )
    };

    let both_valid = err_b.is_none() && err_c.is_none();
    let (result_b, result_c, recommendation) = if both_valid {
        let rb = emv::evaluate_alternative(&input_b);
        let rc = emv::evaluate_alternative(&input_c);
        let rec = recommend(LABEL_B, rb.expected_value, LABEL_C, rc.expected_value);
        (Some(rb), Some(rc), Some(rec))
    } else {
        (None, None, None)
    };

    PassReport {
        alternatives: vec![
            AlternativeReport {
                label: LABEL_B.to_string(),
                input: input_b,
                valid: err_b.is_none(),
                result: result_b,
                warning: err_b.map(|e| e.to_string()),
            },
            AlternativeReport {
                label: LABEL_C.to_string(),
                input: input_c,
                valid: err_c.is_none(),
                result: result_c,
                warning: err_c.map(|e| e.to_string()),
            },
        ],
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::defaults::ParameterDefaults;

    fn collector() -> ParameterCollector {
        ParameterCollector::new(ParameterDefaults::default())
    }

    #[test]
    fn test_defaults_pass_recommends_c() {
        let report = run_pass(&collector(), &EvaluateRequest::defaults());
        assert!(report.complete());

        let rec = report.recommendation.expect("defaults must produce a recommendation");
        assert_eq!(rec.label, "C");
        assert_eq!(rec.expected_value, 55_025_000.0);
        assert_eq!(rec.runner_up_expected_value, 49_500_000.0);
    }

    #[test]
    fn test_custom_pass_matches_defaults_pass() {
        let req = EvaluateRequest {
            use_defaults: false,
            ..EvaluateRequest::defaults()
        };
        let report = run_pass(&collector(), &req);
        assert!(report.complete(), "default values submitted as custom input must validate");
        assert_eq!(report.recommendation.unwrap().label, "C");
    }

    #[test]
    fn test_invalid_pair_halts_the_whole_pass() {
        let mut req = EvaluateRequest {
            use_defaults: false,
            ..EvaluateRequest::defaults()
        };
        req.alternative_c.probability_2 = 0.4; // 0.7 + 0.4

        let report = run_pass(&collector(), &req);
        assert!(!report.complete());
        assert!(report.recommendation.is_none(), "no recommendation with an invalid side");

        let b = &report.alternatives[0];
        let c = &report.alternatives[1];
        assert!(b.valid);
        assert!(b.result.is_none(), "valid side is still not evaluated when the pair is broken");
        assert!(!c.valid);
        assert!(c.result.is_none());
        assert!(c.warning.as_deref().unwrap().contains("sum to 1.0"));
    }

    #[test]
    fn test_tie_recommends_b() {
        // Same EMV on both sides: B nets 1000 per scenario, C grosses
        // 1100 but pays a 100 study.
        let mut req = EvaluateRequest {
            use_defaults: false,
            ..EvaluateRequest::defaults()
        };
        req.alternative_b.scenario_1 = crate::emv::ScenarioInput { units: 100, unit_price: 10.0 };
        req.alternative_b.scenario_2 = crate::emv::ScenarioInput { units: 100, unit_price: 10.0 };
        req.alternative_b.probability_1 = 0.5;
        req.alternative_b.probability_2 = 0.5;
        req.alternative_b.fixed_cost = 0.0;
        req.alternative_c.scenario_1 = crate::emv::ScenarioInput { units: 110, unit_price: 10.0 };
        req.alternative_c.scenario_2 = crate::emv::ScenarioInput { units: 110, unit_price: 10.0 };
        req.alternative_c.probability_1 = 0.5;
        req.alternative_c.probability_2 = 0.5;
        req.alternative_c.fixed_cost = 100.0;

        let report = run_pass(&collector(), &req);
        let rec = report.recommendation.expect("tie still produces a recommendation");
        assert_eq!(rec.expected_value, rec.runner_up_expected_value);
        assert_eq!(rec.label, "B", "ties favor the alternative without the fixed cost");
    }
}
